//! Bar graph effect
//!
//! Lights the strip proportionally to a value. Lit pixels blend from blue
//! at the first pixel towards red at the end of the strip.

use super::Effect;
use crate::{
    color::{YELLOW, pack},
    strip::Strip,
    transport::Transport,
};

/// Marker shown when the value rounds down to zero
const ZERO_MARKER: u32 = 0x66_66_00;

/// Bar graph of `value` against a full scale of `high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGraphEffect {
    value: i32,
    high: i32,
}

impl BarGraphEffect {
    pub const fn new(value: i32, high: i32) -> Self {
        Self { value, high }
    }

    /// Index of the last lit pixel on a strip of `len` pixels
    ///
    /// Returns `None` when the scale is not positive.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn level(&self, len: usize) -> Option<usize> {
        if self.high <= 0 {
            return None;
        }
        let value = i64::from(self.value).unsigned_abs();
        Some((value * len as u64 / self.high as u64) as usize)
    }
}

impl Effect for BarGraphEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<T: Transport, const LEDS: usize>(&self, strip: &Strip<'_, T, LEDS>) {
        strip.clear();
        let Some(level) = self.level(strip.len()) else {
            strip.set_pixel(0, YELLOW);
            return;
        };

        if level == 0 {
            strip.set_pixel(0, ZERO_MARKER);
            return;
        }

        let last = strip.len().saturating_sub(1).max(1);
        for index in 0..=level.min(strip.len().saturating_sub(1)) {
            let red = (index * 255 / last) as u32;
            strip.set_pixel(index, pack(red, 0, 255 - red));
        }
    }
}
