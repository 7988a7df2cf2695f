//! Rainbow effect
//!
//! Spreads a clockwise hue gradient at full saturation and half luminosity
//! across the strip.

use super::Effect;
use crate::{
    color::{HSL_MAX, Hsl, HueDirection, interpolate},
    strip::Strip,
    transport::Transport,
};

const DEFAULT_START_HUE: i32 = 1;
const DEFAULT_END_HUE: i32 = 360;
const LUMINOSITY: i32 = 50;

/// Rainbow between two hues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowEffect {
    start_hue: i32,
    end_hue: i32,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self::new(DEFAULT_START_HUE, DEFAULT_END_HUE)
    }
}

impl RainbowEffect {
    pub const fn new(start_hue: i32, end_hue: i32) -> Self {
        Self { start_hue, end_hue }
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render<T: Transport, const LEDS: usize>(&self, strip: &Strip<'_, T, LEDS>) {
        if strip.is_empty() {
            return;
        }

        let start = Hsl::new(self.start_hue, HSL_MAX, LUMINOSITY);
        let end = Hsl::new(self.end_hue, HSL_MAX, LUMINOSITY);
        let gradient = interpolate(start, end, strip.len() as i32, HueDirection::Clockwise);

        for (index, color) in gradient.iter().enumerate() {
            strip.set_pixel(index, color.to_rgb());
        }
    }
}
