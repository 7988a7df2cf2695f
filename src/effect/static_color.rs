//! Static color fill effect
//!
//! Fills all LEDs with a single solid color.

use super::Effect;
use crate::{strip::Strip, transport::Transport};

/// Static color effect - fills all LEDs with one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticColorEffect {
    color: u32,
}

impl StaticColorEffect {
    /// Create a new static color effect
    pub const fn new(color: u32) -> Self {
        Self { color }
    }
}

impl Effect for StaticColorEffect {
    fn render<T: Transport, const LEDS: usize>(&self, strip: &Strip<'_, T, LEDS>) {
        strip.set_all(self.color);
    }
}
