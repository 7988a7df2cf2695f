//! Effects composed from the color model and strip primitives
//!
//! An effect writes pixel colors into a strip view; [`Strip::show`] renders
//! it and flushes the result.

mod bar_graph;
mod rainbow;
mod static_color;

pub use bar_graph::BarGraphEffect;
pub use rainbow::RainbowEffect;
pub use static_color::StaticColorEffect;

use crate::strip::Strip;
use crate::transport::Transport;

pub trait Effect {
    /// Write the effect colors into `strip`
    fn render<T: Transport, const LEDS: usize>(&self, strip: &Strip<'_, T, LEDS>);
}
