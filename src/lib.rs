#![no_std]

pub mod buffer;
pub mod channel_order;
pub mod color;
pub mod config;
pub mod effect;
pub mod frame;
pub mod math8;
pub mod strip;
pub mod transport;

pub use buffer::StripBuffer;
pub use channel_order::ChannelOrder;
pub use config::{DEFAULT_BRIGHTNESS, StripConfig};
pub use effect::{BarGraphEffect, Effect, RainbowEffect, StaticColorEffect};
pub use frame::Frame;
pub use strip::Strip;
pub use transport::{SpiMode, Transport, TransportConfig};

pub use color::{Hsl, HueDirection, HueGradient, Rgb, interpolate, pack};
