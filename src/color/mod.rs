mod gradient;
mod hsl;
mod utils;

use smart_leds::RGB8;

pub use gradient::{HueDirection, HueGradient, HueGradientIter, interpolate};
pub use hsl::{HSL_MAX, Hsl};
pub use utils::{pack, rgb_from_u32, rgb_to_u32, unpack_blue, unpack_green, unpack_red};

pub type Rgb = RGB8;

// Named colors in 0xRRGGBB format
pub const BLACK: u32 = 0x00_00_00;
pub const RED: u32 = 0xFF_00_00;
pub const ORANGE: u32 = 0xFF_A5_00;
pub const YELLOW: u32 = 0xFF_FF_00;
pub const GREEN: u32 = 0x00_FF_00;
pub const CYAN: u32 = 0x00_FF_FF;
pub const BLUE: u32 = 0x00_00_FF;
pub const INDIGO: u32 = 0x4B_00_82;
pub const VIOLET: u32 = 0x8A_2B_E2;
pub const PURPLE: u32 = 0xFF_00_FF;
pub const WHITE: u32 = 0xFF_FF_FF;
