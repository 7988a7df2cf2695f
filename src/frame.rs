//! APA102 frame encoding
//!
//! Every LED is driven by a 4-byte frame: a brightness byte with the fixed
//! `0b111` header in its top bits, followed by three color bytes whose order
//! depends on the strip wiring. A transmission is framed by a 4-byte start
//! frame of zeros and an end frame of zeros sized by the LED count.

use crate::channel_order::ChannelOrder;
use crate::color::{pack, unpack_blue, unpack_green, unpack_red};

/// Encoded LED frame
pub type Frame = [u8; FRAME_SIZE];

/// Number of bytes in an LED frame
pub const FRAME_SIZE: usize = 4;

/// Number of zero bytes preceding the LED frames
pub const START_FRAME_LEN: usize = 4;

/// Largest global brightness value (5 bits)
pub const MAX_BRIGHTNESS: u8 = 0x1F;

const BRIGHTNESS_HEADER: u8 = 0b1110_0000;

/// Brightness byte for `level`, masked to 5 bits
pub const fn brightness_byte(level: u8) -> u8 {
    BRIGHTNESS_HEADER | (level & MAX_BRIGHTNESS)
}

/// Number of zero bytes following `pixels` LED frames
pub const fn end_frame_len(pixels: usize) -> usize {
    (pixels + 15).div_ceil(16)
}

/// Total number of bytes in a transmission of `pixels` LED frames
pub const fn transmission_len(pixels: usize) -> usize {
    START_FRAME_LEN + pixels * FRAME_SIZE + end_frame_len(pixels)
}

/// Write a packed color into the color bytes of `frame`
pub(crate) fn encode_color(frame: &mut Frame, order: ChannelOrder, rgb: u32) {
    let [r, g, b] = order.offsets();
    frame[r] = unpack_red(rgb);
    frame[g] = unpack_green(rgb);
    frame[b] = unpack_blue(rgb);
}

/// Read the packed color stored in `frame`
pub(crate) fn decode_color(frame: &Frame, order: ChannelOrder) -> u32 {
    let [r, g, b] = order.offsets();
    pack(u32::from(frame[r]), u32::from(frame[g]), u32::from(frame[b]))
}

/// Zero the color bytes of `frame`, keeping its brightness byte
pub(crate) fn clear_color(frame: &mut Frame) {
    frame[1..].fill(0);
}
