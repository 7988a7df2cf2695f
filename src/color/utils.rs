use crate::color::Rgb;

/// Pack three channels into a `0xRRGGBB` value.
///
/// Each channel is masked to 8 bits, so out-of-range inputs wrap.
#[inline]
pub const fn pack(r: u32, g: u32, b: u32) -> u32 {
    ((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

/// Red channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_red(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xFF) as u8
}

/// Green channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_green(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xFF) as u8
}

/// Blue channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_blue(rgb: u32) -> u8 {
    (rgb & 0xFF) as u8
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: unpack_red(color),
        g: unpack_green(color),
        b: unpack_blue(color),
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    pack(color.r as u32, color.g as u32, color.b as u32)
}
