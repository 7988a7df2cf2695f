//! Hue/saturation/luminosity color model
//!
//! Conversion to RGB uses the 60 degree sector method in scaled integer
//! arithmetic. Chroma and the lightness offset are computed directly on the
//! 0-255 channel scale, so primaries at full saturation and half luminosity
//! land exactly on 0xFF.

use crate::color::{Rgb, pack, rgb_from_u32};

/// Largest accepted saturation and luminosity
pub const HSL_MAX: i32 = 100;

const HUE_CIRCLE: i32 = 360;
const SECTOR_DEGREES: i32 = 60;
const CHANNEL_MAX: i32 = 255;

/// HSL color with integer components
///
/// Hue is kept in `[0, 360)`, saturation and luminosity in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_percent(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > HSL_MAX {
        HSL_MAX as u8
    } else {
        value as u8
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn normalize_hue(h: i32) -> u16 {
    h.rem_euclid(HUE_CIRCLE) as u16
}

impl Hsl {
    /// Create a new HSL color
    ///
    /// Hue is reduced modulo 360 (negative values wrap), saturation and
    /// luminosity are clamped.
    pub const fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    pub const fn hue(self) -> i32 {
        self.h as i32
    }

    pub const fn saturation(self) -> i32 {
        self.s as i32
    }

    pub const fn luminosity(self) -> i32 {
        self.l as i32
    }

    /// Shift the hue by `offset` degrees
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn rotate_hue(&mut self, offset: i32) {
        self.h = normalize_hue(self.h as i32 + offset);
    }

    /// Convert to a packed `0xRRGGBB` value
    #[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
    pub const fn to_rgb(self) -> u32 {
        let h = self.h as i32;
        let s = self.s as i32;
        let l = self.l as i32;

        let chroma = (HSL_MAX - (2 * l - HSL_MAX).abs()) * s * CHANNEL_MAX
            / (HSL_MAX * HSL_MAX);
        let sector = h / SECTOR_DEGREES;
        let position = (h - sector * SECTOR_DEGREES) * CHANNEL_MAX / SECTOR_DEGREES;
        let ramp = ((sector % 2) * CHANNEL_MAX + position - CHANNEL_MAX).abs();
        let x = chroma * (CHANNEL_MAX - ramp) / CHANNEL_MAX;

        let (r, g, b) = match sector {
            0 => (chroma, x, 0),
            1 => (x, chroma, 0),
            2 => (0, chroma, x),
            3 => (0, x, chroma),
            4 => (x, 0, chroma),
            _ => (chroma, 0, x),
        };

        let m = (l * 2 * CHANNEL_MAX / HSL_MAX - chroma) / 2;
        pack((r + m) as u32, (g + m) as u32, (b + m) as u32)
    }
}

impl From<Hsl> for Rgb {
    fn from(color: Hsl) -> Self {
        rgb_from_u32(color.to_rgb())
    }
}
