/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Quadratic rise-and-fall ramp (0-255) over `len` positions
///
/// Position 0 is dark, the midpoint `len / 2` is at full scale, and the
/// ramp falls back towards the last position. Returns 255 for ramps shorter
/// than two positions.
#[allow(clippy::cast_possible_truncation)]
pub const fn quad_ramp8(position: usize, len: usize) -> u8 {
    let mid = (len / 2) as u64;
    if mid == 0 {
        return 255;
    }
    let position = position as u64;
    let distance = if position > mid {
        (len as u64).saturating_sub(1 + position)
    } else {
        position
    };
    let scale = 255 * distance * distance / (mid * mid);
    if scale > 255 { 255 } else { scale as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_ramp8() {
        assert_eq!(quad_ramp8(0, 8), 0);
        assert_eq!(quad_ramp8(2, 8), 63);
        assert_eq!(quad_ramp8(4, 8), 255);
        assert_eq!(quad_ramp8(7, 8), 0);
        assert_eq!(quad_ramp8(0, 1), 255);
    }
}
