//! 8-bit fixed-point helpers shared by palettes, themes and effects.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Exact linear interpolation from `a` towards `b` at `num / den`
///
/// Returns `a` when `den` is zero. The result always lies between `a` and `b`.
#[inline]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn lerp8(a: u8, b: u8, num: u16, den: u16) -> u8 {
    if den == 0 {
        return a;
    }
    let delta = b as i32 - a as i32;
    (a as i32 + delta * num as i32 / den as i32) as u8
}

/// Rescale the fraction `num / den` to 0-255
///
/// Saturates at 255 when `num >= den`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn fraction8(num: u16, den: u16) -> u8 {
    if den == 0 {
        return 0;
    }
    if num >= den {
        return 255;
    }
    ((num as u32 * 255) / den as u32) as u8
}
