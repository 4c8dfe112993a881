pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::lerp8,
};

/// Unlit pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Interpolate each channel from `a` to `b` at exactly `num / den`
#[inline]
pub const fn lerp_colors(a: Rgb, b: Rgb, num: u16, den: u16) -> Rgb {
    Rgb {
        r: lerp8(a.r, b.r, num, den),
        g: lerp8(a.g, b.g, num, den),
        b: lerp8(a.b, b.b, num, den),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Fully saturated, full brightness color for a hue on the 0-255 circle
#[inline]
pub fn hue_to_rgb(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}
