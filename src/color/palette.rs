//! 16-entry color palettes with blended lookup
//!
//! A palette index (0-255) selects one of 16 entries by its high nibble and
//! blends towards the following entry by its low nibble. The last entry blends
//! back towards the first one, so callers that need a monotonic ramp should
//! keep indices at or below 240.

use crate::{
    color::{Rgb, fill_gradient_four_rgb, rgb_from_u32},
    math8::scale8,
};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        Palette16::new([
            $(rgb_from_u32($color)),*
        ])
    };
}

/// Black -> red -> yellow -> white fire ramp
#[allow(clippy::unreadable_literal)]
pub const HEAT_PALETTE: Palette16 = hex_palette![
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600,
    0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF
];

const BLUE: Rgb = rgb_from_u32(0x0000FF);
const AQUA: Rgb = rgb_from_u32(0x00FFFF);
const GREEN: Rgb = rgb_from_u32(0x008000);
const LIME: Rgb = rgb_from_u32(0x00FF00);
const WHITE: Rgb = rgb_from_u32(0xFFFFFF);
const BLACK: Rgb = rgb_from_u32(0x000000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    entries: [Rgb; 16],
}

impl Palette16 {
    pub const fn new(entries: [Rgb; 16]) -> Self {
        Self { entries }
    }

    /// Spread four anchor colors evenly over the 16 entries
    pub fn from_four(c1: Rgb, c2: Rgb, c3: Rgb, c4: Rgb) -> Self {
        let mut entries = [BLACK; 16];
        fill_gradient_four_rgb(&mut entries, c1, c2, c3, c4);
        Self { entries }
    }

    /// Blue/white "ghost" flame
    pub fn ghost() -> Self {
        Self::from_four(BLACK, BLUE, AQUA, WHITE)
    }

    /// Green/white "toxic" flame
    pub fn toxic() -> Self {
        Self::from_four(BLACK, GREEN, LIME, WHITE)
    }

    pub const fn entries(&self) -> &[Rgb; 16] {
        &self.entries
    }

    /// Sample the palette at `index`, blending between neighbouring entries
    pub fn color_at(&self, index: u8) -> Rgb {
        let hi4 = usize::from(index >> 4);
        let lo4 = index & 0x0F;

        let first = self.entries[hi4];
        if lo4 == 0 {
            return first;
        }

        let second = self.entries[(hi4 + 1) % self.entries.len()];
        let amount_of_second = lo4 << 4;
        let amount_of_first = 255 - amount_of_second;

        Rgb {
            r: scale8(first.r, amount_of_first) + scale8(second.r, amount_of_second),
            g: scale8(first.g, amount_of_first) + scale8(second.g, amount_of_second),
            b: scale8(first.b, amount_of_first) + scale8(second.b, amount_of_second),
        }
    }
}
