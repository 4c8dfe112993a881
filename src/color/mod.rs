mod gradient;
mod palette;
mod utils;

pub use gradient::{fill_gradient_four_rgb, fill_gradient_rgb};
pub use palette::{HEAT_PALETTE, Palette16};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{BLACK, hsv2rgb, hue_to_rgb, lerp_colors, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
