use crate::color::Rgb;

/// Fill `leds[start_pos..=end_pos]` with an RGB gradient (ported from `FastLED`)
///
/// Channels are stepped in 8.8 fixed point so both endpoints land exactly.
/// Positions past the end of the slice are ignored.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn fill_gradient_rgb(
    leds: &mut [Rgb],
    start_pos: usize,
    start_color: Rgb,
    end_pos: usize,
    end_color: Rgb,
) {
    if leds.is_empty() {
        return;
    }

    // Ensure proper ordering
    let (start_pos, end_pos, start_color, end_color) = if end_pos < start_pos {
        (end_pos, start_pos, end_color, start_color)
    } else {
        (start_pos, end_pos, start_color, end_color)
    };

    // Calculate distances in 8.7 fixed-point
    let r_distance87 = (i32::from(end_color.r) - i32::from(start_color.r)) << 7;
    let g_distance87 = (i32::from(end_color.g) - i32::from(start_color.g)) << 7;
    let b_distance87 = (i32::from(end_color.b) - i32::from(start_color.b)) << 7;

    let pixel_distance = end_pos - start_pos;
    let divisor = if pixel_distance == 0 {
        1
    } else {
        pixel_distance as i32
    };

    // 8.8 deltas per pixel
    let r_delta88 = (r_distance87 / divisor) * 2;
    let g_delta88 = (g_distance87 / divisor) * 2;
    let b_delta88 = (b_distance87 / divisor) * 2;

    let mut r88 = i32::from(start_color.r) << 8;
    let mut g88 = i32::from(start_color.g) << 8;
    let mut b88 = i32::from(start_color.b) << 8;

    let end_pos = end_pos.min(leds.len() - 1);
    for led in leds.iter_mut().take(end_pos + 1).skip(start_pos) {
        *led = Rgb {
            r: (r88 >> 8).clamp(0, 255) as u8,
            g: (g88 >> 8).clamp(0, 255) as u8,
            b: (b88 >> 8).clamp(0, 255) as u8,
        };
        r88 += r_delta88;
        g88 += g_delta88;
        b88 += b_delta88;
    }
}

/// Spread four colors over the whole slice, at 0, 1/3, 2/3 and the last pixel
pub fn fill_gradient_four_rgb(leds: &mut [Rgb], c1: Rgb, c2: Rgb, c3: Rgb, c4: Rgb) {
    if leds.is_empty() {
        return;
    }

    let len = leds.len();
    let one_third = len / 3;
    let two_thirds = (len * 2) / 3;
    let last = len - 1;

    fill_gradient_rgb(leds, 0, c1, one_third, c2);
    fill_gradient_rgb(leds, one_third, c2, two_thirds, c3);
    fill_gradient_rgb(leds, two_thirds, c3, last, c4);
}
