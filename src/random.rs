//! Uniform 8-bit random draws
//!
//! Effects and themes only need small uniform draws. Any [`RngCore`] works as
//! a source, so firmware can plug in a hardware generator and tests can seed
//! a `SmallRng`.

use rand::RngCore;

/// Source of uniform 8-bit random values
pub trait Random8 {
    /// Uniform value in `0..=255`
    fn random8(&mut self) -> u8;

    /// Uniform value in `0..limit`, or 0 when `limit` is 0
    #[allow(clippy::cast_possible_truncation)]
    fn random8_below(&mut self, limit: u8) -> u8 {
        ((u16::from(self.random8()) * u16::from(limit)) >> 8) as u8
    }

    /// Uniform value in `min..limit`, or `min` when the range is empty
    fn random8_range(&mut self, min: u8, limit: u8) -> u8 {
        if limit <= min {
            return min;
        }
        min + self.random8_below(limit - min)
    }

    /// Uniform value in `min..=max`, or `min` when `max < min`
    #[allow(clippy::cast_possible_truncation)]
    fn random8_inclusive(&mut self, min: u8, max: u8) -> u8 {
        if max <= min {
            return min;
        }
        let span = u16::from(max - min) + 1;
        min + ((u16::from(self.random8()) * span) >> 8) as u8
    }

    /// Uniform value in `[0.0, 1.0)`
    fn random_unit(&mut self) -> f32 {
        f32::from(self.random8()) / 256.0
    }
}

impl<R: RngCore> Random8 for R {
    #[allow(clippy::cast_possible_truncation)]
    fn random8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }
}
