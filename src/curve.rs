//! LED curve controller
//!
//! [`LedCurve`] owns the pixel buffer, the shape and the color scheduler. It
//! drives an effect frame by frame and prepares every frame for the strip:
//! a folded strip gets its second half mirrored from the first, then blackout
//! pixels are forced dark.

use core::fmt;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::effect::LightEffect;
use crate::scheduler::{ColorScheduler, ThemeStrategy};
use crate::shape::Shape;

/// Maximum number of pixels that can be blacked out
pub const MAX_BLACKOUTS: usize = 16;

/// Invalid curve setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The physical strip does not fit the pixel buffer
    BufferTooSmall { required: usize, capacity: usize },
    /// More blackout pixels than [`MAX_BLACKOUTS`]
    TooManyBlackouts { count: usize },
    /// A blackout index is past the end of the physical strip
    BlackoutOutOfRange { index: usize, len: usize },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { required, capacity } => write!(
                f,
                "strip needs {} pixels but the buffer holds {}",
                required, capacity
            ),
            Self::TooManyBlackouts { count } => write!(
                f,
                "{} blackout pixels requested, at most {} supported",
                count, MAX_BLACKOUTS
            ),
            Self::BlackoutOutOfRange { index, len } => write!(
                f,
                "blackout pixel {} is outside the {} pixel strip",
                index, len
            ),
        }
    }
}

/// Borrowed view of a curve for painting one frame
pub struct Canvas<'a, S, T> {
    pub shape: &'a S,
    pub color_scheduler: &'a mut ColorScheduler<T>,
    /// One pixel per logical point
    pub leds: &'a mut [Rgb],
}

/// Pixel buffer bound to a shape
///
/// `MAX_LEDS` is the capacity of the physical pixel buffer.
pub struct LedCurve<S, T, const MAX_LEDS: usize> {
    leds: Vec<Rgb, MAX_LEDS>,
    shape: S,
    color_scheduler: ColorScheduler<T>,
    folded: bool,
    blackout: Vec<usize, MAX_BLACKOUTS>,
}

impl<S: Shape, T: ThemeStrategy, const MAX_LEDS: usize> LedCurve<S, T, MAX_LEDS> {
    /// Create a curve with all pixels off
    ///
    /// A folded strip doubles back on itself and has twice as many physical
    /// pixels as the shape has points.
    pub fn new(
        shape: S,
        color_scheduler: ColorScheduler<T>,
        folded: bool,
    ) -> Result<Self, CurveError> {
        let n_points = shape.n_points();
        let required = if folded { n_points * 2 } else { n_points };
        let mut leds = Vec::new();
        if leds.resize(required, BLACK).is_err() {
            return Err(CurveError::BufferTooSmall {
                required,
                capacity: MAX_LEDS,
            });
        }
        Ok(Self {
            leds,
            shape,
            color_scheduler,
            folded,
            blackout: Vec::new(),
        })
    }

    /// Pixels that are forced off on every frame
    ///
    /// Replaces the previous blackout set. On error the previous set is kept.
    pub fn set_blackout(&mut self, indices: &[usize]) -> Result<(), CurveError> {
        if let Some(&index) = indices.iter().find(|&&index| index >= self.leds.len()) {
            return Err(CurveError::BlackoutOutOfRange {
                index,
                len: self.leds.len(),
            });
        }
        let blackout = Vec::from_slice(indices).map_err(|()| CurveError::TooManyBlackouts {
            count: indices.len(),
        })?;
        self.blackout = blackout;
        Ok(())
    }

    pub fn blackout(&self) -> &[usize] {
        &self.blackout
    }

    pub const fn shape(&self) -> &S {
        &self.shape
    }

    pub const fn color_scheduler(&self) -> &ColorScheduler<T> {
        &self.color_scheduler
    }

    pub fn color_scheduler_mut(&mut self) -> &mut ColorScheduler<T> {
        &mut self.color_scheduler
    }

    pub const fn is_folded(&self) -> bool {
        self.folded
    }

    /// Number of logical points
    pub fn n_points(&self) -> usize {
        self.shape.n_points()
    }

    /// Physical pixel buffer
    pub fn leds(&self) -> &[Rgb] {
        &self.leds
    }

    /// Physical pixel buffer
    pub fn leds_mut(&mut self) -> &mut [Rgb] {
        &mut self.leds
    }

    /// Split the curve into the parts an effect paints with
    pub fn canvas(&mut self) -> Canvas<'_, S, T> {
        let n_points = self.shape.n_points();
        Canvas {
            shape: &self.shape,
            color_scheduler: &mut self.color_scheduler,
            leds: &mut self.leds[..n_points],
        }
    }

    /// Mirror a folded strip and apply the blackout set
    pub fn prepare_frame(&mut self) {
        if self.folded {
            let n = self.shape.n_points();
            let (first, second) = self.leds.split_at_mut(n);
            for (mirrored, led) in second.iter_mut().zip(first.iter().rev()) {
                *mirrored = *led;
            }
        }
        for &index in &self.blackout {
            if let Some(led) = self.leds.get_mut(index) {
                *led = BLACK;
            }
        }
    }

    /// Prepare the frame, send it to the strip and wait `frame_delay`
    pub fn display<O: OutputDriver, D: DelayNs>(
        &mut self,
        output: &mut O,
        delay: &mut D,
        frame_delay: Duration,
    ) {
        self.prepare_frame();
        output.write(&self.leds);
        delay.delay_ms(u32::try_from(frame_delay.as_millis()).unwrap_or(u32::MAX));
    }

    /// Play `effect` for `seconds` at `fps` frames per second
    ///
    /// Renders exactly `seconds * fps` frames and sleeps a fixed `1000 / fps`
    /// ms after each one, regardless of how long rendering took. Nothing is
    /// rendered when `fps` is zero.
    pub fn run_effect<E: LightEffect, O: OutputDriver, D: DelayNs>(
        &mut self,
        effect: &mut E,
        fps: u32,
        seconds: u32,
        output: &mut O,
        delay: &mut D,
    ) {
        let Some(frame_ms) = 1000_u32.checked_div(fps) else {
            return;
        };
        let frame_delay = Duration::from_millis(u64::from(frame_ms));
        let frame_count = seconds.saturating_mul(fps);

        #[cfg(feature = "esp32-log")]
        println!(
            "[LedCurve.run_effect] {} for {} frames at {} fps",
            effect.name(),
            frame_count,
            fps
        );

        for _ in 0..frame_count {
            effect.update(self);
            self.display(output, delay, frame_delay);
        }
    }
}
