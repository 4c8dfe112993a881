//! Blinking face effect
//!
//! The curve is painted with the current theme color, except inside one
//! active region (left eye, right eye, then mouth) where points beyond a
//! moving threshold go dark. The threshold closes and reopens over one pass
//! of the counter, so each region in turn looks like a blinking eyelid or a
//! moving mouth.

use super::{EFFECT_NAME_BLINK, LightEffect};
use crate::{
    color::{BLACK, Rgb},
    curve::LedCurve,
    scheduler::ThemeStrategy,
    shape::Shape,
};

/// Counter increment per frame
const COUNTER_STEP: u8 = 4;
/// The active region changes once the counter goes past this value
const COUNTER_LIMIT: u8 = 200;

/// Centers and radii are stored in units of 1/10000
const FIXED_SCALE: f32 = 10_000.0;

const EYE_BASE_THRESHOLD: f32 = 0.05;
const MOUTH_BASE_THRESHOLD: f32 = 0.10;

/// Coordinate a region is measured along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One blinking region of the face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkRegion {
    /// First logical index of the region
    pub start: usize,
    /// Last logical index of the region, inclusive
    pub end: usize,
    /// Signed center along `axis`, in 1/10000
    pub center: i16,
    /// Opening amplitude, in 1/10000
    pub radius: i16,
    pub axis: Axis,
    /// Threshold left open at the middle of a blink
    pub base: f32,
}

impl BlinkRegion {
    pub const fn eye(start: usize, end: usize, center: i16, radius: i16, axis: Axis) -> Self {
        Self {
            start,
            end,
            center,
            radius,
            axis,
            base: EYE_BASE_THRESHOLD,
        }
    }

    pub const fn mouth(start: usize, end: usize, center: i16, radius: i16, axis: Axis) -> Self {
        Self {
            start,
            end,
            center,
            radius,
            axis,
            base: MOUTH_BASE_THRESHOLD,
        }
    }

    pub const fn contains(&self, i: usize) -> bool {
        i >= self.start && i <= self.end
    }

    /// Whether point `i` stays lit at ramp position `pct` (0.0 closed, 1.0 open)
    fn is_lit<S: Shape>(&self, shape: &S, i: usize, pct: f32) -> bool {
        let coordinate = match self.axis {
            Axis::X => shape.x(i),
            Axis::Y => shape.y(i),
        };
        let threshold = self.base + pct * f32::from(self.radius) / FIXED_SCALE;
        let d = coordinate - f32::from(self.center) / FIXED_SCALE;
        d <= threshold
    }
}

/// Region currently blinking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    LeftEye = 0,
    RightEye = 1,
    Mouth = 2,
}

impl BlinkPhase {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::LeftEye => Self::RightEye,
            Self::RightEye => Self::Mouth,
            Self::Mouth => Self::LeftEye,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlinkEffect {
    regions: [BlinkRegion; 3],
    counter: u8,
    phase: BlinkPhase,
}

impl BlinkEffect {
    pub const fn new(left_eye: BlinkRegion, right_eye: BlinkRegion, mouth: BlinkRegion) -> Self {
        Self {
            regions: [left_eye, right_eye, mouth],
            counter: 0,
            phase: BlinkPhase::LeftEye,
        }
    }

    /// Calibration for the large face, all regions measured vertically
    pub const fn large_face() -> Self {
        Self::new(
            BlinkRegion::eye(78, 95, -5204, 2228, Axis::Y),
            BlinkRegion::eye(107, 119, -5069, 2034, Axis::Y),
            BlinkRegion::mouth(0, 73, 54, 9153, Axis::Y),
        )
    }

    /// Calibration for the small face
    ///
    /// Eyes are measured horizontally and the mouth vertically, matching how
    /// that face was measured.
    pub const fn small_face() -> Self {
        Self::new(
            BlinkRegion::eye(70, 74, -2284, 1305, Axis::X),
            BlinkRegion::eye(77, 81, 2054, 1262, Axis::X),
            BlinkRegion::mouth(91, 100, 2593, 1513, Axis::Y),
        )
    }

    pub const fn counter(&self) -> u8 {
        self.counter
    }

    pub const fn phase(&self) -> BlinkPhase {
        self.phase
    }

    pub const fn regions(&self) -> &[BlinkRegion; 3] {
        &self.regions
    }

    /// Triangular ramp over the counter: 1.0 at 0, 0.0 at 100, 1.0 at 200
    fn ramp(&self) -> f32 {
        libm::fabsf(1.0 - f32::from(self.counter) / 100.0)
    }

    fn paint<S: Shape>(&self, shape: &S, leds: &mut [Rgb], color: Rgb) {
        let region = &self.regions[self.phase as usize];
        let pct = self.ramp();
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if !region.contains(i) || region.is_lit(shape, i, pct) {
                color
            } else {
                BLACK
            };
        }
    }
}

impl LightEffect for BlinkEffect {
    fn update<S: Shape, T: ThemeStrategy, const MAX_LEDS: usize>(
        &mut self,
        curve: &mut LedCurve<S, T, MAX_LEDS>,
    ) {
        let canvas = curve.canvas();
        let color = canvas.color_scheduler.next_color();
        self.counter = self.counter.wrapping_add(COUNTER_STEP);

        self.paint(canvas.shape, canvas.leds, color);

        if self.counter > COUNTER_LIMIT {
            self.counter = 0;
            self.phase = self.phase.next();
        }
    }

    fn name(&self) -> &'static str {
        EFFECT_NAME_BLINK
    }
}
