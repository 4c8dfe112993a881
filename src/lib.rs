#![no_std]

pub mod color;
pub mod curve;
pub mod effect;
pub mod math8;
pub mod projection;
pub mod random;
pub mod scheduler;
pub mod shape;

pub use curve::{Canvas, CurveError, LedCurve};
pub use effect::{
    Axis, BlinkEffect, BlinkPhase, BlinkRegion, EffectId, EffectSlot, FlameConfig, FlameEffect,
    HauntMode, LightEffect,
};
pub use projection::{Projection, ProjectionError};
pub use random::Random8;
pub use scheduler::{ColorScheduler, HueWalk, SchedulerError, ThemeStrategy};
pub use shape::{LinearShape, Point, PointShape, Shape};

pub use color::{Hsv, Rgb};
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms. The curve
/// hands over the full physical buffer once per frame, after folding and
/// blackout.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
