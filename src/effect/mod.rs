//! Effect system with compile-time known effect variants
//!
//! Every effect implements [`LightEffect`]: one call paints one frame of the
//! curve and advances the effect's own counters. [`EffectSlot`] holds any of
//! the known effects without heap allocation.

mod blink;
mod flame;

pub use blink::{Axis, BlinkEffect, BlinkPhase, BlinkRegion};
pub use flame::{FlameConfig, FlameEffect, HauntMode};

use crate::curve::LedCurve;
use crate::random::Random8;
use crate::scheduler::ThemeStrategy;
use crate::shape::Shape;

const EFFECT_NAME_BLINK: &str = "blink";
const EFFECT_NAME_FLAME: &str = "flame";

const EFFECT_ID_BLINK: u8 = 0;
const EFFECT_ID_FLAME: u8 = 1;

pub trait LightEffect {
    /// Paint every logical point of the curve, then advance one frame
    fn update<S: Shape, T: ThemeStrategy, const MAX_LEDS: usize>(
        &mut self,
        curve: &mut LedCurve<S, T, MAX_LEDS>,
    );

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Effect slot - enum containing all possible effects
///
/// `N` is the projection capacity of the flame effect.
#[derive(Debug, Clone)]
pub enum EffectSlot<R, const N: usize> {
    /// Blinking eyes and mouth on a face-shaped curve
    Blink(BlinkEffect),
    /// Heat diffusion flame
    Flame(FlameEffect<R, N>),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Blink = EFFECT_ID_BLINK,
    Flame = EFFECT_ID_FLAME,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_BLINK => Self::Blink,
            EFFECT_ID_FLAME => Self::Flame,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blink => EFFECT_NAME_BLINK,
            Self::Flame => EFFECT_NAME_FLAME,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_BLINK => Some(Self::Blink),
            EFFECT_NAME_FLAME => Some(Self::Flame),
            _ => None,
        }
    }
}

impl<R, const N: usize> EffectSlot<R, N> {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Blink(_) => EffectId::Blink,
            Self::Flame(_) => EffectId::Flame,
        }
    }
}

impl<R: Random8, const N: usize> LightEffect for EffectSlot<R, N> {
    fn update<S: Shape, T: ThemeStrategy, const MAX_LEDS: usize>(
        &mut self,
        curve: &mut LedCurve<S, T, MAX_LEDS>,
    ) {
        match self {
            Self::Blink(effect) => effect.update(curve),
            Self::Flame(effect) => effect.update(curve),
        }
    }

    fn name(&self) -> &'static str {
        self.id().as_str()
    }
}
