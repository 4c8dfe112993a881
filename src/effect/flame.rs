//! Flame effect
//!
//! Heat diffusion in a small 1D buffer, adapted from Fire2012 by Mark
//! Kriegsman. Every frame the buffer cools down, heat drifts towards the high
//! end, and new sparks may ignite near the base. Each LED reads the heat of its
//! projected bucket through a palette.
//!
//! The scheduler color is not used for pixels. Its cycle phase decides when a
//! haunted palette replaces the regular fire.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{EFFECT_NAME_FLAME, LightEffect};
use crate::{
    color::{HEAT_PALETTE, Palette16},
    curve::LedCurve,
    math8::scale8,
    projection::Projection,
    random::Random8,
    scheduler::ThemeStrategy,
    shape::Shape,
};

/// Largest heat buffer, resolution is an 8-bit value
const MAX_RESOLUTION: usize = u8::MAX as usize;

const DEFAULT_SPARKING: u8 = 120;
/// Sparks land in the first cells of the buffer
const IGNITION_WINDOW: usize = 7;
const SPARK_MIN_HEAT: u8 = 160;
const SPARK_HEAT_LIMIT: u8 = 255;
/// Highest palette index, keeps white-hot cells from wrapping to black
const MAX_PALETTE_INDEX: u8 = 240;
/// Scheduler progress (0-255) from which the haunted palette is shown
const HAUNT_THRESHOLD: u8 = 80;

/// Palette substituted during the late part of each color cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HauntMode {
    /// Regular fire all the time
    #[default]
    Off,
    /// Blue/white flame
    Ghost,
    /// Green/white flame
    Toxic,
}

/// Flame tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlameConfig {
    /// Upper bound (exclusive) of the random cooling per cell and frame
    pub cooling: u8,
    /// Chance of a spark per frame, out of 256
    pub sparking: u8,
}

impl FlameConfig {
    /// Defaults that keep the flame height similar across resolutions
    #[allow(clippy::cast_possible_truncation)]
    pub const fn for_resolution(resolution: u8) -> Self {
        let resolution = if resolution == 0 { 1 } else { resolution as u16 };
        let cooling = 550 / resolution + 2;
        Self {
            cooling: if cooling > 255 { 255 } else { cooling as u8 },
            sparking: DEFAULT_SPARKING,
        }
    }

    #[must_use]
    pub const fn with_cooling(mut self, cooling: u8) -> Self {
        self.cooling = cooling;
        self
    }

    #[must_use]
    pub const fn with_sparking(mut self, sparking: u8) -> Self {
        self.sparking = sparking;
        self
    }
}

/// Heat diffusion flame
///
/// `N` is the projection capacity, at least the number of logical points of
/// the curve the effect runs on.
#[derive(Debug, Clone)]
pub struct FlameEffect<R, const N: usize> {
    heat: Vec<u8, MAX_RESOLUTION>,
    projection: Projection<N>,
    cooling: u8,
    sparking: u8,
    haunt_mode: HauntMode,
    ghost_palette: Palette16,
    toxic_palette: Palette16,
    rng: R,
}

impl<R: Random8, const N: usize> FlameEffect<R, N> {
    /// Create a flame with default tuning for the projection's resolution
    pub fn new(projection: Projection<N>, rng: R) -> Self {
        let config = FlameConfig::for_resolution(projection.resolution());
        Self::with_config(projection, config, rng)
    }

    /// Create a flame with explicit tuning
    ///
    /// The heat buffer starts cold.
    pub fn with_config(projection: Projection<N>, config: FlameConfig, rng: R) -> Self {
        let mut heat = Vec::new();
        // Resolution always fits in MAX_RESOLUTION
        let _ = heat.resize(usize::from(projection.resolution()), 0);
        Self {
            heat,
            projection,
            cooling: config.cooling,
            sparking: config.sparking,
            haunt_mode: HauntMode::Off,
            ghost_palette: Palette16::ghost(),
            toxic_palette: Palette16::toxic(),
            rng,
        }
    }

    pub fn set_haunt_mode(&mut self, mode: HauntMode) {
        #[cfg(feature = "esp32-log")]
        println!("[FlameEffect.set_haunt_mode] {:?}", mode);
        self.haunt_mode = mode;
    }

    /// Haunt with either the ghost or the toxic palette, picked at random
    pub fn set_random_haunt_mode(&mut self) {
        let mode = if self.rng.random8() % 2 == 0 {
            HauntMode::Ghost
        } else {
            HauntMode::Toxic
        };
        self.set_haunt_mode(mode);
    }

    pub const fn haunt_mode(&self) -> HauntMode {
        self.haunt_mode
    }

    pub const fn cooling(&self) -> u8 {
        self.cooling
    }

    pub const fn sparking(&self) -> u8 {
        self.sparking
    }

    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    pub const fn projection(&self) -> &Projection<N> {
        &self.projection
    }

    /// Advance the heat simulation by one frame
    #[allow(clippy::cast_possible_truncation)]
    pub fn update_heat(&mut self) {
        let heat = self.heat.as_mut_slice();

        // Cool every cell a little
        for cell in heat.iter_mut() {
            *cell = cell.saturating_sub(self.rng.random8_below(self.cooling));
        }

        // Heat drifts up and diffuses
        for i in (2..heat.len()).rev() {
            let drift = u16::from(heat[i - 1]) + 2 * u16::from(heat[i - 2]);
            heat[i] = (drift / 3) as u8;
        }

        // Randomly ignite new sparks near the base
        if self.rng.random8() < self.sparking && !heat.is_empty() {
            let window = heat.len().min(IGNITION_WINDOW) as u8;
            let y = usize::from(self.rng.random8_below(window));
            let boost = self.rng.random8_range(SPARK_MIN_HEAT, SPARK_HEAT_LIMIT);
            heat[y] = heat[y].saturating_add(boost);
        }
    }

    /// Palette for the given scheduler progress
    fn palette(&self, progress: u8) -> &Palette16 {
        if progress < HAUNT_THRESHOLD {
            return &HEAT_PALETTE;
        }
        match self.haunt_mode {
            HauntMode::Off => &HEAT_PALETTE,
            HauntMode::Ghost => &self.ghost_palette,
            HauntMode::Toxic => &self.toxic_palette,
        }
    }
}

impl<R: Random8, const N: usize> LightEffect for FlameEffect<R, N> {
    fn update<S: Shape, T: ThemeStrategy, const MAX_LEDS: usize>(
        &mut self,
        curve: &mut LedCurve<S, T, MAX_LEDS>,
    ) {
        self.update_heat();

        let canvas = curve.canvas();
        let palette = self.palette(canvas.color_scheduler.get_progress());
        for (led, &bucket) in canvas.leds.iter_mut().zip(self.projection.as_slice()) {
            let temperature = self.heat.get(usize::from(bucket)).copied().unwrap_or(0);
            *led = palette.color_at(scale8(temperature, MAX_PALETTE_INDEX));
        }

        // Only the cycle phase matters here
        canvas.color_scheduler.next_color();
    }

    fn name(&self) -> &'static str {
        EFFECT_NAME_FLAME
    }
}
