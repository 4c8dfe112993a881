//! Theme color progression
//!
//! [`ColorScheduler`] hands out one color per frame. Within each cycle the
//! color either stays at the theme's start color (discrete mode) or moves
//! linearly from the start color to the end color (continuous mode). At the
//! end of a cycle the old end color becomes the new start color and a
//! [`ThemeStrategy`] picks the next end color.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, hue_to_rgb, lerp_colors};
use crate::math8::fraction8;
use crate::random::Random8;

pub const DEFAULT_HUE: u8 = 0;
pub const DEFAULT_MIN_HUE_DELTA: u8 = 32;
pub const DEFAULT_MAX_HUE_DELTA: u8 = 96;

/// Invalid scheduler parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// A cycle must last at least one frame
    ZeroCycle,
    /// Minimum hue delta is larger than the maximum
    InvertedHueDeltas { min: u8, max: u8 },
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCycle => write!(f, "color cycle must be at least one frame"),
            Self::InvertedHueDeltas { min, max } => {
                write!(f, "minimum hue delta {} exceeds maximum {}", min, max)
            }
        }
    }
}

/// Picks the colors a scheduler moves between
pub trait ThemeStrategy {
    /// Start color of the very first theme
    fn initial_color(&self) -> Rgb;

    /// End color of the next theme, given the color the last theme ended on
    fn next_end_color(&mut self, previous_end: Rgb) -> Rgb;
}

/// Random walk around the hue circle at full saturation and value
#[derive(Debug, Clone)]
pub struct HueWalk<R> {
    hue: u8,
    min_hue_delta: u8,
    max_hue_delta: u8,
    rng: R,
}

impl<R: Random8> HueWalk<R> {
    /// Each theme advances `hue` by a random step in `min_hue_delta..=max_hue_delta`
    pub fn new(
        hue: u8,
        min_hue_delta: u8,
        max_hue_delta: u8,
        rng: R,
    ) -> Result<Self, SchedulerError> {
        let mut walk = Self {
            hue,
            min_hue_delta: 0,
            max_hue_delta: 0,
            rng,
        };
        walk.set_hue_deltas(min_hue_delta, max_hue_delta)?;
        Ok(walk)
    }

    pub fn set_hue_deltas(&mut self, min: u8, max: u8) -> Result<(), SchedulerError> {
        if min > max {
            return Err(SchedulerError::InvertedHueDeltas { min, max });
        }
        self.min_hue_delta = min;
        self.max_hue_delta = max;
        Ok(())
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn hue_deltas(&self) -> (u8, u8) {
        (self.min_hue_delta, self.max_hue_delta)
    }
}

impl<R: Random8> ThemeStrategy for HueWalk<R> {
    fn initial_color(&self) -> Rgb {
        hue_to_rgb(self.hue)
    }

    fn next_end_color(&mut self, _previous_end: Rgb) -> Rgb {
        let delta = self
            .rng
            .random8_inclusive(self.min_hue_delta, self.max_hue_delta);
        self.hue = self.hue.wrapping_add(delta);
        hue_to_rgb(self.hue)
    }
}

/// Frame-by-frame theme color source
#[derive(Debug, Clone)]
pub struct ColorScheduler<T> {
    /// Frames per theme
    cycle: u16,
    /// Frames elapsed in the current cycle, always below `cycle`
    progress: u16,
    discrete_mode: bool,
    start_color: Rgb,
    end_color: Rgb,
    current_color: Rgb,
    theme: T,
}

impl<R: Random8> ColorScheduler<HueWalk<R>> {
    /// Scheduler walking the hue circle from `hue`
    pub fn with_hue_walk(
        cycle: u16,
        hue: u8,
        min_hue_delta: u8,
        max_hue_delta: u8,
        rng: R,
    ) -> Result<Self, SchedulerError> {
        Self::new(cycle, HueWalk::new(hue, min_hue_delta, max_hue_delta, rng)?)
    }

    /// Scheduler with the default hue walk
    pub fn with_cycle(cycle: u16, rng: R) -> Result<Self, SchedulerError> {
        Self::with_hue_walk(
            cycle,
            DEFAULT_HUE,
            DEFAULT_MIN_HUE_DELTA,
            DEFAULT_MAX_HUE_DELTA,
            rng,
        )
    }

    /// Bounds of the random hue step taken at each theme change
    ///
    /// Rejects `min > max` and keeps the previous bounds.
    pub fn set_hue_deltas(&mut self, min: u8, max: u8) -> Result<(), SchedulerError> {
        self.theme.set_hue_deltas(min, max)
    }
}

impl<T: ThemeStrategy> ColorScheduler<T> {
    /// Create a continuous-mode scheduler
    pub fn new(cycle: u16, mut theme: T) -> Result<Self, SchedulerError> {
        if cycle == 0 {
            return Err(SchedulerError::ZeroCycle);
        }
        let start_color = theme.initial_color();
        let end_color = theme.next_end_color(start_color);
        Ok(Self {
            cycle,
            progress: 0,
            discrete_mode: false,
            start_color,
            end_color,
            current_color: start_color,
            theme,
        })
    }

    /// Returns the color for this frame and advances by one frame
    pub fn next_color(&mut self) -> Rgb {
        self.current_color = if self.discrete_mode {
            self.start_color
        } else {
            lerp_colors(self.start_color, self.end_color, self.progress, self.cycle)
        };

        self.progress += 1;
        if self.progress >= self.cycle {
            self.progress = 0;
            self.change_theme();
        }

        self.current_color
    }

    /// Start a new theme from the end of the current one
    pub fn change_theme(&mut self) {
        self.start_color = self.end_color;
        self.end_color = self.theme.next_end_color(self.start_color);
        #[cfg(feature = "esp32-log")]
        println!(
            "[ColorScheduler.change_theme] {:?} -> {:?}",
            self.start_color, self.end_color
        );
    }

    /// Set a new cycle length and restart the cycle
    pub fn set_cycle(&mut self, cycle: u16) -> Result<(), SchedulerError> {
        if cycle == 0 {
            return Err(SchedulerError::ZeroCycle);
        }
        self.cycle = cycle;
        self.progress = 0;
        Ok(())
    }

    /// Progress through the current cycle, scaled to 0-255
    pub const fn get_progress(&self) -> u8 {
        fraction8(self.progress, self.cycle)
    }

    /// Hold the start color for the whole cycle
    pub fn set_discrete_mode(&mut self) {
        self.discrete_mode = true;
    }

    /// Fade from the start color to the end color over the cycle
    pub fn set_continuous_mode(&mut self) {
        self.discrete_mode = false;
    }

    pub const fn is_discrete(&self) -> bool {
        self.discrete_mode
    }

    pub const fn cycle(&self) -> u16 {
        self.cycle
    }

    /// Frames elapsed in the current cycle
    pub const fn progress(&self) -> u16 {
        self.progress
    }

    pub const fn start_color(&self) -> Rgb {
        self.start_color
    }

    pub const fn end_color(&self) -> Rgb {
        self.end_color
    }

    /// Color returned by the last [`Self::next_color`] call
    pub const fn current_color(&self) -> Rgb {
        self.current_color
    }

    pub const fn theme(&self) -> &T {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut T {
        &mut self.theme
    }
}
