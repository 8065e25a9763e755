//! State shared by effects and modifiers during one step

use embassy_time::Instant;
use rand::{Rng, rngs::SmallRng};

use crate::color::{BLACK, InterpolatedColor, Rgb};
use crate::config::Configuration;
use crate::modifier::ModifierState;
use crate::scheduler::StepScheduler;

/// Speed used by effects without a speed option
pub const DEFAULT_SPEED: i8 = 100;

/// Where the active effect takes its speed from
///
/// Resolved against the configuration on every tick, so speed edits and
/// random direction flips apply immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedSource {
    /// Never advance
    #[default]
    Zero,
    /// Fixed [`DEFAULT_SPEED`]
    Default,
    Rainbow,
    Lines,
    Snake,
    Pulse,
}

impl SpeedSource {
    pub const fn resolve(self, config: &Configuration) -> i8 {
        match self {
            Self::Zero => 0,
            Self::Default => DEFAULT_SPEED,
            Self::Rainbow => config.rainbow.speed,
            Self::Lines => config.lines.speed,
            Self::Snake => config.snake.speed,
            Self::Pulse => config.pulse.speed,
        }
    }
}

/// Pixel buffers, allocated once for the lifetime of the controller
#[derive(Debug, Clone)]
pub struct Frame<const N: usize> {
    pub(crate) leds: [Rgb; N],
    pub(crate) working: [InterpolatedColor; N],
    pub(crate) dirty: bool,
}

impl<const N: usize> Frame<N> {
    pub const fn new() -> Self {
        Self {
            leds: [BLACK; N],
            working: [InterpolatedColor::BLACK; N],
            dirty: false,
        }
    }

    /// Last rendered frame
    pub const fn leds(&self) -> &[Rgb; N] {
        &self.leds
    }

    /// The frame changed since the last flush
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn fill(&mut self, color: Rgb) {
        self.leds = [color; N];
        self.dirty = true;
    }

    pub(crate) fn clear_leds(&mut self) {
        self.fill(BLACK);
    }

    pub(crate) fn clear_working(&mut self) {
        self.working = [InterpolatedColor::BLACK; N];
    }

    /// Copy the truncated working values into the pixel buffer
    pub(crate) fn commit_working(&mut self) {
        for (led, color) in self.leds.iter_mut().zip(self.working.iter()) {
            *led = color.to_rgb();
        }
        self.dirty = true;
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Effect state that is neither configuration nor pixels
#[derive(Debug, Clone)]
pub(crate) struct Runtime {
    pub(crate) speed_source: SpeedSource,
    /// Sub-step counters of the three wave channels
    pub(crate) wave_phase: [i8; 3],
    pub(crate) rng: SmallRng,
}

/// Mutable view over everything a step may touch
pub(crate) struct StepContext<'a, const N: usize> {
    pub(crate) config: &'a mut Configuration,
    pub(crate) frame: &'a mut Frame<N>,
    pub(crate) modifier: &'a mut ModifierState<N>,
    pub(crate) scheduler: &'a mut StepScheduler,
    pub(crate) runtime: &'a mut Runtime,
    pub(crate) now: Instant,
}

impl<const N: usize> StepContext<'_, N> {
    /// Wrapping microsecond clock
    pub(crate) fn now_us(&self) -> u32 {
        self.now.as_micros() as u32
    }

    /// Wrapping millisecond clock
    pub(crate) fn now_ms(&self) -> u32 {
        self.now.as_millis() as u32
    }

    pub(crate) fn effect_speed(&self) -> i8 {
        self.runtime.speed_source.resolve(self.config)
    }

    pub(crate) fn select_speed(&mut self, source: SpeedSource) {
        self.runtime.speed_source = source;
    }

    /// Schedule the next step using the active mode's step base
    pub(crate) fn schedule(&mut self, speed: i8) {
        let step_base = self.config.mode.step_base();
        self.schedule_with_base(speed, step_base);
    }

    pub(crate) fn schedule_with_base(&mut self, speed: i8, step_base: u16) {
        let now = self.now_us();
        self.scheduler.schedule(now, speed.unsigned_abs(), step_base);
        self.frame.dirty = true;
    }

    /// Uniform value in `0..bound`, 0 for an empty range
    pub(crate) fn random_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.runtime.rng.gen_range(0..bound)
    }

    /// Uniform value in `low..high`, `low` for an empty range
    pub(crate) fn random_between(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.runtime.rng.gen_range(low..high)
    }

    /// True with the given probability in percent
    pub(crate) fn chance(&mut self, percent: u32) -> bool {
        self.random_below(100) < percent
    }

    /// Random color with every channel in `low..high`
    pub(crate) fn random_color(&mut self, low: u8, high: u8) -> Rgb {
        let mut channel = || self.random_between(usize::from(low), usize::from(high)) as u8;
        Rgb {
            r: channel(),
            g: channel(),
            b: channel(),
        }
    }
}
