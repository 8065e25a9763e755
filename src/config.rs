//! Controller configuration
//!
//! One options record per catalog entry, the active and special mode, and a
//! handful of working fields. At most one effect runs at a time, so the
//! working fields are shared by all effects instead of being duplicated per
//! effect: whichever effect is active owns them.

use crate::color::{BLACK, Rgb, SignedColor};
use crate::mode::ModeId;

/// Maximum number of key colors for rainbow and lines
pub const MAX_KEY_COLORS: usize = 10;

/// Default cycle period, seconds
pub const DEFAULT_CYCLE_PERIOD: u32 = 60;

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Key colors: red and blue, the rest unused
const DEFAULT_KEY_COLORS: [Rgb; MAX_KEY_COLORS] = {
    let mut colors = [BLACK; MAX_KEY_COLORS];
    colors[0] = RED;
    colors[1] = BLUE;
    colors
};

/// Per-channel triangle waves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavesOptions {
    /// Wave floor per channel
    pub color_min: Rgb,
    /// Wave ceiling per channel
    pub color_max: Rgb,
    /// Number of waves per channel along the strip
    pub count: Rgb,
    /// Signed movement speed per channel, `-100..=100`
    pub speed: SignedColor,
}

impl Default for WavesOptions {
    fn default() -> Self {
        Self {
            color_min: BLACK,
            color_max: WHITE,
            count: Rgb { r: 1, g: 1, b: 1 },
            speed: SignedColor::new(20, 0, -20),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowOptions {
    /// Key colors spread evenly along the strip
    pub colors: [Rgb; MAX_KEY_COLORS],
    /// Number of key colors in use, `1..=10`
    pub count: u8,
    pub speed: i8,
    /// Allow random direction changes
    pub reverse: bool,
}

impl Default for RainbowOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_KEY_COLORS,
            count: 2,
            speed: 1,
            reverse: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinesOptions {
    /// Colors used for consecutive lines
    pub colors: [Rgb; MAX_KEY_COLORS],
    pub count: u8,
    pub speed: i8,
    /// Start every line from a random edge
    pub reverse: bool,
    /// Use random colors instead of `colors`
    pub multi_color: bool,
}

impl Default for LinesOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_KEY_COLORS,
            count: 2,
            speed: 1,
            reverse: false,
            multi_color: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeOptions {
    pub color: Rgb,
    pub multi_color: bool,
    /// Flake radius in pixels
    pub flake_size: u8,
    /// Spawn frequency, `0..=100`
    pub count: u8,
    /// Fade speed, `0..=100`
    pub fading: u8,
}

impl Default for SnowflakeOptions {
    fn default() -> Self {
        Self {
            color: WHITE,
            multi_color: false,
            flake_size: 1,
            count: 10,
            fading: 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StroboscopeOptions {
    pub color: Rgb,
    pub multi_color: bool,
    /// Flash frequency
    pub count: u8,
}

impl Default for StroboscopeOptions {
    fn default() -> Self {
        Self {
            color: WHITE,
            multi_color: false,
            count: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeOptions {
    pub color: Rgb,
    /// Number of snakes on the strip
    pub count: u8,
    pub speed: i8,
    pub multi_color: bool,
    /// Allow random direction changes
    pub reverse: bool,
}

impl Default for SnakeOptions {
    fn default() -> Self {
        Self {
            color: GREEN,
            count: 1,
            speed: 1,
            multi_color: false,
            reverse: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseOptions {
    pub color_min: Rgb,
    pub color_max: Rgb,
    pub speed: i8,
}

impl Default for PulseOptions {
    fn default() -> Self {
        Self {
            color_min: BLACK,
            color_max: WHITE,
            speed: 1,
        }
    }
}

/// Automatic mode rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOptions {
    /// Wall-clock time of the next switch, milliseconds
    pub next_change: u32,
    /// Time between switches, seconds
    pub period: u32,
    /// Raw id of the mode currently shown
    pub current: u8,
    /// Fade-out speed before switching, 0 disables fading
    pub fading: u8,
    pub is_random: bool,
    /// A fade-out is due before the next switch
    pub need_to_fade: bool,
}

impl CycleOptions {
    /// Push the next switch one period past `now_ms`
    pub const fn restart(&mut self, now_ms: u32) {
        self.next_change = now_ms.wrapping_add(self.period.wrapping_mul(1_000));
    }
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            next_change: DEFAULT_CYCLE_PERIOD * 1_000,
            period: DEFAULT_CYCLE_PERIOD,
            current: ModeId::Rainbow.as_raw(),
            fading: 0,
            is_random: false,
            need_to_fade: false,
        }
    }
}

/// Working fields shared by whichever effect is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingFields {
    /// Counter towards the next spawned element
    pub effect_creating: u32,
    /// Movement direction, negative is towards index 0
    pub direction: i8,
    pub position: i16,
    pub step: i8,
    pub current_color: Rgb,
}

impl Default for WorkingFields {
    fn default() -> Self {
        Self {
            effect_creating: 0,
            direction: -1,
            position: 0,
            step: 0,
            current_color: BLACK,
        }
    }
}

/// Full controller configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub mode: ModeId,
    /// Cycle or schedule running on top of `mode`, `Off` when inactive
    pub special_mode: ModeId,
    pub waves: WavesOptions,
    pub rainbow: RainbowOptions,
    pub lines: LinesOptions,
    pub snowflake: SnowflakeOptions,
    pub stroboscope: StroboscopeOptions,
    pub snake: SnakeOptions,
    pub pulse: PulseOptions,
    pub cycle: CycleOptions,
    pub working: WorkingFields,
}

impl Configuration {
    /// Reset every option to its baseline value and select `Off`
    pub fn set_defaults(&mut self, now_ms: u32) {
        *self = Self::default();
        self.cycle.restart(now_ms);
    }

    /// Mode whose options are edited by remote commands
    pub const fn controlling_mode(&self) -> ModeId {
        match self.special_mode {
            ModeId::Off => self.mode,
            special => special,
        }
    }
}

/// Scheduling extension persisted after the configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleState {
    /// Number of scheduled entries
    pub count: u8,
    /// Entry currently running
    pub current: u8,
}
