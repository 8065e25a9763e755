//! Catalog of modes known to the controller

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_WAVES: &str = "waves";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_LINES: &str = "lines";
const MODE_NAME_SNOWFLAKE: &str = "snowflake";
const MODE_NAME_STROBOSCOPE: &str = "stroboscope";
const MODE_NAME_SNAKE: &str = "snake";
const MODE_NAME_PULSE: &str = "pulse";
const MODE_NAME_CYCLE: &str = "cycle";
const MODE_NAME_SCHEDULE: &str = "schedule";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_WAVES: u8 = 1;
const MODE_ID_RAINBOW: u8 = 2;
const MODE_ID_LINES: u8 = 3;
const MODE_ID_SNOWFLAKE: u8 = 4;
const MODE_ID_STROBOSCOPE: u8 = 5;
const MODE_ID_SNAKE: u8 = 6;
const MODE_ID_PULSE: u8 = 7;
const MODE_ID_CYCLE: u8 = 8;
const MODE_ID_SCHEDULE: u8 = 9;

/// Number of catalog entries
pub const MODE_COUNT: u8 = 10;

/// Known mode ids.
///
/// The discriminants are persisted, so new modes must be appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ModeId {
    #[default]
    Off = MODE_ID_OFF,
    Waves = MODE_ID_WAVES,
    Rainbow = MODE_ID_RAINBOW,
    Lines = MODE_ID_LINES,
    Snowflake = MODE_ID_SNOWFLAKE,
    Stroboscope = MODE_ID_STROBOSCOPE,
    Snake = MODE_ID_SNAKE,
    Pulse = MODE_ID_PULSE,
    Cycle = MODE_ID_CYCLE,
    Schedule = MODE_ID_SCHEDULE,
}

impl ModeId {
    /// Every mode in catalog order
    pub const ALL: [Self; MODE_COUNT as usize] = [
        Self::Off,
        Self::Waves,
        Self::Rainbow,
        Self::Lines,
        Self::Snowflake,
        Self::Stroboscope,
        Self::Snake,
        Self::Pulse,
        Self::Cycle,
        Self::Schedule,
    ];

    /// First and last mode the cycle rotates through
    pub const FIRST_EFFECT: Self = Self::Waves;
    pub const LAST_EFFECT: Self = Self::Pulse;

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_WAVES => Self::Waves,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_LINES => Self::Lines,
            MODE_ID_SNOWFLAKE => Self::Snowflake,
            MODE_ID_STROBOSCOPE => Self::Stroboscope,
            MODE_ID_SNAKE => Self::Snake,
            MODE_ID_PULSE => Self::Pulse,
            MODE_ID_CYCLE => Self::Cycle,
            MODE_ID_SCHEDULE => Self::Schedule,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Waves => MODE_NAME_WAVES,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Lines => MODE_NAME_LINES,
            Self::Snowflake => MODE_NAME_SNOWFLAKE,
            Self::Stroboscope => MODE_NAME_STROBOSCOPE,
            Self::Snake => MODE_NAME_SNAKE,
            Self::Pulse => MODE_NAME_PULSE,
            Self::Cycle => MODE_NAME_CYCLE,
            Self::Schedule => MODE_NAME_SCHEDULE,
        }
    }

    /// Case-sensitive lookup by catalog name
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_WAVES => Some(Self::Waves),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_LINES => Some(Self::Lines),
            MODE_NAME_SNOWFLAKE => Some(Self::Snowflake),
            MODE_NAME_STROBOSCOPE => Some(Self::Stroboscope),
            MODE_NAME_SNAKE => Some(Self::Snake),
            MODE_NAME_PULSE => Some(Self::Pulse),
            MODE_NAME_CYCLE => Some(Self::Cycle),
            MODE_NAME_SCHEDULE => Some(Self::Schedule),
            _ => None,
        }
    }

    /// Base value for step delay calculation, in microseconds per speed unit
    pub const fn step_base(self) -> u16 {
        match self {
            Self::Snowflake => 20,
            _ => 1_000,
        }
    }

    /// Cycle and schedule run on top of a regular mode
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Cycle | Self::Schedule)
    }

    /// Modes the cycle is allowed to switch to
    pub const fn is_cyclable(self) -> bool {
        let raw = self as u8;
        raw >= Self::FIRST_EFFECT as u8 && raw <= Self::LAST_EFFECT as u8
    }
}
