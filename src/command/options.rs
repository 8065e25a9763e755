//! Per-mode option tables

use core::fmt;

use super::value::{
    parse_bool, parse_color, parse_i8, parse_signed, parse_u8, parse_u32,
};
use crate::color::{Rgb, SignedColor};
use crate::config::{Configuration, MAX_KEY_COLORS};
use crate::mode::ModeId;

/// Names of the key color options
pub const KEY_COLOR_OPTIONS: [&str; MAX_KEY_COLORS] = [
    "color0", "color1", "color2", "color3", "color4", "color5", "color6", "color7", "color8",
    "color9",
];

/// Modes reported to a client right after it connects
pub const CONNECT_SECTIONS: [ModeId; 8] = [
    ModeId::Waves,
    ModeId::Rainbow,
    ModeId::Lines,
    ModeId::Snake,
    ModeId::Snowflake,
    ModeId::Stroboscope,
    ModeId::Pulse,
    ModeId::Cycle,
];

/// Result of applying an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionOutcome {
    /// Unknown option for the controlling mode, nothing changed
    Ignored,
    /// Stored, the running effect picks it up on its own
    Updated,
    /// Stored, the effect must be initialized again
    Reinitialize,
}

/// Reported option value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    Int(i64),
    Bool(bool),
    Color(Rgb),
    Signed(SignedColor),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Color(color) => write!(f, "{};{};{}", color.r, color.g, color.b),
            Self::Signed(color) => write!(f, "{};{};{}", color.r, color.g, color.b),
        }
    }
}

fn key_color_index(name: &str) -> Option<usize> {
    KEY_COLOR_OPTIONS.iter().position(|option| *option == name)
}

/// Apply `name = value` to the options of the controlling mode
pub fn apply_option(
    config: &mut Configuration,
    name: &str,
    value: &str,
    now_ms: u32,
) -> OptionOutcome {
    use OptionOutcome::{Ignored, Reinitialize, Updated};

    match config.controlling_mode() {
        ModeId::Waves => {
            let waves = &mut config.waves;
            match name {
                "colorMin" => waves.color_min = parse_color(value),
                "colorMax" => waves.color_max = parse_color(value),
                "count" => waves.count = parse_color(value),
                "speed" => waves.speed = parse_signed(value),
                _ => return Ignored,
            }
            Reinitialize
        }
        ModeId::Rainbow => {
            let rainbow = &mut config.rainbow;
            match name {
                "speed" => {
                    rainbow.speed = parse_i8(value);
                    Updated
                }
                "count" => {
                    rainbow.count = parse_u8(value);
                    Reinitialize
                }
                "reverse" | "rainbowRev" => {
                    rainbow.reverse = parse_bool(value);
                    Updated
                }
                _ => match key_color_index(name) {
                    Some(index) => {
                        rainbow.colors[index] = parse_color(value);
                        Reinitialize
                    }
                    None => Ignored,
                },
            }
        }
        ModeId::Lines => {
            let lines = &mut config.lines;
            match name {
                "speed" => {
                    let speed = parse_i8(value);
                    let flipped = i16::from(speed) * i16::from(lines.speed) < 0;
                    lines.speed = speed;
                    if flipped { Reinitialize } else { Updated }
                }
                "count" => {
                    lines.count = parse_u8(value);
                    Updated
                }
                "multiColor" | "linesMC" => {
                    lines.multi_color = parse_bool(value);
                    Updated
                }
                "reverse" | "linesRev" => {
                    lines.reverse = parse_bool(value);
                    Updated
                }
                _ => match key_color_index(name) {
                    Some(index) => {
                        lines.colors[index] = parse_color(value);
                        Reinitialize
                    }
                    None => Ignored,
                },
            }
        }
        ModeId::Snowflake => {
            let snowflake = &mut config.snowflake;
            match name {
                "color" => snowflake.color = parse_color(value),
                "flakeSize" => snowflake.flake_size = parse_u8(value),
                "fading" => snowflake.fading = parse_u8(value),
                "count" => snowflake.count = parse_u8(value),
                "multiColor" | "snowflakeMC" => snowflake.multi_color = parse_bool(value),
                _ => return Ignored,
            }
            Updated
        }
        ModeId::Stroboscope => {
            let stroboscope = &mut config.stroboscope;
            match name {
                "color" => stroboscope.color = parse_color(value),
                "count" => stroboscope.count = parse_u8(value),
                "multiColor" | "stroboscopeMC" => stroboscope.multi_color = parse_bool(value),
                _ => return Ignored,
            }
            Updated
        }
        ModeId::Snake => {
            let snake = &mut config.snake;
            match name {
                "color" => {
                    snake.color = parse_color(value);
                    Reinitialize
                }
                "count" => {
                    snake.count = parse_u8(value);
                    Reinitialize
                }
                "multiColor" | "snakeMC" => {
                    snake.multi_color = parse_bool(value);
                    Reinitialize
                }
                "speed" => {
                    snake.speed = parse_i8(value);
                    Updated
                }
                "reverse" | "snakeRev" => {
                    snake.reverse = parse_bool(value);
                    Updated
                }
                _ => Ignored,
            }
        }
        ModeId::Pulse => {
            let pulse = &mut config.pulse;
            match name {
                "colorMin" => pulse.color_min = parse_color(value),
                "colorMax" => pulse.color_max = parse_color(value),
                "speed" => pulse.speed = parse_i8(value),
                _ => return Ignored,
            }
            Updated
        }
        ModeId::Cycle => {
            let cycle = &mut config.cycle;
            match name {
                "period" => {
                    cycle.period = parse_u32(value);
                    cycle.restart(now_ms);
                }
                "isRandom" => cycle.is_random = parse_bool(value),
                "fading" => cycle.fading = parse_u8(value),
                _ => return Ignored,
            }
            Updated
        }
        ModeId::Off | ModeId::Schedule => Ignored,
    }
}

/// Visit every reported option of `mode` in wire order
pub fn for_each_option(
    config: &Configuration,
    mode: ModeId,
    mut visit: impl FnMut(&'static str, OptionValue),
) {
    use OptionValue::{Bool, Color, Int, Signed};

    match mode {
        ModeId::Waves => {
            let waves = &config.waves;
            visit("colorMin", Color(waves.color_min));
            visit("colorMax", Color(waves.color_max));
            visit("count", Color(waves.count));
            visit("speed", Signed(waves.speed));
        }
        ModeId::Rainbow => {
            let rainbow = &config.rainbow;
            visit("speed", Int(i64::from(rainbow.speed)));
            visit("count", Int(i64::from(rainbow.count)));
            visit("reverse", Bool(rainbow.reverse));
            for (name, color) in KEY_COLOR_OPTIONS.into_iter().zip(rainbow.colors) {
                visit(name, Color(color));
            }
        }
        ModeId::Lines => {
            let lines = &config.lines;
            visit("speed", Int(i64::from(lines.speed)));
            visit("count", Int(i64::from(lines.count)));
            visit("multiColor", Bool(lines.multi_color));
            visit("reverse", Bool(lines.reverse));
            for (name, color) in KEY_COLOR_OPTIONS.into_iter().zip(lines.colors) {
                visit(name, Color(color));
            }
        }
        ModeId::Snowflake => {
            let snowflake = &config.snowflake;
            visit("color", Color(snowflake.color));
            visit("flakeSize", Int(i64::from(snowflake.flake_size)));
            visit("fading", Int(i64::from(snowflake.fading)));
            visit("count", Int(i64::from(snowflake.count)));
            visit("multiColor", Bool(snowflake.multi_color));
        }
        ModeId::Stroboscope => {
            let stroboscope = &config.stroboscope;
            visit("color", Color(stroboscope.color));
            visit("count", Int(i64::from(stroboscope.count)));
            visit("multiColor", Bool(stroboscope.multi_color));
        }
        ModeId::Snake => {
            let snake = &config.snake;
            visit("color", Color(snake.color));
            visit("count", Int(i64::from(snake.count)));
            visit("speed", Int(i64::from(snake.speed)));
            visit("multiColor", Bool(snake.multi_color));
            visit("reverse", Bool(snake.reverse));
        }
        ModeId::Pulse => {
            let pulse = &config.pulse;
            visit("colorMin", Color(pulse.color_min));
            visit("colorMax", Color(pulse.color_max));
            visit("speed", Int(i64::from(pulse.speed)));
        }
        ModeId::Cycle => {
            let cycle = &config.cycle;
            visit("period", Int(i64::from(cycle.period)));
            visit("isRandom", Bool(cycle.is_random));
            visit("fading", Int(i64::from(cycle.fading)));
        }
        ModeId::Off | ModeId::Schedule => {}
    }
}
