//! Flakes that light up at random positions and melt away

use super::{Effect, edge_margin};
use crate::color::{InterpolatedColor, Rgb};
use crate::context::{SpeedSource, StepContext};
use crate::math8::falloff_color;

/// Steps between flakes at `count == 99`
const SPAWN_INTERVAL: u32 = 6;

pub(crate) struct Snowflake;

/// Per-step decay divisor for the given fading option
fn fade_divisor(fading: u8) -> f32 {
    f32::from((100 - u16::from(fading.min(100))) * 4 + 50)
}

fn spawn<const N: usize>(ctx: &mut StepContext<'_, N>) {
    let margin = edge_margin(ctx.config.snowflake.flake_size, N);
    // Persist the clamped size so the reported value matches what is drawn.
    ctx.config.snowflake.flake_size = margin as u8;
    let options = ctx.config.snowflake;

    let center = ctx.random_between(margin, N - margin);
    let color = if options.multi_color {
        ctx.random_color(10, 255)
    } else {
        options.color
    };

    ctx.frame.working[center] = InterpolatedColor::from_rgb(color);
    let mut tail = color;
    for distance in 1..=margin {
        tail = falloff_color(tail);
        for index in [center - distance, center + distance] {
            let existing = ctx.frame.leds[index];
            let merged = Rgb {
                r: existing.r | tail.r,
                g: existing.g | tail.g,
                b: existing.b | tail.b,
            };
            ctx.frame.working[index] = InterpolatedColor::from_rgb(merged);
        }
    }

    let divisor = fade_divisor(options.fading);
    for color in &mut ctx.frame.working[center - margin..=center + margin] {
        for channel in color.channels_mut() {
            channel.delta = channel.value / divisor;
        }
    }
}

impl Effect for Snowflake {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        ctx.frame.clear_working();
        ctx.frame.clear_leds();
        ctx.config.working.effect_creating = 0;

        ctx.select_speed(SpeedSource::Default);
        let speed = ctx.effect_speed();
        ctx.schedule(speed);
        ctx.modifier.cancel();
    }

    fn advance<const N: usize>(ctx: &mut StepContext<'_, N>) {
        if N == 0 {
            return;
        }
        let threshold = (100 - u32::from(ctx.config.snowflake.count.min(100))) * SPAWN_INTERVAL;
        let working = &mut ctx.config.working;
        working.effect_creating += 1;
        if working.effect_creating > threshold {
            working.effect_creating = 0;
            spawn(ctx);
        }

        for (color, led) in ctx.frame.working.iter_mut().zip(ctx.frame.leds.iter_mut()) {
            for channel in color.channels_mut() {
                if channel.value > 1.0 {
                    channel.value -= channel.delta;
                }
            }
            let melted = |value: f32| if value > 1.0 { value as u8 } else { 0 };
            *led = Rgb {
                r: melted(color.r.value),
                g: melted(color.g.value),
                b: melted(color.b.value),
            };
        }
        ctx.frame.dirty = true;
    }
}
