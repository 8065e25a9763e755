//! Short flashes at random positions

use super::{Effect, edge_margin};
use crate::color::{Rgb, map_channels};
use crate::context::{SpeedSource, StepContext};
use crate::math8::quantize8;

/// Brightness lost per step, also the flash color granularity
const DECAY: u8 = 25;

/// Steps between flashes at `count == 1`
const FLASH_INTERVAL: u32 = 600;

pub(crate) struct Stroboscope;

fn flash<const N: usize>(ctx: &mut StepContext<'_, N>) {
    let options = ctx.config.stroboscope;
    let margin = edge_margin(ctx.config.snowflake.flake_size, N);
    let position = ctx.random_between(margin, N - margin);

    let color = if options.multi_color {
        let mut level = || ctx.random_between(1, 10) as u8 * DECAY;
        Rgb {
            r: level(),
            g: level(),
            b: level(),
        }
    } else {
        map_channels(options.color, |value| quantize8(value, DECAY))
    };
    if let Some(led) = ctx.frame.leds.get_mut(position) {
        *led = color;
    }
}

impl Effect for Stroboscope {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
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
        let interval = FLASH_INTERVAL / u32::from(ctx.config.stroboscope.count.max(1));
        let working = &mut ctx.config.working;
        working.effect_creating += 1;
        if working.effect_creating > interval {
            working.effect_creating = 0;
            flash(ctx);
        }

        for led in &mut ctx.frame.leds {
            *led = map_channels(*led, |value| value.saturating_sub(DECAY));
        }
        ctx.frame.dirty = true;
    }
}
