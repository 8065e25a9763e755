//! Gradient through the key colors, scrolled around the strip

use super::Effect;
use crate::color::{InterpolatedColor, channels};
use crate::config::MAX_KEY_COLORS;
use crate::context::{SpeedSource, StepContext};
use crate::modifier::{ModifierKind, MOVING_DISCRETIZATION};

/// Chance of a direction change per step when reversing is enabled, percent
const REVERSE_CHANCE: u32 = 2;

pub(crate) struct Rainbow;

impl Effect for Rainbow {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let options = ctx.config.rainbow;
        let count = usize::from(options.count).clamp(1, MAX_KEY_COLORS);

        ctx.frame.clear_leds();
        let mut section = (N / count).max(1);
        let mut color = InterpolatedColor::from_rgb(options.colors[0]);
        let mut next = 0;
        for index in 0..N {
            if index % section == 0 && N - index + 1 > section {
                color = InterpolatedColor::from_rgb(options.colors[next]);
                next += 1;
                if next >= count {
                    // The last section absorbs the remainder and blends back
                    // into the first color.
                    next = 0;
                    section = N - index + 1;
                }
                let target = channels(options.colors[next]);
                for (channel, target) in color.channels_mut().into_iter().zip(target) {
                    channel.delta = (f32::from(target) - channel.value) / section as f32;
                }
            } else {
                for channel in color.channels_mut() {
                    channel.value = (channel.value + channel.delta).max(0.0);
                }
            }
            ctx.frame.leds[index] = color.to_rgb();
        }

        ctx.select_speed(SpeedSource::Rainbow);
        ctx.config.working.direction = if options.speed < 0 { -1 } else { 1 };
        let speed = ctx.effect_speed();
        ctx.schedule(speed);
        ctx.modifier.cancel();
    }

    fn advance<const N: usize>(ctx: &mut StepContext<'_, N>) {
        if ctx.config.rainbow.reverse && ctx.chance(REVERSE_CHANCE) {
            let rainbow = &mut ctx.config.rainbow;
            rainbow.speed = rainbow.speed.saturating_neg();
            ctx.config.working.direction = ctx.config.working.direction.saturating_neg();
        }
        let speed = ctx.effect_speed();
        ctx.modifier.start(ModifierKind::Moving, MOVING_DISCRETIZATION, speed);
    }
}
