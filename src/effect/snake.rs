//! Bright heads with fading tails crawling along the strip

use super::Effect;
use crate::color::BLACK;
use crate::context::{SpeedSource, StepContext};
use crate::math8::falloff_color;
use crate::modifier::{self, ModifierKind, MOVING_DISCRETIZATION};

/// Direction change threshold out of `|speed| * 100`
const REVERSE_THRESHOLD: u32 = 10;

pub(crate) struct Snake;

impl Effect for Snake {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let options = ctx.config.snake;
        let segment = (N / usize::from(options.count.max(1))).max(1);

        let mut tail = BLACK;
        for index in 0..N {
            tail = if index % segment == 0 {
                if options.multi_color {
                    ctx.random_color(10, 255)
                } else {
                    options.color
                }
            } else {
                falloff_color(tail)
            };
            ctx.frame.leds[index] = tail;
        }

        ctx.select_speed(SpeedSource::Snake);
        let speed = ctx.effect_speed();
        ctx.schedule(speed);

        // Heads are drawn facing index 0; turn them around for the other way.
        if ctx.config.working.direction > 0 {
            ctx.modifier.start_hidden(ModifierKind::Invert, MOVING_DISCRETIZATION, speed);
            modifier::step(ctx);
        } else {
            ctx.modifier.cancel();
        }
    }

    fn advance<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let speed = ctx.effect_speed();
        let reverse = ctx.config.snake.reverse
            && ctx.random_below(u32::from(speed.unsigned_abs()) * 100) < REVERSE_THRESHOLD;
        if reverse {
            let working = &mut ctx.config.working;
            working.direction = working.direction.saturating_neg();
            ctx.modifier.start(ModifierKind::Invert, MOVING_DISCRETIZATION, speed);
        } else {
            ctx.modifier.start(ModifierKind::Moving, MOVING_DISCRETIZATION, speed);
        }
    }
}
