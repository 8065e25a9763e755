//! Lines of color painted one pixel per step from the strip edges

use super::Effect;
use crate::config::MAX_KEY_COLORS;
use crate::context::{SpeedSource, StepContext};

pub(crate) struct Lines;

/// Strip length as a signed position
fn strip_end(len: usize) -> i16 {
    i16::try_from(len).unwrap_or(i16::MAX)
}

/// Place the painter just outside one edge, heading inwards
fn enter_from<const N: usize>(ctx: &mut StepContext<'_, N>, from_far_end: bool) {
    let working = &mut ctx.config.working;
    if from_far_end {
        working.position = strip_end(N);
        working.step = -1;
    } else {
        working.position = -1;
        working.step = 1;
    }
}

/// Pick the edge for the next line
fn spawn<const N: usize>(ctx: &mut StepContext<'_, N>) {
    let options = ctx.config.lines;
    let from_far_end = if options.reverse {
        ctx.chance(50)
    } else {
        options.speed < 0
    };
    enter_from(ctx, from_far_end);
}

/// Color of line number `index`
fn line_color<const N: usize>(ctx: &mut StepContext<'_, N>, index: u32) {
    let options = ctx.config.lines;
    ctx.config.working.current_color = if options.multi_color {
        ctx.random_color(0, 255)
    } else {
        options.colors[index as usize % MAX_KEY_COLORS]
    };
}

impl Effect for Lines {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        ctx.frame.clear_leds();
        ctx.config.working.effect_creating = 0;
        spawn(ctx);
        line_color(ctx, 0);

        ctx.select_speed(SpeedSource::Lines);
        let speed = ctx.effect_speed();
        ctx.schedule(speed);
        ctx.modifier.cancel();
    }

    fn advance<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let working = &mut ctx.config.working;
        working.position = working.position.saturating_add(i16::from(working.step));
        let color = working.current_color;
        if let Ok(index) = usize::try_from(working.position) {
            if let Some(led) = ctx.frame.leds.get_mut(index) {
                *led = color;
                ctx.frame.dirty = true;
            }
        }

        let next = working.position.saturating_add(i16::from(working.step));
        if (0..strip_end(N)).contains(&next) {
            return;
        }

        // Line finished: start the next one. Without reversing the painter
        // bounces off the edge it reached.
        if ctx.config.lines.reverse {
            spawn(ctx);
        } else {
            let at_far_end = ctx.config.working.step > 0;
            enter_from(ctx, at_far_end);
        }

        let count = u32::from(ctx.config.lines.count.max(1));
        let working = &mut ctx.config.working;
        working.effect_creating += 1;
        if working.effect_creating >= count {
            working.effect_creating = 0;
        }
        let index = working.effect_creating;
        line_color(ctx, index);
    }
}
