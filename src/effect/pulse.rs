use super::Effect;
use crate::context::{SpeedSource, StepContext};
use crate::math8::lerp_colors;

/// Whole strip breathing between two colors
pub(crate) struct Pulse;

impl Effect for Pulse {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let working = &mut ctx.config.working;
        working.position = 0;
        working.step = 1;

        ctx.select_speed(SpeedSource::Pulse);
        let speed = ctx.effect_speed();
        ctx.schedule(speed);
        ctx.modifier.cancel();
    }

    fn advance<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let options = ctx.config.pulse;
        let working = &mut ctx.config.working;
        working.position = working.position.saturating_add(i16::from(working.step));
        if working.position <= 0 || working.position >= 255 {
            working.step = working.step.saturating_neg();
        }

        let amount = working.position.clamp(0, 255) as u8;
        let color = lerp_colors(options.color_min, options.color_max, amount);
        working.current_color = color;
        ctx.frame.fill(color);
    }
}
