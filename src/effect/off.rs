use super::Effect;
use crate::context::{SpeedSource, StepContext};

/// All pixels dark, nothing scheduled
pub(crate) struct Off;

impl Effect for Off {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        ctx.frame.clear_leds();
        ctx.select_speed(SpeedSource::Zero);
        ctx.modifier.speed = 0;
        ctx.modifier.cancel();
    }
}
