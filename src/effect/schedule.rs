use super::Effect;
use crate::context::{SpeedSource, StepContext};

/// Placeholder for time-of-day programs: selecting it blanks the strip
pub(crate) struct Schedule;

impl Effect for Schedule {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        ctx.frame.clear_leds();
        ctx.select_speed(SpeedSource::Zero);
        ctx.modifier.cancel();
    }
}
