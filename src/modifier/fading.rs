use crate::color::{FloatChannel, channels, peak};
use crate::context::StepContext;
use crate::scheduler::FADING_STEP_BASE;

/// Fade the strip to black
///
/// Every channel loses `value / peak` per step, where `peak` is the
/// brightest channel of its pixel, so hues are kept while dimming and the
/// whole strip reaches black after as many steps as its brightest channel.
pub(super) fn step<const N: usize>(ctx: &mut StepContext<'_, N>) {
    if ctx.modifier.current == 0 {
        let mut brightest = 0;
        for (led, color) in ctx.frame.leds.iter().zip(ctx.frame.working.iter_mut()) {
            let top = peak(*led);
            brightest = brightest.max(top);
            for (channel, value) in color.channels_mut().into_iter().zip(channels(*led)) {
                let value = f32::from(value);
                let rate = if top == 0 { 0.0 } else { value / f32::from(top) };
                *channel = FloatChannel::new(value, rate);
            }
        }
        ctx.modifier.discretization = u16::from(brightest);
        ctx.modifier.effect_paused = true;
    }

    ctx.modifier.current = ctx.modifier.current.saturating_add(1);
    if ctx.modifier.current >= ctx.modifier.discretization {
        ctx.modifier.cancel();
    }

    for color in &mut ctx.frame.working {
        for channel in color.channels_mut() {
            channel.value -= channel.delta;
            if channel.value < 1.0 {
                channel.value = 0.0;
            }
        }
    }
    ctx.frame.commit_working();

    let speed = ctx.modifier.speed;
    ctx.schedule_with_base(speed, FADING_STEP_BASE);
}
