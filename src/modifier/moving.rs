use super::reschedule;
use crate::color::Rgb;
use crate::context::StepContext;
use crate::math8::crossfade8;

/// Shift the strip by one pixel over `discretization` steps
///
/// Intermediate steps cross-fade every pixel towards its neighbour; the final
/// step commits the rotation. A negative direction shifts towards index 0.
pub(super) fn step<const N: usize>(ctx: &mut StepContext<'_, N>) {
    if N == 0 {
        ctx.modifier.cancel();
        return;
    }

    let modifier = &mut *ctx.modifier;
    if modifier.current == 0 {
        modifier.leds = ctx.frame.leds;
    }
    modifier.current = modifier.current.saturating_add(1);

    let total = modifier.discretization.max(1);
    let towards_start = ctx.config.working.direction < 0;

    if modifier.current >= total {
        if towards_start {
            modifier.leds.rotate_left(1);
        } else {
            modifier.leds.rotate_right(1);
        }
        ctx.frame.leds = modifier.leds;
        ctx.frame.dirty = true;
        modifier.cancel();
        return;
    }

    let current = modifier.current;
    for (index, led) in ctx.frame.leds.iter_mut().enumerate() {
        let neighbour = if towards_start {
            (index + 1) % N
        } else {
            (index + N - 1) % N
        };
        let from = modifier.leds[index];
        let to = modifier.leds[neighbour];
        *led = Rgb {
            r: crossfade8(from.r, to.r, current, total),
            g: crossfade8(from.g, to.g, current, total),
            b: crossfade8(from.b, to.b, current, total),
        };
    }
    reschedule(ctx);
}
