use super::reschedule;
use crate::color::mirror_into;
use crate::context::StepContext;

/// Mirror the strip in place without animation
fn invert_now<const N: usize>(ctx: &mut StepContext<'_, N>) {
    ctx.frame.leds.reverse();
    ctx.frame.dirty = true;
    ctx.modifier.cancel();
}

/// Reveal the mirrored strip one pixel per step
///
/// The reveal starts at index 0 when the direction is non-negative and at
/// the far end otherwise.
pub(super) fn step<const N: usize>(ctx: &mut StepContext<'_, N>) {
    if !ctx.modifier.visible {
        invert_now(ctx);
        return;
    }

    if ctx.modifier.current == 0 {
        mirror_into(&ctx.frame.leds, &mut ctx.modifier.leds);
    }

    let current = usize::from(ctx.modifier.current);
    let index = if ctx.config.working.direction >= 0 {
        current
    } else {
        N.saturating_sub(current + 1)
    };
    if let (Some(led), Some(mirrored)) =
        (ctx.frame.leds.get_mut(index), ctx.modifier.leds.get(index))
    {
        *led = *mirrored;
        ctx.frame.dirty = true;
    }

    ctx.modifier.current = ctx.modifier.current.saturating_add(1);
    if usize::from(ctx.modifier.current) >= N {
        ctx.modifier.cancel();
    } else {
        reschedule(ctx);
    }
}
