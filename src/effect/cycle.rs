//! Special mode rotating through the regular effects

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::context::StepContext;
use crate::mode::ModeId;
use crate::modifier::ModifierKind;

pub(crate) struct Cycle;

/// Mode shown after `current`
fn next_mode<const N: usize>(ctx: &mut StepContext<'_, N>, current: ModeId) -> ModeId {
    let first = ModeId::FIRST_EFFECT.as_raw();
    let last = ModeId::LAST_EFFECT.as_raw();
    let raw = if ctx.config.cycle.is_random {
        ctx.random_between(usize::from(first), usize::from(last) + 1) as u8
    } else {
        current.as_raw() + 1
    };
    ModeId::from_raw(raw)
        .filter(|mode| mode.is_cyclable())
        .unwrap_or(ModeId::FIRST_EFFECT)
}

impl Effect for Cycle {
    /// Switch to the next effect and restart the period
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let current = ModeId::from_raw(ctx.config.cycle.current)
            .filter(|mode| mode.is_cyclable())
            .unwrap_or(ModeId::FIRST_EFFECT);
        let now_ms = ctx.now_ms();
        ctx.config.cycle.restart(now_ms);

        let next = next_mode(ctx, current);
        let cycle = &mut ctx.config.cycle;
        cycle.current = next.as_raw();
        cycle.need_to_fade = cycle.fading > 0;

        #[cfg(feature = "esp32-log")]
        println!("[Cycle.init] switching to {}", next.as_str());

        ctx.config.mode = next;
        ctx.modifier.cancel();
        super::step(next, ctx, true);
    }

    /// Fade out first when configured, then switch
    fn advance<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let cycle = &mut ctx.config.cycle;
        if cycle.need_to_fade {
            cycle.need_to_fade = false;
            let speed = i8::try_from(cycle.fading).unwrap_or(i8::MAX);
            ctx.modifier.start(ModifierKind::Fading, 0, speed);
        } else {
            Self::init(ctx);
        }
    }
}
