//! Effect catalog
//!
//! Every effect is a unit type implementing [`Effect`]. Effects keep no state
//! of their own: options and working fields live in the configuration, pixels
//! in the frame, so a persisted configuration resumes exactly where it left
//! off. Dispatch goes through [`step`], keyed by [`ModeId`].

mod cycle;
mod lines;
mod off;
mod pulse;
mod rainbow;
mod schedule;
mod snake;
mod snowflake;
mod stroboscope;
mod waves;

use cycle::Cycle;
use lines::Lines;
use off::Off;
use pulse::Pulse;
use rainbow::Rainbow;
use schedule::Schedule;
use snake::Snake;
use snowflake::Snowflake;
use stroboscope::Stroboscope;
use waves::Waves;

use crate::context::StepContext;
use crate::mode::ModeId;

pub(crate) trait Effect {
    /// Build the first frame from the options
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>);

    /// Advance by one step
    fn advance<const N: usize>(_ctx: &mut StepContext<'_, N>) {}

    fn step<const N: usize>(ctx: &mut StepContext<'_, N>, is_default: bool) {
        if is_default {
            Self::init(ctx);
        } else {
            Self::advance(ctx);
        }
    }
}

/// Initialize (`is_default`) or advance the effect of `mode`
pub(crate) fn step<const N: usize>(mode: ModeId, ctx: &mut StepContext<'_, N>, is_default: bool) {
    match mode {
        ModeId::Off => Off::step(ctx, is_default),
        ModeId::Waves => Waves::step(ctx, is_default),
        ModeId::Rainbow => Rainbow::step(ctx, is_default),
        ModeId::Lines => Lines::step(ctx, is_default),
        ModeId::Snowflake => Snowflake::step(ctx, is_default),
        ModeId::Stroboscope => Stroboscope::step(ctx, is_default),
        ModeId::Snake => Snake::step(ctx, is_default),
        ModeId::Pulse => Pulse::step(ctx, is_default),
        ModeId::Cycle => Cycle::step(ctx, is_default),
        ModeId::Schedule => Schedule::step(ctx, is_default),
    }
}

/// Run the handler of the active special mode, if any
pub(crate) fn special_step<const N: usize>(ctx: &mut StepContext<'_, N>) {
    match ctx.config.special_mode {
        ModeId::Cycle => Cycle::advance(ctx),
        ModeId::Schedule => Schedule::advance(ctx),
        _ => {}
    }
}

/// Distance kept from both strip ends when placing a flake or flash
///
/// Limited so that at least one valid position remains.
pub(crate) fn edge_margin(flake_size: u8, len: usize) -> usize {
    usize::from(flake_size).min((len / 2).saturating_sub(1))
}
