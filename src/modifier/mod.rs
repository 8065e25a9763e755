//! Transient transformations layered on top of the running effect
//!
//! A modifier pauses the effect, animates the pixel buffer over a number of
//! steps and then hands control back. At most one modifier runs at a time.

mod fading;
mod invert;
mod moving;

use crate::color::{BLACK, Rgb};
use crate::context::StepContext;

/// Sub-steps used by effects that shift the strip through [`ModifierKind::Moving`]
pub const MOVING_DISCRETIZATION: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    /// Mirror the strip, revealed one pixel per step
    Invert,
    /// Shift the strip by one pixel with a cross-fade
    Moving,
    /// Fade everything to black
    Fading,
}

/// Progress of the active modifier
#[derive(Debug, Clone)]
pub struct ModifierState<const N: usize> {
    pub(crate) active: Option<ModifierKind>,
    pub(crate) discretization: u16,
    pub(crate) current: u16,
    pub(crate) speed: i8,
    /// Invisible modifiers apply their result in a single step
    pub(crate) visible: bool,
    pub(crate) effect_paused: bool,
    /// Snapshot taken on the first step
    pub(crate) leds: [Rgb; N],
}

impl<const N: usize> ModifierState<N> {
    pub const fn new() -> Self {
        Self {
            active: None,
            discretization: 0,
            current: 0,
            speed: 0,
            visible: true,
            effect_paused: false,
            leds: [BLACK; N],
        }
    }

    pub const fn active(&self) -> Option<ModifierKind> {
        self.active
    }

    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The effect is held until the modifier completes
    pub const fn is_effect_paused(&self) -> bool {
        self.effect_paused
    }

    /// Steps taken so far
    pub const fn current(&self) -> u16 {
        self.current
    }

    pub const fn discretization(&self) -> u16 {
        self.discretization
    }

    pub const fn speed(&self) -> i8 {
        self.speed
    }

    /// Start a visible modifier and pause the effect
    pub(crate) fn start(&mut self, kind: ModifierKind, discretization: u16, speed: i8) {
        self.active = Some(kind);
        self.discretization = discretization;
        self.current = 0;
        self.speed = speed;
        self.visible = true;
        self.effect_paused = true;
    }

    /// Start a modifier that applies its result on the next step without animating
    pub(crate) fn start_hidden(&mut self, kind: ModifierKind, discretization: u16, speed: i8) {
        self.start(kind, discretization, speed);
        self.visible = false;
    }

    /// Drop the modifier and resume the effect
    pub(crate) fn cancel(&mut self) {
        self.active = None;
        self.effect_paused = false;
    }
}

impl<const N: usize> Default for ModifierState<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance the active modifier by one step
pub(crate) fn step<const N: usize>(ctx: &mut StepContext<'_, N>) {
    match ctx.modifier.active {
        Some(ModifierKind::Invert) => invert::step(ctx),
        Some(ModifierKind::Moving) => moving::step(ctx),
        Some(ModifierKind::Fading) => fading::step(ctx),
        None => {}
    }
}

/// Schedule the next modifier step at the modifier's own speed
fn reschedule<const N: usize>(ctx: &mut StepContext<'_, N>) {
    let speed = ctx.modifier.speed;
    ctx.schedule(speed);
}
