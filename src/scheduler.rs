//! Step pacing against a wrapping microsecond clock.
//!
//! Effects and modifiers advance one step at a time. After each step the
//! next deadline is derived from the current speed: faster speeds give
//! shorter delays. The hardware clock is a 32-bit microsecond counter that
//! wraps roughly every 71 minutes, so a deadline computed just before the
//! wrap ends up numerically smaller than "now". The scheduler flags that
//! case and holds every due-check until the clock itself has wrapped.

/// Largest accepted speed; higher magnitudes are clamped
pub const MAX_SPEED: u8 = 100;

/// Delay added on top of `step_base * (100 - speed)`, in microseconds
pub const MIN_STEP_US: u32 = 1_000;

/// Step base used by the fading modifier regardless of the active mode
pub const FADING_STEP_BASE: u16 = 1_000;

/// Deadline tracker shared by the active effect and modifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepScheduler {
    deadline: u32,
    overflow: bool,
}

impl StepScheduler {
    pub const fn new() -> Self {
        Self {
            deadline: 0,
            overflow: false,
        }
    }

    /// Delay before the next step for the given speed magnitude
    ///
    /// `speed` 0 yields the longest delay, `MAX_SPEED` the shortest.
    #[allow(clippy::cast_lossless)]
    pub const fn step_delay(speed: u8, step_base: u16) -> u32 {
        let speed = if speed > MAX_SPEED { MAX_SPEED } else { speed };
        let step_base = step_base as u32;
        (step_base * MAX_SPEED as u32 + MIN_STEP_US) - speed as u32 * step_base
    }

    /// Compute and store the next deadline
    ///
    /// Sets the overflow flag when the deadline wrapped past `u32::MAX`.
    pub fn schedule(&mut self, now: u32, speed: u8, step_base: u16) -> u32 {
        let deadline = now.wrapping_add(Self::step_delay(speed, step_base));
        if deadline < now {
            self.overflow = true;
        }
        self.deadline = deadline;
        deadline
    }

    /// Clear the overflow flag once the clock has wrapped back below the deadline
    pub fn settle(&mut self, now: u32) {
        if self.overflow && now < self.deadline {
            self.overflow = false;
        }
    }

    /// Returns true when the stored deadline has passed
    ///
    /// Always false while a wrap is pending.
    pub const fn is_due(&self, now: u32) -> bool {
        !self.overflow && now > self.deadline
    }

    pub const fn deadline(&self) -> u32 {
        self.deadline
    }

    pub const fn is_overflow(&self) -> bool {
        self.overflow
    }
}
