use embassy_time::{Duration, Instant};

/// Quiet period between the last change and the write
pub const AUTOSAVE_DELAY: Duration = Duration::from_secs(60);

/// Debounced "dirty since" marker
///
/// Every change restarts the quiet period, so bursts of remote edits end up
/// in a single write.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autosave {
    dirty_since: Option<Instant>,
}

impl Autosave {
    pub const fn new() -> Self {
        Self { dirty_since: None }
    }

    /// Record a change at `now`
    pub fn mark(&mut self, now: Instant) {
        self.dirty_since = Some(now);
    }

    /// Forget the pending change
    pub fn clear(&mut self) {
        self.dirty_since = None;
    }

    pub const fn is_pending(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Returns true when a change is pending and the quiet period has passed
    pub fn is_due(&self, now: Instant) -> bool {
        self.dirty_since
            .is_some_and(|since| now > since + AUTOSAVE_DELAY)
    }
}
