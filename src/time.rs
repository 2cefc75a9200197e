//! Time sources and bounded waiting

use embassy_time::{Duration, Instant};

/// Source of the current monotonic time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Point in time after which a wait is abandoned
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    timeout: Duration,
}

impl Deadline {
    pub const fn new(start: Instant, timeout: Duration) -> Self {
        Self { start, timeout }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) > self.timeout
    }

    /// Call `attempt` until it yields a value or the deadline passes
    ///
    /// `attempt` is always called at least once. Errors from `attempt` end the
    /// wait immediately.
    pub fn poll<C, T, E, F>(&self, clock: &C, mut attempt: F) -> Result<Option<T>, E>
    where
        C: Clock,
        F: FnMut() -> Result<Option<T>, E>,
    {
        loop {
            if let Some(value) = attempt()? {
                return Ok(Some(value));
            }
            if self.is_expired(clock.now()) {
                return Ok(None);
            }
        }
    }
}

/// True once at least `interval` has passed since `last`
///
/// A guard that never fired is always due.
pub fn is_due(last: Option<Instant>, interval: Duration, now: Instant) -> bool {
    match last {
        Some(last) => now.saturating_duration_since(last) >= interval,
        None => true,
    }
}
