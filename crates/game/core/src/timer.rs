//! Elapsed-time tracking for a game.
//!
//! Nothing here reads the system time directly: the current time is passed in
//! by the caller, usually from a [`Clock`] owned by the session.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time, as an offset from an arbitrary epoch.
pub trait Clock {
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Monotonic wall clock starting at construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Stopwatch with centisecond display.
///
/// The host calls [`tick`](Self::tick) at its own frame cadence and shows the
/// returned string; once stopped, ticks yield nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrecisionTimer {
    start: Duration,
    stopped_at: Option<Duration>,
    running: bool,
}

impl PrecisionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) timing from `now`.
    pub fn start(&mut self, now: Duration) {
        self.start = now;
        self.stopped_at = None;
        self.running = true;
    }

    /// Stops timing and returns the final formatted time.
    pub fn stop(&mut self, now: Duration) -> String {
        let end = *self.stopped_at.get_or_insert(now);
        self.running = false;
        format_time(end.saturating_sub(self.start))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time since start; frozen once stopped.
    pub fn elapsed(&self, now: Duration) -> Duration {
        self.stopped_at.unwrap_or(now).saturating_sub(self.start)
    }

    /// Formatted elapsed time while running.
    pub fn tick(&self, now: Duration) -> Option<String> {
        self.running.then(|| format_time(self.elapsed(now)))
    }
}

/// Formats a duration as `MM:SS.CC`, truncating to centiseconds.
///
/// Minutes are not wrapped, so an hour reads `60:00.00`.
pub fn format_time(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let total_seconds = millis / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let centis = (millis % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}
