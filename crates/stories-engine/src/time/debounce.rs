use std::time::{Duration, Instant};

/// Debouncer state.
#[derive(Debug, Clone)]
enum Phase<T> {
    /// No burst in progress; the next value fires immediately.
    Idle,
    /// Inside a burst. `trailing` holds the latest value not yet emitted.
    Pending { deadline: Instant, trailing: Option<T> },
}

/// Leading-edge debouncer.
///
/// The first value of a burst is returned by [`push`](Self::push) straight away.
/// Further values inside the quiet window replace each other and restart the
/// window; the last one is returned by [`poll`](Self::poll) once the window has
/// elapsed. A push that arrives after the deadline starts a new burst even if
/// nobody polled; callers that must see every burst's last value poll first.
///
/// Time is passed in explicitly, so the debouncer works with any event loop
/// and with [`super::ManualClock`] in tests.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    interval: Duration,
    phase: Phase<T>,
}

impl<T> Debouncer<T> {
    /// Interval used for continuous pointer-driven edits.
    pub const FAST: Duration = Duration::from_millis(100);

    pub fn new(interval: Duration) -> Self {
        Self { interval, phase: Phase::Idle }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True while a burst is in progress.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Offers a value. Returns it immediately on the leading edge.
    ///
    /// Past the deadline the old burst is over: an unpolled trailing value is
    /// superseded and `value` fires as a new leading edge.
    pub fn push(&mut self, value: T, now: Instant) -> Option<T> {
        let deadline = now + self.interval;
        if let Phase::Pending { deadline: d, trailing } = &mut self.phase {
            if now < *d {
                *d = deadline;
                *trailing = Some(value);
                return None;
            }
            if trailing.is_some() {
                log::trace!("unpolled trailing value superseded by a late push");
            }
        }
        self.phase = Phase::Pending { deadline, trailing: None };
        Some(value)
    }

    /// Returns the trailing value once the quiet window has elapsed.
    ///
    /// Ends the burst when the window is over, even if there is nothing to emit.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(self.phase, Phase::Pending { deadline, .. } if now >= deadline);
        if due { self.flush() } else { None }
    }

    /// Ends the burst now and returns any value still waiting.
    pub fn flush(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Pending { trailing, .. } => trailing,
            Phase::Idle => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Self::FAST)
    }
}
