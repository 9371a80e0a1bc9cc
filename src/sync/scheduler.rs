//! Throttling for the parse → render pipeline.
//!
//! Buffer changes can arrive on every keystroke; running the full
//! pipeline for each one would burn CPU for no visible benefit. The
//! throttle runs the pipeline immediately for the first change in an
//! idle period and coalesces everything inside the window into a single
//! trailing run that uses the latest buffer state. The guarantee is
//! eventual convergence to the latest state, not a render per change.
//!
//! Time is passed in explicitly so tests can drive it deterministically.

/// Reference throttle window.
pub const DEFAULT_WINDOW_MS: u64 = 1000;

/// Leading-edge throttle with a guaranteed trailing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateThrottle {
    window_ms: u64,
    last_run: Option<u64>,
    pending: bool,
}

impl UpdateThrottle {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_run: None,
            pending: false,
        }
    }

    /// Record a buffer change at `now_ms`.
    ///
    /// Returns `true` when the pipeline should run immediately (first
    /// change in an idle period); otherwise the change is coalesced into
    /// the pending trailing run.
    pub const fn on_change(&mut self, now_ms: u64) -> bool {
        match self.last_run {
            Some(last) if now_ms.saturating_sub(last) < self.window_ms => {
                self.pending = true;
                false
            }
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }

    /// Returns `true` once when the trailing run becomes due.
    pub const fn take_ready(&mut self, now_ms: u64) -> bool {
        if !self.pending {
            return false;
        }
        match self.last_run {
            Some(last) if now_ms.saturating_sub(last) >= self.window_ms => {
                self.pending = false;
                self.last_run = Some(now_ms);
                true
            }
            None => {
                self.pending = false;
                self.last_run = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }

    /// Whether a trailing run is still owed.
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Force the owed trailing run out now (teardown path).
    pub const fn flush(&mut self) -> bool {
        let due = self.pending;
        self.pending = false;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_change_runs_immediately() {
        let mut throttle = UpdateThrottle::new(1000);
        assert!(throttle.on_change(0));
        assert!(!throttle.is_pending());
    }

    #[test]
    fn test_burst_coalesces_into_one_trailing_run() {
        let mut throttle = UpdateThrottle::new(1000);
        // N ≥ 3 changes inside one window: one immediate run, one
        // trailing run at/after the window boundary, nothing else.
        assert!(throttle.on_change(0));
        assert!(!throttle.on_change(100));
        assert!(!throttle.on_change(400));
        assert!(!throttle.on_change(999));
        assert!(throttle.is_pending());

        assert!(!throttle.take_ready(500));
        assert!(!throttle.take_ready(999));
        assert!(throttle.take_ready(1000));
        assert!(!throttle.take_ready(1001));
        assert!(!throttle.is_pending());
    }

    #[test]
    fn test_change_after_idle_period_runs_immediately_again() {
        let mut throttle = UpdateThrottle::new(1000);
        assert!(throttle.on_change(0));
        assert!(throttle.on_change(2500));
    }

    #[test]
    fn test_trailing_run_reopens_window() {
        let mut throttle = UpdateThrottle::new(1000);
        assert!(throttle.on_change(0));
        assert!(!throttle.on_change(500));
        assert!(throttle.take_ready(1000));
        // A change right after the trailing run is inside the new window.
        assert!(!throttle.on_change(1100));
        assert!(throttle.take_ready(2000));
    }

    #[test]
    fn test_no_change_is_never_ready() {
        let mut throttle = UpdateThrottle::new(1000);
        assert!(!throttle.take_ready(5000));
    }

    #[test]
    fn test_flush_forces_pending_run() {
        let mut throttle = UpdateThrottle::new(1000);
        assert!(throttle.on_change(0));
        assert!(!throttle.on_change(10));
        assert!(throttle.flush());
        assert!(!throttle.flush());
        assert!(!throttle.take_ready(1000));
    }
}
