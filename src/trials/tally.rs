//! Trial outcome counters.

use std::fmt;

/// Success and failure counts across one harness run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialTally {
    pub successes: usize,
    pub failures: usize,
}

impl TrialTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one passing trial.
    pub fn record_success(&mut self) {
        self.successes += 1;
    }

    /// Record one failing trial.
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Number of trials recorded.
    pub fn total(&self) -> usize {
        self.successes + self.failures
    }

    /// True when no trial failed (including when none ran).
    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }
}

impl fmt::Display for TrialTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed ({} trials)",
            self.successes,
            self.failures,
            self.total()
        )
    }
}
