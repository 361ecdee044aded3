// ABOUTME: Defines TrackedValue, a counter with a checkpointed baseline for dirty tracking.
// ABOUTME: An entry is "changed" iff its current value differs from the last checkpoint.

use serde::{Deserialize, Serialize};

/// A single ledger entry: the current counter value plus the baseline it is
/// compared against for change tracking. Checkpointing copies the current
/// value into the baseline, clearing the changed flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedValue {
    current: i64,
    baseline: i64,
}

impl TrackedValue {
    /// A value that starts already checkpointed at `current`.
    pub fn new(current: i64) -> Self {
        Self {
            current,
            baseline: current,
        }
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    /// True iff the current value differs from the last checkpoint.
    pub fn is_changed(&self) -> bool {
        self.current != self.baseline
    }

    /// Overwrite the current value. Does not touch the baseline.
    pub fn set(&mut self, value: i64) {
        self.current = value;
    }

    /// Checkpoint: adopt the current value as the new baseline.
    pub fn reset_change_history(&mut self) {
        self.baseline = self.current;
    }
}
