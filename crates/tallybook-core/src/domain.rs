// ABOUTME: Defines the LedgerDomain trait, the pluggable data-source seam per ledger.
// ABOUTME: A domain resolves saved or default entries from a snapshot and persists back into it.

use serde::{Deserialize, Serialize};

use crate::key::LedgerKey;

/// One persisted ledger entry: a storage code paired with the counter value.
///
/// Persisted sections are ordered sequences of these rather than maps, so the
/// stored order survives serialization and stale codes reach the load path
/// intact (where they are skipped with a warning instead of failing the load).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub code: i32,
    pub value: i64,
}

impl SavedEntry {
    pub fn new(code: i32, value: i64) -> Self {
        Self { code, value }
    }
}

/// The data-source seam a [`KeyedLedger`](crate::KeyedLedger) loads from and
/// saves into. One implementation exists per ledger domain (currencies,
/// resources, ...), each owning its slice of the snapshot.
pub trait LedgerDomain {
    type Key: LedgerKey;
    type Snapshot;

    /// Saved entries for this domain, if the snapshot has any.
    fn saved_data(&self, snapshot: &Self::Snapshot) -> Option<Vec<SavedEntry>>;

    /// Fallback entries used when the snapshot has nothing for this domain.
    fn default_data(&self) -> Option<Vec<SavedEntry>>;

    /// Write the ledger's entries into the snapshot. The default does
    /// nothing; domains that own a persisted section override this. Called
    /// by `save_progress` before entries are checkpointed.
    fn persist(&self, _snapshot: &mut Self::Snapshot, _entries: &[SavedEntry]) {}
}
