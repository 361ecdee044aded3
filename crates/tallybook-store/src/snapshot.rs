// ABOUTME: The persisted progress snapshot: named sections of ordered ledger entries.
// ABOUTME: Saved as JSON with atomic write (tmp + fsync + rename) for crash safety.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tallybook_core::SavedEntry;
use thiserror::Error;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur during snapshot file operations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The whole persisted progress of a player: one ordered entry list per
/// named ledger domain. Sections store entries as arrays rather than maps so
/// the stored order is preserved exactly and stale codes survive until the
/// ledger's load path can warn about them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub sections: BTreeMap<String, Vec<SavedEntry>>,
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSnapshot {
    /// An empty snapshot at the current format version.
    pub fn new() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            sections: BTreeMap::new(),
        }
    }

    /// The entries stored under `section`, if any.
    pub fn section(&self, section: &str) -> Option<&[SavedEntry]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    /// Replace a section wholesale.
    pub fn set_section(&mut self, section: impl Into<String>, entries: Vec<SavedEntry>) {
        self.sections.insert(section.into(), entries);
    }

    /// Save the snapshot to `path` using atomic write (write to .tmp, fsync,
    /// rename). Creates parent directories if they do not exist and refreshes
    /// `saved_at` on the written copy.
    pub fn save_to(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut stamped = self.clone();
        stamped.saved_at = Utc::now();
        let json = serde_json::to_string_pretty(&stamped)?;

        let tmp_path = path.with_extension("tmp");
        let mut file = File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    /// Load a snapshot from `path`. Returns `Ok(None)` when the file does
    /// not exist, so first launches start from an empty snapshot.
    pub fn load_from(path: &Path) -> Result<Option<Self>, SnapshotError> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let snapshot: ProgressSnapshot = serde_json::from_str(&contents)?;
        Ok(Some(snapshot))
    }
}
