// ABOUTME: Persistence layer for tallybook: the on-disk progress snapshot and section domains.
// ABOUTME: Snapshots are JSON files written atomically; sections map to ledger domains.

pub mod section;
pub mod snapshot;

pub use section::SectionDomain;
pub use snapshot::{ProgressSnapshot, SnapshotError, SNAPSHOT_VERSION};
