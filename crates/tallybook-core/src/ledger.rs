// ABOUTME: The KeyedLedger: enum-keyed 64-bit counters with dirty tracking and change broadcast.
// ABOUTME: Loads and saves against a domain-provided snapshot, recovering from stale saved codes.

use std::collections::HashMap;

use tokio::sync::broadcast;

use crate::change::LedgerChange;
use crate::domain::{LedgerDomain, SavedEntry};
use crate::key::{LedgerKey, NONE_CODE};
use crate::value::TrackedValue;

/// A ledger of one 64-bit counter per non-None member of the domain's key
/// type. Entries exist eagerly from construction onward; reads of a key with
/// no entry are programmer errors and panic.
///
/// Mutations go through [`set_amount`](Self::set_amount), which broadcasts a
/// [`LedgerChange`] to subscribers whenever a value actually moves. The
/// ledger is single-writer by construction: every mutating operation takes
/// `&mut self`, and the only suspension point is the per-entry yield inside
/// [`load_progress`](Self::load_progress).
pub struct KeyedLedger<D: LedgerDomain> {
    domain: D,
    data: HashMap<i32, TrackedValue>,
    universe: Vec<i32>,
    change_tx: broadcast::Sender<LedgerChange<D::Key>>,
}

impl<D: LedgerDomain> KeyedLedger<D> {
    /// Create a ledger for the given domain with one zero entry per
    /// non-None member of the key type, in declaration order.
    pub fn new(domain: D) -> Self {
        let universe: Vec<i32> = D::Key::members()
            .iter()
            .map(|key| key.code())
            .filter(|&code| code != NONE_CODE)
            .collect();

        let (change_tx, _) = broadcast::channel(256);

        let mut ledger = Self {
            domain,
            data: HashMap::new(),
            universe,
            change_tx,
        };
        ledger.clear();
        ledger
    }

    /// Reset every entry to a fresh zero with no change history. Idempotent.
    pub fn initialize(&mut self) {
        self.clear();
    }

    /// Subscribe to change notifications. Events are sent at the mutation
    /// site in mutation order; a receiver that falls behind lags, it does
    /// not block the ledger.
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerChange<D::Key>> {
        self.change_tx.subscribe()
    }

    /// Current value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` has no entry, which only happens when the key type's
    /// `members()` and `from_code` disagree.
    pub fn amount(&self, key: D::Key) -> i64 {
        self.entry(key).current()
    }

    /// Set `key` to `amount`. When the value actually moves, the entry is
    /// marked changed and one [`LedgerChange`] is broadcast; setting the
    /// current value again is a complete no-op.
    ///
    /// # Panics
    ///
    /// Panics if `key` has no entry.
    pub fn set_amount(&mut self, key: D::Key, amount: i64) {
        let old_value = self.entry(key).current();
        if old_value == amount {
            return;
        }

        self.data
            .get_mut(&key.code())
            .unwrap_or_else(|| panic!("no ledger entry for {key:?} (code {})", key.code()))
            .set(amount);

        // Ignore send errors -- no active subscribers is fine
        let _ = self.change_tx.send(LedgerChange {
            key,
            old_value,
            new_value: amount,
        });
    }

    /// Add `delta` (which may be negative) to `key`'s value.
    ///
    /// # Panics
    ///
    /// Panics on 64-bit overflow. Progress counters that wrap or saturate
    /// would silently diverge from what a save restores, so overflow is
    /// treated as a bug in the caller.
    pub fn add_amount(&mut self, key: D::Key, delta: i64) {
        let current = self.amount(key);
        let amount = current.checked_add(delta).unwrap_or_else(|| {
            panic!("ledger overflow adding {delta} to {key:?} (current {current})")
        });
        self.set_amount(key, amount);
    }

    /// True iff any entry has moved since the last checkpoint.
    pub fn is_changed(&self) -> bool {
        self.data.values().any(TrackedValue::is_changed)
    }

    /// Every key with an entry, in the key type's declaration order.
    pub fn available_types(&self) -> impl Iterator<Item = D::Key> + '_ {
        self.universe.iter().filter_map(|&code| D::Key::from_code(code))
    }

    /// The current entries in declaration order, as persisted pairs.
    pub fn entries(&self) -> Vec<SavedEntry> {
        self.universe
            .iter()
            .map(|&code| SavedEntry::new(code, self.data[&code].current()))
            .collect()
    }

    /// Replace the ledger's contents from the snapshot.
    ///
    /// The ledger is cleared first, then populated from the domain's saved
    /// data (falling back to its default data; with neither, the ledger is
    /// left freshly cleared). Entries are applied in stored order. A code
    /// that no longer maps to a key member, or the None code, is logged and
    /// skipped without failing the load. Every restored entry is announced
    /// with an extra `LedgerChange` whose old and new values are equal --
    /// post-load listeners rely on that signal even when the value did not
    /// move. The task yields once per restored entry.
    ///
    /// On completion every entry is checkpointed, so a finished load reports
    /// `is_changed() == false`. A load future dropped mid-iteration leaves
    /// the ledger partially populated and non-checkpointed; callers must not
    /// treat a cancelled load as committed.
    pub async fn load_progress(&mut self, snapshot: &D::Snapshot) {
        self.clear();

        let Some(saved) = self
            .domain
            .saved_data(snapshot)
            .or_else(|| self.domain.default_data())
        else {
            return;
        };

        for entry in saved {
            let Some(key) = D::Key::from_code(entry.code) else {
                tracing::warn!(
                    "unknown key code {} (value {}) in saved data, possibly a removed member; skipping",
                    entry.code,
                    entry.value
                );
                continue;
            };

            if entry.code == NONE_CODE {
                tracing::warn!("None key (value {}) in saved data; skipping", entry.value);
                continue;
            }

            self.set_amount(key, entry.value);

            // Announce the restored value even when it equals the fresh
            // entry; subscribers listening for post-load state depend on it
            let _ = self.change_tx.send(LedgerChange {
                key,
                old_value: entry.value,
                new_value: entry.value,
            });

            tokio::task::yield_now().await;
        }

        self.checkpoint_all();
    }

    /// Hand the current entries to the domain for persistence, then
    /// checkpoint every entry unconditionally. The domain sees the entries
    /// before their change flags are cleared.
    pub fn save_progress(&mut self, snapshot: &mut D::Snapshot) {
        let entries = self.entries();
        self.domain.persist(snapshot, &entries);
        self.checkpoint_all();
    }

    fn entry(&self, key: D::Key) -> &TrackedValue {
        self.data
            .get(&key.code())
            .unwrap_or_else(|| panic!("no ledger entry for {key:?} (code {})", key.code()))
    }

    fn clear(&mut self) {
        self.data = self
            .universe
            .iter()
            .map(|&code| (code, TrackedValue::default()))
            .collect();
    }

    fn checkpoint_all(&mut self) {
        for value in self.data.values_mut() {
            value.reset_change_history();
        }
    }
}
