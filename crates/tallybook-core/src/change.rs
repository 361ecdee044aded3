// ABOUTME: Defines the LedgerChange notification broadcast when a ledger entry moves.
// ABOUTME: Carries the key plus old and new values; delivered in mutation order.

/// A change notification for one ledger entry.
///
/// Emitted once per effective `set_amount` with the values before and after.
/// During `load_progress` an additional announcement with `old_value ==
/// new_value` follows every restored entry, so subscribers can distinguish
/// "value moved" from "value restored".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerChange<K> {
    pub key: K,
    pub old_value: i64,
    pub new_value: i64,
}
