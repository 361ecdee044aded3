// ABOUTME: Defines the LedgerKey trait for enum-backed storage keys with integer codes.
// ABOUTME: Code 0 is the reserved None sentinel and is never a valid storage key.

use std::fmt::Debug;
use std::hash::Hash;

/// The reserved code for a key type's `None` member. Entries are never
/// stored under this code, and persisted data carrying it is rejected
/// with a warning during load.
pub const NONE_CODE: i32 = 0;

/// A closed, enumerable key type stored by integer code.
///
/// Implementors are small fieldless enums whose first member is a `None`
/// sentinel with code [`NONE_CODE`]. `from_code` is the single validation
/// boundary for codes coming out of persisted data: it returns `None` for
/// anything that is not a current member, which lets loads skip stale codes
/// left behind by removed members.
pub trait LedgerKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The integer code this key is stored under.
    fn code(self) -> i32;

    /// Map a stored code back to a key. Returns `None` for unknown codes.
    fn from_code(code: i32) -> Option<Self>;

    /// Every member of the key type in declaration order, including the
    /// `None` sentinel.
    fn members() -> &'static [Self];
}
