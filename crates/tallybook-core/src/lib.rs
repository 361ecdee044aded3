// ABOUTME: Core library for tallybook, containing the keyed ledger and its seam traits.
// ABOUTME: Defines the key/value/domain types shared by stores and frontends.

pub mod change;
pub mod domain;
pub mod key;
pub mod ledger;
pub mod value;

pub use change::LedgerChange;
pub use domain::{LedgerDomain, SavedEntry};
pub use key::{LedgerKey, NONE_CODE};
pub use ledger::KeyedLedger;
pub use value::TrackedValue;
