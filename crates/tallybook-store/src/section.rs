// ABOUTME: SectionDomain, the LedgerDomain implementation over one named snapshot section.
// ABOUTME: Reads saved entries from its section, falls back to optional defaults, persists wholesale.

use std::marker::PhantomData;

use tallybook_core::{LedgerDomain, LedgerKey, SavedEntry};

use crate::snapshot::ProgressSnapshot;

/// A ledger domain backed by one named section of a [`ProgressSnapshot`].
///
/// Each ledger in the game owns a section ("currencies", "resources", ...).
/// Defaults supplied at construction are used when the snapshot has no data
/// for the section, e.g. starting balances on a fresh profile.
pub struct SectionDomain<K> {
    section: String,
    defaults: Option<Vec<SavedEntry>>,
    _key: PhantomData<fn() -> K>,
}

impl<K: LedgerKey> SectionDomain<K> {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            defaults: None,
            _key: PhantomData,
        }
    }

    pub fn with_defaults(section: impl Into<String>, defaults: Vec<SavedEntry>) -> Self {
        Self {
            section: section.into(),
            defaults: Some(defaults),
            _key: PhantomData,
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }
}

impl<K: LedgerKey> LedgerDomain for SectionDomain<K> {
    type Key = K;
    type Snapshot = ProgressSnapshot;

    fn saved_data(&self, snapshot: &Self::Snapshot) -> Option<Vec<SavedEntry>> {
        snapshot.section(&self.section).map(<[SavedEntry]>::to_vec)
    }

    fn default_data(&self) -> Option<Vec<SavedEntry>> {
        self.defaults.clone()
    }

    fn persist(&self, snapshot: &mut Self::Snapshot, entries: &[SavedEntry]) {
        snapshot.set_section(self.section.clone(), entries.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallybook_core::KeyedLedger;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Coin {
        None,
        Gold,
        Silver,
    }

    impl LedgerKey for Coin {
        fn code(self) -> i32 {
            match self {
                Coin::None => 0,
                Coin::Gold => 1,
                Coin::Silver => 2,
            }
        }

        fn from_code(code: i32) -> Option<Self> {
            match code {
                0 => Some(Coin::None),
                1 => Some(Coin::Gold),
                2 => Some(Coin::Silver),
                _ => None,
            }
        }

        fn members() -> &'static [Self] {
            &[Coin::None, Coin::Gold, Coin::Silver]
        }
    }

    #[test]
    fn saved_data_reads_own_section_only() {
        let mut snapshot = ProgressSnapshot::new();
        snapshot.set_section("currencies", vec![SavedEntry::new(1, 50)]);

        let domain: SectionDomain<Coin> = SectionDomain::new("currencies");
        assert_eq!(
            domain.saved_data(&snapshot),
            Some(vec![SavedEntry::new(1, 50)])
        );

        let other: SectionDomain<Coin> = SectionDomain::new("resources");
        assert_eq!(other.saved_data(&snapshot), None);
    }

    #[test]
    fn defaults_are_returned_only_when_supplied() {
        let plain: SectionDomain<Coin> = SectionDomain::new("currencies");
        assert_eq!(plain.default_data(), None);

        let seeded: SectionDomain<Coin> =
            SectionDomain::with_defaults("currencies", vec![SavedEntry::new(1, 100)]);
        assert_eq!(seeded.default_data(), Some(vec![SavedEntry::new(1, 100)]));
    }

    #[test]
    fn persist_replaces_the_section() {
        let mut snapshot = ProgressSnapshot::new();
        snapshot.set_section("currencies", vec![SavedEntry::new(1, 1), SavedEntry::new(9, 9)]);

        let domain: SectionDomain<Coin> = SectionDomain::new("currencies");
        domain.persist(&mut snapshot, &[SavedEntry::new(1, 75), SavedEntry::new(2, 3)]);

        assert_eq!(
            snapshot.section("currencies").unwrap(),
            &[SavedEntry::new(1, 75), SavedEntry::new(2, 3)]
        );
    }

    #[tokio::test]
    async fn ledger_over_section_domain_round_trips() {
        let mut snapshot = ProgressSnapshot::new();

        let mut ledger = KeyedLedger::new(SectionDomain::<Coin>::new("currencies"));
        ledger.set_amount(Coin::Gold, 250);
        ledger.save_progress(&mut snapshot);
        assert!(!ledger.is_changed());

        let mut reloaded = KeyedLedger::new(SectionDomain::<Coin>::new("currencies"));
        reloaded.load_progress(&snapshot).await;

        assert_eq!(reloaded.amount(Coin::Gold), 250);
        assert_eq!(reloaded.amount(Coin::Silver), 0);
        assert!(!reloaded.is_changed());
    }

    #[tokio::test]
    async fn fresh_profile_loads_default_balances() {
        let snapshot = ProgressSnapshot::new();

        let domain =
            SectionDomain::<Coin>::with_defaults("currencies", vec![SavedEntry::new(1, 100)]);
        let mut ledger = KeyedLedger::new(domain);
        ledger.load_progress(&snapshot).await;

        assert_eq!(ledger.amount(Coin::Gold), 100);
        assert!(!ledger.is_changed());
    }
}
