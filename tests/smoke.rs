// ABOUTME: End-to-end smoke test for the full tallybook lifecycle.
// ABOUTME: Builds ledgers, mutates them, saves to disk, reloads, and verifies restored state.

use tallybook_core::{KeyedLedger, LedgerKey, SavedEntry};
use tallybook_store::{ProgressSnapshot, SectionDomain};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Currency {
    None,
    Gold,
    Gems,
}

impl LedgerKey for Currency {
    fn code(self) -> i32 {
        match self {
            Currency::None => 0,
            Currency::Gold => 1,
            Currency::Gems => 2,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Currency::None),
            1 => Some(Currency::Gold),
            2 => Some(Currency::Gems),
            _ => None,
        }
    }

    fn members() -> &'static [Self] {
        &[Currency::None, Currency::Gold, Currency::Gems]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Resource {
    None,
    Wood,
}

impl LedgerKey for Resource {
    fn code(self) -> i32 {
        match self {
            Resource::None => 0,
            Resource::Wood => 1,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Resource::None),
            1 => Some(Resource::Wood),
            _ => None,
        }
    }

    fn members() -> &'static [Self] {
        &[Resource::None, Resource::Wood]
    }
}

#[tokio::test]
async fn smoke_test_full_lifecycle() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("saves").join("progress.json");

    // 1. Fresh profile: no snapshot on disk yet
    assert!(ProgressSnapshot::load_from(&path).unwrap().is_none());
    let mut snapshot = ProgressSnapshot::new();

    // 2. Currencies start from default balances, resources from nothing
    let currency_domain = SectionDomain::<Currency>::with_defaults(
        "currencies",
        vec![SavedEntry::new(Currency::Gold.code(), 100)],
    );
    let mut currencies = KeyedLedger::new(currency_domain);
    let mut resources = KeyedLedger::new(SectionDomain::<Resource>::new("resources"));

    currencies.load_progress(&snapshot).await;
    resources.load_progress(&snapshot).await;

    assert_eq!(currencies.amount(Currency::Gold), 100, "default balance");
    assert_eq!(currencies.amount(Currency::Gems), 0);
    assert_eq!(resources.amount(Resource::Wood), 0);
    assert!(!currencies.is_changed());

    // 3. Play: earn and spend
    let mut changes = currencies.subscribe();
    currencies.add_amount(Currency::Gold, 50);
    currencies.set_amount(Currency::Gems, 3);
    resources.add_amount(Resource::Wood, 12);

    assert!(currencies.is_changed());
    assert!(resources.is_changed());
    let first = changes.try_recv().unwrap();
    assert_eq!((first.old_value, first.new_value), (100, 150));

    // 4. Save both ledgers into the snapshot and write it out
    currencies.save_progress(&mut snapshot);
    resources.save_progress(&mut snapshot);
    assert!(!currencies.is_changed());
    assert!(!resources.is_changed());

    snapshot.save_to(&path).unwrap();
    assert!(path.exists());

    // 5. Relaunch: reload from disk into fresh ledgers
    let reloaded = ProgressSnapshot::load_from(&path)
        .unwrap()
        .expect("snapshot written in step 4");

    let mut currencies2 = KeyedLedger::new(SectionDomain::<Currency>::new("currencies"));
    let mut resources2 = KeyedLedger::new(SectionDomain::<Resource>::new("resources"));
    currencies2.load_progress(&reloaded).await;
    resources2.load_progress(&reloaded).await;

    assert_eq!(currencies2.amount(Currency::Gold), 150);
    assert_eq!(currencies2.amount(Currency::Gems), 3);
    assert_eq!(resources2.amount(Resource::Wood), 12);
    assert!(!currencies2.is_changed());
    assert!(!resources2.is_changed());

    // 6. A stale code in the file must not break loading
    let mut tampered = reloaded.clone();
    let mut entries = tampered.section("currencies").unwrap().to_vec();
    entries.push(SavedEntry::new(77, 9000));
    tampered.set_section("currencies", entries);

    let mut currencies3 = KeyedLedger::new(SectionDomain::<Currency>::new("currencies"));
    currencies3.load_progress(&tampered).await;
    assert_eq!(currencies3.amount(Currency::Gold), 150);
    assert_eq!(currencies3.available_types().count(), 2, "no entry for code 77");
}
