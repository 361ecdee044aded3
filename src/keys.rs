// ABOUTME: The game's concrete ledger key enums: currencies and resources.
// ABOUTME: Each implements LedgerKey with code 0 reserved for the None member.

use tallybook_core::LedgerKey;

/// A ledger key with stable human-readable names, for CLI display and input.
pub trait NamedKey: LedgerKey {
    fn name(self) -> &'static str;
    fn parse(name: &str) -> Option<Self>;
}

/// Soft and hard currencies tracked in the "currencies" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyKind {
    None,
    Gold,
    Gems,
    Energy,
}

impl LedgerKey for CurrencyKind {
    fn code(self) -> i32 {
        match self {
            CurrencyKind::None => 0,
            CurrencyKind::Gold => 1,
            CurrencyKind::Gems => 2,
            CurrencyKind::Energy => 3,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CurrencyKind::None),
            1 => Some(CurrencyKind::Gold),
            2 => Some(CurrencyKind::Gems),
            3 => Some(CurrencyKind::Energy),
            _ => None,
        }
    }

    fn members() -> &'static [Self] {
        &[
            CurrencyKind::None,
            CurrencyKind::Gold,
            CurrencyKind::Gems,
            CurrencyKind::Energy,
        ]
    }
}

impl NamedKey for CurrencyKind {
    fn name(self) -> &'static str {
        match self {
            CurrencyKind::None => "none",
            CurrencyKind::Gold => "gold",
            CurrencyKind::Gems => "gems",
            CurrencyKind::Energy => "energy",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|key| key.name() == name)
    }
}

/// Gathered resources tracked in the "resources" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    None,
    Wood,
    Stone,
    Metal,
}

impl LedgerKey for ResourceKind {
    fn code(self) -> i32 {
        match self {
            ResourceKind::None => 0,
            ResourceKind::Wood => 1,
            ResourceKind::Stone => 2,
            ResourceKind::Metal => 3,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ResourceKind::None),
            1 => Some(ResourceKind::Wood),
            2 => Some(ResourceKind::Stone),
            3 => Some(ResourceKind::Metal),
            _ => None,
        }
    }

    fn members() -> &'static [Self] {
        &[
            ResourceKind::None,
            ResourceKind::Wood,
            ResourceKind::Stone,
            ResourceKind::Metal,
        ]
    }
}

impl NamedKey for ResourceKind {
    fn name(self) -> &'static str {
        match self {
            ResourceKind::None => "none",
            ResourceKind::Wood => "wood",
            ResourceKind::Stone => "stone",
            ResourceKind::Metal => "metal",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|key| key.name() == name)
    }
}
