// ABOUTME: Entry point for the tallybook binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and inspects or edits a progress snapshot.

mod keys;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tallybook_core::KeyedLedger;
use tallybook_store::{ProgressSnapshot, SectionDomain};

use crate::keys::{CurrencyKind, NamedKey, ResourceKind};

const CURRENCIES: &str = "currencies";
const RESOURCES: &str = "resources";

#[derive(Parser)]
#[command(name = "tallybook", about = "Inspect and edit progress snapshot files")]
struct Cli {
    /// Path to the progress snapshot file.
    #[arg(long, default_value = "progress.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Print every tracked value in every known section.
    Show,
    /// Set a key to an exact value, e.g. `set currencies gold 250`.
    Set {
        section: String,
        key: String,
        value: i64,
    },
    /// Add a (possibly negative) delta to a key, e.g. `add resources wood 5`.
    Add {
        section: String,
        key: String,
        delta: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tallybook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let mut snapshot = ProgressSnapshot::load_from(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?
        .unwrap_or_else(|| {
            tracing::info!("no snapshot at {}, starting fresh", cli.file.display());
            ProgressSnapshot::new()
        });

    match cli.command {
        CliCommand::Show => {
            show_section::<CurrencyKind>(&snapshot, CURRENCIES).await;
            show_section::<ResourceKind>(&snapshot, RESOURCES).await;
        }
        CliCommand::Set {
            section,
            key,
            value,
        } => {
            edit(&mut snapshot, &section, &key, Edit::Set(value)).await?;
            snapshot
                .save_to(&cli.file)
                .with_context(|| format!("failed to write {}", cli.file.display()))?;
        }
        CliCommand::Add {
            section,
            key,
            delta,
        } => {
            edit(&mut snapshot, &section, &key, Edit::Add(delta)).await?;
            snapshot
                .save_to(&cli.file)
                .with_context(|| format!("failed to write {}", cli.file.display()))?;
        }
    }

    Ok(())
}

enum Edit {
    Set(i64),
    Add(i64),
}

/// Dispatch an edit to the key type that owns the named section.
async fn edit(
    snapshot: &mut ProgressSnapshot,
    section: &str,
    key: &str,
    edit: Edit,
) -> anyhow::Result<()> {
    match section {
        CURRENCIES => edit_section::<CurrencyKind>(snapshot, section, key, edit).await,
        RESOURCES => edit_section::<ResourceKind>(snapshot, section, key, edit).await,
        other => bail!("unknown section '{other}' (expected '{CURRENCIES}' or '{RESOURCES}')"),
    }
}

async fn edit_section<K: NamedKey>(
    snapshot: &mut ProgressSnapshot,
    section: &str,
    key_name: &str,
    edit: Edit,
) -> anyhow::Result<()> {
    let key = K::parse(key_name)
        .with_context(|| format!("unknown key '{key_name}' in section '{section}'"))?;

    let mut ledger = KeyedLedger::new(SectionDomain::<K>::new(section));
    ledger.load_progress(snapshot).await;

    match edit {
        Edit::Set(value) => ledger.set_amount(key, value),
        Edit::Add(delta) => ledger.add_amount(key, delta),
    }
    println!("{section}.{key_name} = {}", ledger.amount(key));

    ledger.save_progress(snapshot);
    Ok(())
}

async fn show_section<K: NamedKey>(snapshot: &ProgressSnapshot, section: &str) {
    let mut ledger = KeyedLedger::new(SectionDomain::<K>::new(section));
    ledger.load_progress(snapshot).await;

    for key in ledger.available_types().collect::<Vec<_>>() {
        println!("{section}.{} = {}", key.name(), ledger.amount(key));
    }
}
