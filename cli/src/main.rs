//! Footprint command-line front end.
//!
//! Drives the same entry form a UI would: every flag becomes one field edit,
//! applied in category, item, unit, quantity, notes order.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use footprint_engine::{
    Catalog, CategoryKey, EmissionLogEntry, EntryForm, EntryLog, FieldEdit, ItemKey, OwnerId,
    Settings, SubmitError, UnitKey, Validator,
};

#[derive(Parser)]
#[command(name = "footprint")]
#[command(about = "Estimate and log household CO2e emissions")]
struct Cli {
    /// Config file to use instead of $FOOTPRINT_CONFIG or ~/.footprint/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List emission categories
    Categories,
    /// List the items of a category
    Items {
        category: CategoryKey,
    },
    /// List the units of a category with their CO2e factors
    Units {
        category: CategoryKey,
    },
    /// Show the CO2e estimate for a category, unit, and quantity
    Preview {
        #[arg(long)]
        category: CategoryKey,
        #[arg(long)]
        unit: String,
        #[arg(long)]
        quantity: f64,
    },
    /// Build an emission log entry and print it as JSON
    Log {
        #[arg(long)]
        category: CategoryKey,
        #[arg(long)]
        item: String,
        #[arg(long)]
        unit: String,
        #[arg(long)]
        quantity: f64,
        #[arg(long)]
        notes: Option<String>,
        /// Owner id; defaults to the configured placeholder
        #[arg(long)]
        owner: Option<String>,
    },
    /// Total previously logged entries by category
    Summary {
        /// File of entries as printed by `log`, one after another
        entries: PathBuf,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    // stdout carries command output only.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let settings = footprint_config::load_settings(cli.config.as_deref())?;
    let catalog = Catalog::builtin();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Categories => list_categories(catalog, &mut out)?,
        Commands::Items { category } => list_items(catalog, category, &mut out)?,
        Commands::Units { category } => list_units(catalog, category, &mut out)?,
        Commands::Preview {
            category,
            unit,
            quantity,
        } => preview(catalog, &settings, category, unit, quantity, &mut out)?,
        Commands::Log {
            category,
            item,
            unit,
            quantity,
            notes,
            owner,
        } => {
            let edits = LogArgs {
                category,
                item,
                unit,
                quantity,
                notes,
            };
            return log_entry(catalog, &settings, edits, owner, &mut out);
        }
        Commands::Summary { entries } => summarize(catalog, &entries, &mut out)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn list_categories(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for category in catalog.categories() {
        writeln!(out, "{}\t{}", category.key(), category.label())?;
    }
    Ok(())
}

fn list_items(catalog: &Catalog, category: CategoryKey, out: &mut impl Write) -> Result<()> {
    for item in catalog.items_for(category)? {
        writeln!(out, "{}\t{}", item.key(), item.label())?;
    }
    Ok(())
}

fn list_units(catalog: &Catalog, category: CategoryKey, out: &mut impl Write) -> Result<()> {
    for unit in catalog.units_for(category)? {
        writeln!(
            out,
            "{}\t{}\t{} kg CO₂e per unit",
            unit.key(),
            unit.label(),
            unit.co2e_factor()
        )?;
    }
    Ok(())
}

fn preview(
    catalog: &Catalog,
    settings: &Settings,
    category: CategoryKey,
    unit: String,
    quantity: f64,
    out: &mut impl Write,
) -> Result<()> {
    let mut form = EntryForm::new(catalog, Validator::from_settings(settings));
    for edit in [
        FieldEdit::Category(category),
        FieldEdit::Unit(UnitKey::from(unit)),
        FieldEdit::Quantity(quantity),
    ] {
        form.apply(edit)?;
    }

    match form.preview() {
        Some(co2e) => writeln!(out, "{co2e}")?,
        None => writeln!(out, "no estimate yet")?,
    }
    Ok(())
}

struct LogArgs {
    category: CategoryKey,
    item: String,
    unit: String,
    quantity: f64,
    notes: Option<String>,
}

impl LogArgs {
    fn into_edits(self) -> Vec<FieldEdit> {
        let mut edits = vec![
            FieldEdit::Category(self.category),
            FieldEdit::Item(ItemKey::from(self.item)),
            FieldEdit::Unit(UnitKey::from(self.unit)),
            FieldEdit::Quantity(self.quantity),
        ];
        if let Some(notes) = self.notes {
            edits.push(FieldEdit::Notes(notes));
        }
        edits
    }
}

fn log_entry(
    catalog: &Catalog,
    settings: &Settings,
    args: LogArgs,
    owner: Option<String>,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let owner = owner
        .map(OwnerId::new)
        .transpose()
        .context("--owner must not be empty")?;
    let owner = settings.owner_or_default(owner);

    let mut form = EntryForm::new(catalog, Validator::from_settings(settings));
    for edit in args.into_edits() {
        form.apply(edit)?;
    }

    match form.submit(&owner) {
        Ok(entry) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&entry)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(SubmitError::Invalid(errors)) => {
            let mut err = io::stderr().lock();
            for error in &errors {
                writeln!(err, "{}: {error}", error.field())?;
            }
            Ok(ExitCode::FAILURE)
        }
        Err(other) => Err(other.into()),
    }
}

fn summarize(catalog: &Catalog, path: &Path, out: &mut impl Write) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read entries from {}", path.display()))?;

    let mut log = EntryLog::new();
    for entry in serde_json::Deserializer::from_str(&content).into_iter::<EmissionLogEntry>() {
        log.record(entry.with_context(|| format!("malformed entry in {}", path.display()))?);
    }
    tracing::debug!(entries = log.len(), "entries loaded for summary");

    for row in log.totals_by_category(catalog) {
        writeln!(out, "{}\t{}\t{}\t{}", row.category, row.label, row.entries, row.co2e)?;
    }
    writeln!(out, "total\t\t{}\t{}", log.len(), log.total())?;
    Ok(())
}
