//! `roster` — command-line front end for the roster record store.
//!
//! # Usage
//!
//! ```
//! roster add "Ana Paula" XYZ0001 --manager "Carlos Souza"
//! roster list --identifier XYZ0001
//! roster stats --json
//! roster clear --force
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use roster_core::{
  RawEntry, Record, RecordCollection, RegisterError,
  query::RecordFilter,
  record::timestamp_format,
  register,
  store::RecordStore as _,
};
use roster_store_csv::CsvStore;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "roster", about = "Register and browse personnel records")]
struct Args {
  /// Path of the CSV data file.
  #[arg(long, env = "ROSTER_FILE", default_value = "roster.csv")]
  data_file: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Register a new person.
  Add {
    /// Full name — letters and spaces only.
    full_name:  String,
    /// Employee identifier — 3 uppercase letters + 4 digits, e.g. ABC1234.
    identifier: String,
    /// Name of the responsible manager (optional).
    #[arg(long, default_value = "")]
    manager:    String,
  },

  /// List records, optionally filtered. Repeat a flag to allow several
  /// values for that field; all three constraints combine with AND.
  List {
    #[arg(long = "name", value_name = "FULL_NAME")]
    names:       Vec<String>,
    #[arg(long = "identifier", value_name = "IDENTIFIER")]
    identifiers: Vec<String>,
    #[arg(long = "manager", value_name = "MANAGER")]
    managers:    Vec<String>,
    /// Emit JSON instead of a table.
    #[arg(long)]
    json:        bool,
  },

  /// Show summary statistics.
  Stats {
    #[arg(long)]
    json: bool,
  },

  /// Delete every record. All-or-nothing; there is no per-record delete.
  Clear {
    /// Required confirmation flag.
    #[arg(long)]
    force: bool,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let store = CsvStore::new(&args.data_file);

  match args.command {
    Command::Add { full_name, identifier, manager } => {
      cmd_add(&store, RawEntry {
        full_name,
        identifier,
        manager_name: manager,
      })
    }
    Command::List { names, identifiers, managers, json } => {
      cmd_list(&store, RecordFilter { names, identifiers, managers }, json)
    }
    Command::Stats { json } => cmd_stats(&store, json),
    Command::Clear { force } => cmd_clear(&store, force),
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

fn cmd_add(store: &CsvStore, entry: RawEntry) -> Result<()> {
  let mut collection = load(store)?;

  match register(store, &mut collection, &entry) {
    Ok(record) => {
      info!(identifier = %record.identifier, "record registered");
      println!("registered {} ({})", record.full_name, record.identifier);
      Ok(())
    }
    Err(RegisterError::Validation(reasons)) => {
      for reason in &reasons {
        eprintln!("{}: {}", reason.field(), reason);
      }
      bail!("registration rejected: {} invalid field(s)", reasons.len());
    }
    Err(RegisterError::Storage(e)) => {
      Err(e).context("saving the roster file")
    }
  }
}

fn cmd_list(store: &CsvStore, filter: RecordFilter, json: bool) -> Result<()> {
  let collection = load(store)?;
  let view = collection.filtered(&filter);
  debug!(
    total = collection.len(),
    shown = view.len(),
    unconstrained = filter.is_unconstrained(),
    "filter applied"
  );

  if json {
    println!("{}", serde_json::to_string_pretty(view.records())?);
  } else {
    print_table(view.records());
  }
  Ok(())
}

fn cmd_stats(store: &CsvStore, json: bool) -> Result<()> {
  let stats = load(store)?.stats();

  if json {
    println!("{}", serde_json::to_string_pretty(&stats)?);
  } else {
    println!("total records:        {}", stats.total);
    println!("distinct identifiers: {}", stats.distinct_identifiers);
    println!("distinct managers:    {}", stats.distinct_managers);
    println!("latest registration:  {}", match stats.latest_registration {
      Some(ts) => ts.format(timestamp_format::FORMAT).to_string(),
      None => "unavailable".to_string(),
    });
  }
  Ok(())
}

fn cmd_clear(store: &CsvStore, force: bool) -> Result<()> {
  if !force {
    bail!("refusing to delete all records without --force");
  }
  store.clear().context("clearing the roster file")?;
  info!("roster cleared");
  println!("all records deleted");
  Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn load(store: &CsvStore) -> Result<RecordCollection> {
  let collection = store
    .load()
    .with_context(|| format!("loading {}", store.path().display()))?;
  debug!(records = collection.len(), "roster loaded");
  Ok(collection)
}

fn print_table(records: &[Record]) {
  if records.is_empty() {
    println!("no records");
    return;
  }

  let width = |header: &str, cell: fn(&Record) -> &str| {
    records
      .iter()
      .map(|r| cell(r).chars().count())
      .chain([header.len()])
      .max()
      .unwrap_or(0)
  };
  let name_w = width("full_name", |r| &r.full_name);
  let id_w = width("identifier", |r| &r.identifier);
  let manager_w = width("manager_name", |r| &r.manager_name);

  println!(
    "{:name_w$}  {:id_w$}  {:manager_w$}  registered_at",
    "full_name", "identifier", "manager_name",
  );
  for r in records {
    let ts = r
      .registered_at
      .map(|t| t.format(timestamp_format::FORMAT).to_string())
      .unwrap_or_default();
    println!(
      "{:name_w$}  {:id_w$}  {:manager_w$}  {}",
      r.full_name, r.identifier, r.manager_name, ts,
    );
  }
}
