use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rust_decimal::prelude::*;
use serde::Serialize;
use tracing::{debug, error};

use txanalyzer::{load, DominantKind, TransactionStore};

#[derive(Parser)]
#[clap(version, about = "Summarizes a transaction export")]
struct Opts {
    /// Path to a .json or .csv transaction export
    file: PathBuf,
}

#[derive(Debug, Serialize)]
struct Summary {
    count: usize,
    total_amount: Decimal,
    total_debit_amount: Decimal,
    average_amount: Option<Decimal>,
    unique_kinds: Vec<String>,
    dominant_kind: DominantKind,
    most_active_month: Option<String>,
    most_active_debit_month: Option<String>,
}

fn run() -> Result<()> {
    let opts: Opts = Opts::parse();

    let transactions = load(&opts.file)?;
    debug!(count = transactions.len(), "Loaded transactions");

    let store = TransactionStore::new(transactions);
    let mut unique_kinds: Vec<String> = store
        .unique_kinds()
        .into_iter()
        .map(|kind| kind.to_string())
        .collect();
    unique_kinds.sort();

    // aggregates that are undefined on an empty store render as nulls
    let summary = Summary {
        count: store.len(),
        total_amount: store.total_amount(),
        total_debit_amount: store.total_debit_amount(),
        average_amount: store.average_amount().ok(),
        unique_kinds,
        dominant_kind: store.dominant_kind(),
        most_active_month: store.most_active_month().ok().map(str::to_owned),
        most_active_debit_month: store.most_active_debit_month().ok().map(str::to_owned),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        error!(error = e.to_string(), "Something went wrong")
    }
}
