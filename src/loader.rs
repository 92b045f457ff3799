use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::transaction::Transaction;

/// Reads the initial batch of records from `path`. `.csv` files go
/// through the CSV reader; anything else is treated as a JSON array.
/// A single malformed record aborts the whole load.
pub fn load(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let transactions = match path.extension().and_then(OsStr::to_str) {
        Some("csv") => from_csv(reader),
        _ => from_json(reader),
    }
    .with_context(|| format!("reading transactions from {}", path.display()))?;
    Ok(transactions)
}

fn from_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    serde_json::from_reader(reader).map_err(Into::into)
}

fn from_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<csv::Result<Vec<Transaction>>>()
        .map_err(Into::into)
}
