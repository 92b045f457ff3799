use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;

use rust_decimal::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::transaction::{Transaction, TransactionDraft, TransactionKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no transactions to operate on")]
    Empty,
    #[error("transaction id {0:?} is not numeric")]
    NonNumericId(String),
}

/// Which of the two primary kinds occurs more often in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantKind {
    Debit,
    Credit,
    Equal,
}

impl fmt::Display for DominantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DominantKind::Debit => "debit",
            DominantKind::Credit => "credit",
            DominantKind::Equal => "equal",
        })
    }
}

/// An ordered in-memory collection of transactions and the queries over
/// it. Queries never mutate the collection; `append` is the only writer,
/// and iteration order is always insertion order.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Adopts an already-parsed batch as the initial collection.
    pub fn new(transactions: Vec<Transaction>) -> TransactionStore {
        TransactionStore { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Appends one new transaction, minting its id from the physically
    /// last element's id plus one. Note the id comes from the last
    /// element, not the numeric maximum: an id-unsorted collection can
    /// mint an id that is already taken.
    pub fn append(&mut self, draft: TransactionDraft) -> Result<String, StoreError> {
        let last = self.transactions.last().ok_or(StoreError::Empty)?;
        let prev: u64 = last
            .id
            .parse()
            .map_err(|_| StoreError::NonNumericId(last.id.clone()))?;
        let id = (prev + 1).to_string();
        self.transactions.push(draft.into_transaction(id.clone()));
        Ok(id)
    }

    pub fn get_all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn unique_kinds(&self) -> HashSet<&TransactionKind> {
        self.transactions.iter().map(|t| &t.kind).collect()
    }

    pub fn total_amount(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Sums the amounts of transactions whose date matches every supplied
    /// component; a `None` component matches anything.
    pub fn total_amount_by_date(
        &self,
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| {
                let mut parts = t.date.splitn(3, '-');
                let y = parts.next().unwrap_or("");
                let m = parts.next().unwrap_or("");
                let d = parts.next().unwrap_or("");
                year.map_or(true, |want| want == y)
                    && month.map_or(true, |want| want == m)
                    && day.map_or(true, |want| want == d)
            })
            .map(|t| t.amount)
            .sum()
    }

    pub fn by_kind(&self, kind: &TransactionKind) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| &t.kind == kind)
            .collect()
    }

    /// Transactions with `start <= date <= end`. A reversed range yields
    /// an empty result, not an error.
    pub fn in_date_range(&self, start: &str, end: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.date.as_str() >= start && t.date.as_str() <= end)
            .collect()
    }

    pub fn by_merchant(&self, name: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.merchant == name)
            .collect()
    }

    pub fn average_amount(&self) -> Result<Decimal, StoreError> {
        if self.transactions.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(self.total_amount() / Decimal::from(self.transactions.len()))
    }

    /// Transactions with `min <= amount <= max`. A reversed range yields
    /// an empty result, not an error.
    pub fn by_amount_range(&self, min: Decimal, max: Decimal) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.amount >= min && t.amount <= max)
            .collect()
    }

    pub fn total_debit_amount(&self) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Debit)
            .map(|t| t.amount)
            .sum()
    }

    /// The `YYYY-MM` period with the most transactions. Ties go to the
    /// month seen first in collection order.
    pub fn most_active_month(&self) -> Result<&str, StoreError> {
        busiest_month(self.transactions.iter().map(Transaction::month_key)).ok_or(StoreError::Empty)
    }

    /// Like `most_active_month`, restricted to debit transactions.
    pub fn most_active_debit_month(&self) -> Result<&str, StoreError> {
        busiest_month(
            self.transactions
                .iter()
                .filter(|t| t.kind == TransactionKind::Debit)
                .map(Transaction::month_key),
        )
        .ok_or(StoreError::Empty)
    }

    /// Compares debit and credit counts; any other kind is left out of
    /// the comparison.
    pub fn dominant_kind(&self) -> DominantKind {
        let mut debits = 0usize;
        let mut credits = 0usize;
        for t in &self.transactions {
            match t.kind {
                TransactionKind::Debit => debits += 1,
                TransactionKind::Credit => credits += 1,
                TransactionKind::Other(_) => {}
            }
        }
        match debits.cmp(&credits) {
            Ordering::Greater => DominantKind::Debit,
            Ordering::Less => DominantKind::Credit,
            Ordering::Equal => DominantKind::Equal,
        }
    }

    /// Transactions dated on or before the given date.
    pub fn before_date(&self, date: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.date.as_str() <= date)
            .collect()
    }

    /// First transaction with a matching id, in collection order.
    pub fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Every description in collection order, duplicates retained.
    pub fn descriptions(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect()
    }
}

/// Month with the highest count; ties go to the month seen first.
fn busiest_month<'a>(months: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for month in months {
        let count = counts.entry(month).or_insert(0);
        if *count == 0 {
            first_seen.push(month);
        }
        *count += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for month in first_seen {
        let count = counts[month];
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((month, count));
        }
    }
    best.map(|(month, _)| month)
}
