use std::fmt;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// The two primary transaction categories, plus lossless passthrough for
/// any other tag present in the data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Debit,
    Credit,
    Other(String),
}

impl TransactionKind {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Debit => "debit",
            TransactionKind::Credit => "credit",
            TransactionKind::Other(tag) => tag,
        }
    }
}

impl From<String> for TransactionKind {
    fn from(tag: String) -> TransactionKind {
        match tag.as_str() {
            "debit" => TransactionKind::Debit,
            "credit" => TransactionKind::Credit,
            _ => TransactionKind::Other(tag),
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(tag: &str) -> TransactionKind {
        TransactionKind::from(tag.to_string())
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransactionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D>(deserializer: D) -> Result<TransactionKind, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(TransactionKind::from)
    }
}

/// A single financial record. Field names on the wire follow the
/// upstream export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transaction_id")]
    pub id: String,
    /// Calendar date as `YYYY-MM-DD`; fixed-width, so lexicographic
    /// order is chronological order.
    #[serde(rename = "transaction_date")]
    pub date: String,
    #[serde(rename = "transaction_amount")]
    pub amount: Decimal,
    #[serde(rename = "transaction_type")]
    pub kind: TransactionKind,
    #[serde(rename = "transaction_description")]
    pub description: String,
    #[serde(rename = "merchant_name")]
    pub merchant: String,
    pub card_type: String,
}

impl Transaction {
    /// The `YYYY-MM` grouping key of this transaction's date.
    pub fn month_key(&self) -> &str {
        self.date.get(..7).unwrap_or(self.date.as_str())
    }

    /// Canonical JSON rendering of a single record.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A record as supplied to `TransactionStore::append`: everything but the
/// id, which the store mints.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "transaction_date")]
    pub date: String,
    #[serde(rename = "transaction_amount")]
    pub amount: Decimal,
    #[serde(rename = "transaction_type")]
    pub kind: TransactionKind,
    #[serde(rename = "transaction_description")]
    pub description: String,
    #[serde(rename = "merchant_name")]
    pub merchant: String,
    pub card_type: String,
}

impl TransactionDraft {
    pub fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            description: self.description,
            merchant: self.merchant,
            card_type: self.card_type,
        }
    }
}
