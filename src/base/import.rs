//! Bulk import of loosely-typed records.
//!
//! The payload is an untrusted JSON array; every field of every element is
//! treated as optional and substituted with an explicit default. The whole
//! operation either applies or aborts: a malformed payload is a typed error,
//! a malformed field never is.

use crate::base::Book;
use crate::base::Categories;
use crate::base::Cents;
use crate::base::Date;
use crate::base::Transaction;
use crate::base::TxnKind;

/// A record as it arrives from an import payload. Unknown fields (including
/// incoming `id` and `type` values) are ignored: ids are always reassigned
/// and the kind is forced to the caller-selected value.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawTxn {
    pub category: Option<String>,
    pub amount: Option<serde_json::Value>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of records")]
    NotAnArray,
}

/// Parses an import payload. Anything other than a JSON array of objects
/// aborts the import.
pub fn parse(payload: &str) -> Result<Vec<RawTxn>, ParseError> {
    let value = serde_json::from_str::<serde_json::Value>(payload)?;
    if !value.is_array() {
        return Err(ParseError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

impl RawTxn {
    /// Normalizes one loose record into a transaction:
    /// - the given fresh id;
    /// - the caller-selected kind;
    /// - missing or blank category becomes [`Categories::DEFAULT_LABEL`];
    /// - missing or unparseable date becomes today;
    /// - missing description becomes empty;
    /// - amount is coerced to its absolute value, or 0 if unparseable.
    pub fn normalize(self, id: crate::base::TxnId, kind: TxnKind) -> Transaction {
        let category = match self.category {
            Some(c) if !c.trim().is_empty() => c,
            _ => Categories::DEFAULT_LABEL.to_string(),
        };
        let date = self
            .date
            .as_deref()
            .and_then(|s| s.parse::<Date>().ok())
            .unwrap_or_else(Date::today);
        let amount = coerce_amount(self.amount.as_ref());
        let description = self.description.unwrap_or_default();
        Transaction::with_id(id, kind, category, amount, date, description)
    }
}

fn coerce_amount(value: Option<&serde_json::Value>) -> Cents {
    let cents = match value {
        Some(serde_json::Value::Number(n)) => {
            n.as_f64().map(Cents::from_units).unwrap_or_default()
        }
        Some(serde_json::Value::String(s)) => s.parse::<Cents>().unwrap_or_default(),
        _ => Cents::ZERO,
    };
    cents.abs()
}

/// Applies a parsed import batch: all records of `kind` are replaced by the
/// normalized batch, other records are untouched. Returns the number of
/// imported transactions.
pub fn apply(book: &mut Book, kind: TxnKind, raws: Vec<RawTxn>) -> usize {
    book.replace_kind(kind, Vec::new());
    let count = raws.len();
    for raw in raws {
        let id = book.fresh_id();
        let txn = raw.normalize(id, kind);
        book.insert(txn);
    }
    count
}
