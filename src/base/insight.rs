//! Natural-language spending summaries.
//!
//! The actual text generation is an external collaborator behind [`Source`];
//! this module owns the payload it is allowed to see, the fallback when it
//! fails, and the staleness guard for responses that arrive after a newer
//! request was issued.

use crate::base::Cents;
use crate::base::Date;
use crate::base::Stats;
use crate::base::Transaction;
use crate::base::TxnKind;

/// Shown verbatim whenever generation fails, instead of propagating the
/// error.
pub const FALLBACK: &str = "Unable to generate insights right now. Please try again later.";

/// At most this many transactions are disclosed to a source.
pub const DIGEST_LIMIT: usize = 50;

/// The subset of a transaction a source is allowed to see. Ids and free-text
/// descriptions are withheld.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TxnDigest {
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub amount: Cents,
    pub category: String,
    pub date: Date,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insight backend unavailable")]
    Unavailable,
    #[error("insight backend error: {0}")]
    Backend(String),
}

/// An opaque text generator: digests in, free-form prose out. The returned
/// text is neither validated nor parsed.
pub trait Source {
    fn generate(&self, digests: &[TxnDigest]) -> Result<String, Error>;
}

pub fn digest(txns: &[Transaction]) -> Vec<TxnDigest> {
    txns.iter()
        .take(DIGEST_LIMIT)
        .map(|t| TxnDigest {
            kind: t.kind(),
            amount: t.amount(),
            category: t.category().to_string(),
            date: t.date(),
        })
        .collect()
}

/// Runs a source over the first [`DIGEST_LIMIT`] transactions, converting
/// any failure into [`FALLBACK`].
pub fn run<S: Source>(source: &S, txns: &[Transaction]) -> String {
    match source.generate(&digest(txns)) {
        Ok(text) => text,
        Err(_) => FALLBACK.to_string(),
    }
}

/// A token identifying one insight request.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(u64);

/// Guards against stale responses: a response is only accepted if no newer
/// request has been issued since its token was drawn. Synchronous commands
/// have no need for it; a source answering out of band does.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct Session {
    latest: u64,
}

#[allow(dead_code)]
impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Token {
        self.latest += 1;
        Token(self.latest)
    }

    pub fn accept(&self, token: Token, text: String) -> Option<String> {
        (token.0 == self.latest).then_some(text)
    }
}

/// A deterministic offline source: summarizes the top spending category and
/// the direction of the net balance from the digests alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSource;

impl Source for LocalSource {
    fn generate(&self, digests: &[TxnDigest]) -> Result<String, Error> {
        if digests.is_empty() {
            return Ok(
                "No transactions recorded yet. Add some income and expenses to see spending \
                 insights."
                    .to_string(),
            );
        }

        // Reuse the aggregator's grouping rules by lifting digests back into
        // bare transactions.
        let txns = digests
            .iter()
            .map(|d| {
                Transaction::with_id(
                    "digest".into(),
                    d.kind,
                    d.category.clone(),
                    d.amount,
                    d.date,
                    String::new(),
                )
            })
            .collect::<Vec<_>>();
        let stats = Stats::compute(&txns);

        let mut text = String::new();
        match stats.expense_by_category.first() {
            Some(top) if stats.total_expenses > Cents::ZERO => {
                let share = (top.value.0 as f64) / (stats.total_expenses.0 as f64) * 100.0;
                text.push_str(&format!(
                    "Your largest spending category is {} at {} ({:.0}% of expenses).",
                    top.name, top.value, share
                ));
            }
            _ => text.push_str("You have no expenses on record."),
        }
        if stats.balance.is_negative() {
            text.push_str(&format!(
                " You are spending more than you earn; the net balance is {}.",
                stats.balance
            ));
        } else {
            text.push_str(&format!(
                " Income covers your spending with {} to spare.",
                stats.balance
            ));
        }
        Ok(text)
    }
}
