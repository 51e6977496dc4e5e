//! The display projection: an optional exact-match category filter followed
//! by a stable sort on a chosen field.

use crate::base::Transaction;

/// Field to sort the displayed transaction list by. String fields compare
/// lexicographically; `amount` compares numerically. Dates are `yyyy-mm-dd`
/// strings, so lexicographic and chronological order coincide.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Category,
    Description,
    Kind,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

/// Produces the ordered, filtered sequence to display. Never mutates the
/// input.
///
/// The sort is stable, and `Desc` is defined as the exact reversal of the
/// `Asc` result, so equal-key runs have a deterministic order in both
/// directions.
pub fn project(
    txns: &[Transaction],
    key: SortKey,
    dir: SortDir,
    category: Option<&str>,
) -> Vec<Transaction> {
    let mut out = txns
        .iter()
        .filter(|t| category.is_none_or(|c| t.category() == c))
        .cloned()
        .collect::<Vec<_>>();
    out.sort_by(|a, b| match key {
        SortKey::Date => a.date().cmp(&b.date()),
        SortKey::Amount => a.amount().cmp(&b.amount()),
        SortKey::Category => a.category().cmp(b.category()),
        SortKey::Description => a.description().cmp(b.description()),
        SortKey::Kind => a.kind().label().cmp(b.kind().label()),
    });
    if dir == SortDir::Desc {
        out.reverse();
    }
    out
}
