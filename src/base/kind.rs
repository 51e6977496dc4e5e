/// Whether a transaction adds to or subtracts from the balance. Fixed at
/// creation; amounts are stored unsigned and the kind carries the sign.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
pub enum TxnKind {
    #[serde(rename = "INCOME")]
    #[strum(serialize = "income")]
    Income,
    #[serde(rename = "EXPENSE")]
    #[strum(serialize = "expense")]
    Expense,
}

impl TxnKind {
    /// The canonical wire label, also used as the lexicographic sort key for
    /// the `type` column.
    pub const fn label(self) -> &'static str {
        match self {
            TxnKind::Income => "INCOME",
            TxnKind::Expense => "EXPENSE",
        }
    }
}
