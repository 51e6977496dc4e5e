use crate::base::Cents;
use crate::base::Date;
use crate::base::TxnKind;

/// Opaque unique transaction identifier, assigned at creation and never
/// reassigned.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TxnId(String);

impl TxnId {
    /// Draws a fresh id: the first 8 hex characters of a v4 uuid. Uniqueness
    /// against an existing set is the caller's responsibility (see
    /// [`crate::base::Book::fresh_id`]).
    pub fn fresh() -> Self {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        Self(hex[..8].to_string())
    }

    pub fn str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TxnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TxnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One financial record. `amount` is always non-negative; the display layer
/// derives the sign from `kind`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    id: TxnId,
    #[serde(rename = "type")]
    kind: TxnKind,
    category: String,
    amount: Cents,
    date: Date,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    description: String,
}

impl Transaction {
    pub fn with_id(
        id: TxnId,
        kind: TxnKind,
        category: String,
        amount: Cents,
        date: Date,
        description: String,
    ) -> Self {
        Self {
            id,
            kind,
            category,
            amount,
            date,
            description,
        }
    }

    pub fn id(&self) -> &TxnId {
        &self.id
    }

    pub fn kind(&self) -> TxnKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Categories are mutable labels; this is the reassignment hook used when
    /// a category is deleted from the managed set.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn amount(&self) -> Cents {
        self.amount
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
