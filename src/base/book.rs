use crate::base::Transaction;
use crate::base::TxnId;
use crate::base::TxnKind;

/// The canonical transaction list. Storage order is insertion order; no view
/// is sorted unless it asks to be (see [`crate::base::view`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book(Vec<Transaction>);

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.0.iter()
    }

    pub fn of_kind(&self, kind: TxnKind) -> impl Iterator<Item = &Transaction> {
        self.iter().filter(move |t| t.kind() == kind)
    }

    fn index_of(&self, id: &TxnId) -> Option<usize> {
        self.0.iter().position(|t| t.id() == id)
    }

    pub fn get(&self, id: &TxnId) -> Option<&Transaction> {
        self.index_of(id).map(|i| &self.0[i])
    }

    /// Draws an id that is not in use by any transaction in this book.
    pub fn fresh_id(&self) -> TxnId {
        loop {
            let id = TxnId::fresh();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    pub fn insert(&mut self, txn: Transaction) {
        self.0.push(txn);
    }

    /// Replaces the transaction with `txn`'s id wholesale, keeping its
    /// position. Returns the previous transaction, or `None` (leaving the
    /// book unmodified) if the id is unknown.
    pub fn replace(&mut self, txn: Transaction) -> Option<Transaction> {
        let i = self.index_of(txn.id())?;
        Some(std::mem::replace(&mut self.0[i], txn))
    }

    /// Removes and returns the transaction with the given id, or `None` if the
    /// id is unknown.
    pub fn remove(&mut self, id: &TxnId) -> Option<Transaction> {
        let i = self.index_of(id)?;
        Some(self.0.remove(i))
    }

    /// Substitutes all records of `kind` with `txns`, leaving the other
    /// kind's records (and their relative order) untouched. This is the bulk
    /// import semantics.
    pub fn replace_kind(&mut self, kind: TxnKind, txns: Vec<Transaction>) {
        self.0.retain(|t| t.kind() != kind);
        self.0.extend(txns);
    }

    /// Relabels every transaction whose category equals `from` (exact match).
    pub fn reassign_category(&mut self, from: &str, to: &str) -> usize {
        let mut count = 0;
        for t in self.0.iter_mut().filter(|t| t.category() == from) {
            t.set_category(to);
            count += 1;
        }
        count
    }
}

impl IntoIterator for Book {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Transaction> for Book {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Transaction> for Book {
    fn from_iter<T: IntoIterator<Item = &'a Transaction>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Book {
    /// Renders the JSON-array form used in the data files. Writes a
    /// terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(&self.0).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid transaction array")]
pub struct ParseError(#[from] serde_json::Error);

impl std::str::FromStr for Book {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(serde_json::from_str::<Vec<Transaction>>(s)?))
    }
}

impl TryFrom<&str> for Book {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
