use crate::base::Book;

/// The managed category-label set backing selection in the UI shell. Kept
/// deduplicated and lexicographically sorted; may legitimately contain labels
/// no transaction references.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Categories(std::collections::BTreeSet<String>);

impl Categories {
    /// The sentinel label given to transactions that arrive without a
    /// category, or whose category is deleted from this set.
    pub const DEFAULT_LABEL: &'static str = "Uncategorized";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Iterates labels in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns false if the label was already present.
    pub fn add(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    /// Unions in every category label observed on the book's transactions.
    /// Runs after every book mutation so selection controls stay populated
    /// even when imported data introduces labels this set never saw.
    pub fn reconcile(&mut self, book: &Book) {
        for t in book.iter() {
            if !self.0.contains(t.category()) {
                self.0.insert(t.category().to_string());
            }
        }
    }

    /// Deletes `label` and reassigns every referencing transaction to
    /// [`Self::DEFAULT_LABEL`]. Returns the number of reassigned
    /// transactions, or `None` if the label was not in the set.
    pub fn remove(&mut self, label: &str, book: &mut Book) -> Option<usize> {
        if !self.0.remove(label) {
            return None;
        }
        let reassigned = book.reassign_category(label, Self::DEFAULT_LABEL);
        if reassigned > 0 {
            self.0.insert(Self::DEFAULT_LABEL.to_string());
        }
        Some(reassigned)
    }
}

impl FromIterator<String> for Categories {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Categories {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(&self.0).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Categories {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Categories {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
