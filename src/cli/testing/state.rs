use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// Compares two transactions on everything but the id. Ids are drawn from a
/// random source, so expectations cannot pin them.
fn txn_key(t: &base::Transaction) -> (base::TxnKind, &str, base::Cents, base::Date, &str) {
    (t.kind(), t.category(), t.amount(), t.date(), t.description())
}

pub(crate) fn txns_eq_ignoring_ids(a: &[base::Transaction], b: &[base::Transaction]) -> bool {
    a.len() == b.len() && std::iter::zip(a, b).all(|(x, y)| txn_key(x) == txn_key(y))
}

/// The expected or actual objects deserialized from a repo directory. Unset
/// fields correspond to nonexistent files. Transaction ids are ignored in
/// comparisons.
#[derive(Debug, Default)]
pub struct State {
    config: Option<base::Config>,
    book: Option<base::Book>,
    categories: Option<base::Categories>,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        let books_eq = match (&self.book, &other.book) {
            (Some(a), Some(b)) => txns_eq_ignoring_ids(a.as_slice(), b.as_slice()),
            (None, None) => true,
            _ => false,
        };
        self.config == other.config && books_eq && self.categories == other.categories
    }
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::Book`]: income transactions first, then expenses,
    /// in file order.
    pub fn with_book<T>(mut self, book: T) -> Self
    where
        T: TryInto<base::Book> + std::fmt::Debug,
        <T as TryInto<base::Book>>::Error: std::fmt::Debug,
    {
        self.book = Some(book.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::Categories`].
    pub fn with_categories<T>(mut self, categories: T) -> Self
    where
        T: TryInto<base::Categories> + std::fmt::Debug,
        <T as TryInto<base::Categories>>::Error: std::fmt::Debug,
    {
        self.categories = Some(categories.try_into().unwrap());
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = fs
            .path::<base::Config>()
            .exists()
            .then(|| fs.read::<base::Config>().unwrap());
        let book = (fs.income_path().exists() || fs.expenses_path().exists())
            .then(|| fs.read_book().unwrap());
        let categories = fs
            .path::<base::Categories>()
            .exists()
            .then(|| fs.read::<base::Categories>().unwrap());
        Self {
            config,
            book,
            categories,
        }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    income: Option<&'a str>,
    expenses: Option<&'a str>,
    categories: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the income half of the book's file contents.
    pub fn with_income(mut self, s: &'a str) -> Self {
        self.income = Some(s);
        self
    }

    /// Sets the expenses half of the book's file contents.
    pub fn with_expenses(mut self, s: &'a str) -> Self {
        self.expenses = Some(s);
        self
    }

    /// Sets repo's [`base::Categories`] file contents.
    pub fn with_categories(mut self, s: &'a str) -> Self {
        self.categories = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of its real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            s.parse::<base::Config>().unwrap();
            std::fs::write(fs.path::<base::Config>(), s).unwrap();
        }
        if let Some(s) = self.income {
            s.parse::<base::Book>().unwrap();
            std::fs::write(fs.income_path(), s).unwrap();
        }
        if let Some(s) = self.expenses {
            s.parse::<base::Book>().unwrap();
            std::fs::write(fs.expenses_path(), s).unwrap();
        }
        if let Some(s) = self.categories {
            s.parse::<base::Categories>().unwrap();
            std::fs::write(fs.path::<base::Categories>(), s).unwrap();
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if self.income.is_some() || self.expenses.is_some() {
            let mut txns = Vec::new();
            for s in [self.income, self.expenses].into_iter().flatten() {
                txns.extend(s.parse::<base::Book>().unwrap());
            }
            os = os.with_book(txns.into_iter().collect::<base::Book>());
        }
        if let Some(s) = self.categories {
            os = os.with_categories(s);
        }
        os
    }
}
