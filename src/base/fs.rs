use crate::base::Book;
use crate::base::Categories;
use crate::base::Config;
use crate::base::Transaction;
use crate::base::TxnKind;

/// Application filesystem: a repository directory of flat JSON files. The
/// in-memory state is always the source of truth; every write replaces a
/// whole file.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from single files.
pub trait Serde: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Serde for Config {
    const FILENAME: &'static str = ".cashbook.json";
}
impl Serde for Categories {
    const FILENAME: &'static str = "categories.json";
}

/// The book spans two files, split by transaction kind (the desktop shell's
/// layout).
const INCOME_FILE: &str = "income.json";
const EXPENSES_FILE: &str = "expenses.json";

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path::<Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Serde,
    {
        self.dir.join(T::FILENAME)
    }

    pub fn income_path(&self) -> std::path::PathBuf {
        self.dir.join(INCOME_FILE)
    }

    pub fn expenses_path(&self) -> std::path::PathBuf {
        self.dir.join(EXPENSES_FILE)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns
    /// `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Serde,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(self.path::<T>()) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(T::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Serde,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }

    /// Reads the book from the split pair: income records first, then
    /// expenses. Relative order within each kind is the file order; a missing
    /// file contributes nothing.
    pub fn read_book(&self) -> Result<Book, ReadError> {
        let mut txns = self.read_txns(&self.income_path())?;
        txns.extend(self.read_txns(&self.expenses_path())?);
        Ok(txns.into_iter().collect())
    }

    fn read_txns(&self, path: &std::path::Path) -> Result<Vec<Transaction>, ReadError> {
        match std::fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(Vec::new()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    /// Writes both halves of the split pair.
    pub fn write_book(&self, book: &Book) -> std::io::Result<()> {
        self.write_txns(&self.income_path(), book.of_kind(TxnKind::Income))?;
        self.write_txns(&self.expenses_path(), book.of_kind(TxnKind::Expense))
    }

    fn write_txns<'a>(
        &self,
        path: &std::path::Path,
        txns: impl Iterator<Item = &'a Transaction>,
    ) -> std::io::Result<()> {
        let txns = txns.collect::<Vec<_>>();
        let mut s = serde_json::to_string_pretty(&txns).map_err(std::io::Error::other)?;
        s.push('\n');
        std::fs::write(path, s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
    // This box can be removed once specialization stabilizes.
}
