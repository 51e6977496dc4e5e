pub mod book;
pub mod categories;
pub mod cents;
pub mod charset;
pub mod chart;
pub mod config;
pub mod date;
pub mod fs;
pub mod import;
pub mod insight;
pub mod kind;
pub mod stats;
pub mod summary;
pub mod table;
pub mod txn;
pub mod view;

pub use book::Book;
pub use categories::Categories;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use fs::Fs;
pub use kind::TxnKind;
pub use stats::CategorySummary;
pub use stats::Stats;
pub use txn::Transaction;
pub use txn::TxnId;
