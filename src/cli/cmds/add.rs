use anyhow::Context;

use crate::base;
use crate::cli;

/// Record a new transaction
#[derive(clap::Parser)]
pub struct Add {
    /// Whether the transaction is income or an expense
    kind: base::TxnKind,

    /// Transaction amount; the sign is ignored, the kind carries it
    #[arg(allow_negative_numbers = true)]
    amount: base::Cents,

    /// Transaction category, case-sensitive
    ///
    /// New labels are added to the managed category set automatically.
    category: String,

    /// Transaction date [default: today]
    date: Option<base::Date>,

    /// Optional free-form note
    #[arg(short, long, default_value_t, hide_default_value = true)]
    description: String,
}

impl Add {
    pub fn run(
        self,
        mut book: base::Book,
        mut categories: base::Categories,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let txn = base::Transaction::with_id(
            book.fresh_id(),
            self.kind,
            self.category,
            self.amount.abs(),
            self.date.unwrap_or_else(base::Date::today),
            self.description,
        );
        book.insert(txn.clone());
        categories.reconcile(&book);

        fs.write_book(&book)
            .with_context(|| format!("failed to write transactions in '{}'", fs.dir().display()))?;
        fs.write(&categories).with_context(|| {
            format!(
                "failed to write '{}'",
                fs.path::<base::Categories>().display()
            )
        })?;

        Ok(cli::Output::Table(base::table::Config {
            charset: cli::sharedopts::charset_from_config(config),
            txns: vec![txn],
        }))
    }
}
