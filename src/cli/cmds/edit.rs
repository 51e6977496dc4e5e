use anyhow::Context;

use crate::base;
use crate::cli;

/// Edit an existing transaction
///
/// The transaction's kind is fixed at creation and cannot be changed.
#[derive(clap::Parser)]
#[command(group(
    clap::ArgGroup::new("fields")
        .required(true)
        .multiple(true)
        .args(["category", "amount", "date", "description"]),
))]
pub struct Edit {
    /// Id of the transaction to edit
    id: base::TxnId,

    /// New category, case-sensitive
    #[arg(short, long)]
    category: Option<String>,

    /// New amount; the sign is ignored, the kind carries it
    #[arg(short, long, allow_negative_numbers = true)]
    amount: Option<base::Cents>,

    /// New date
    #[arg(long)]
    date: Option<base::Date>,

    /// New free-form note
    #[arg(short, long)]
    description: Option<String>,
}

impl Edit {
    pub fn run(
        self,
        mut book: base::Book,
        mut categories: base::Categories,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let Some(old) = book.get(&self.id) else {
            anyhow::bail!("nonexistent transaction")
        };
        let txn = base::Transaction::with_id(
            self.id,
            old.kind(),
            self.category.unwrap_or_else(|| old.category().to_string()),
            self.amount.map_or(old.amount(), base::Cents::abs),
            self.date.unwrap_or(old.date()),
            self.description
                .unwrap_or_else(|| old.description().to_string()),
        );
        book.replace(txn.clone())
            .expect("transaction was just looked up");
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
