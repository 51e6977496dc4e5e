use anyhow::Context;

use crate::base;
use crate::cli;

/// Remove a transaction
///
/// The transaction's category label stays in the managed set even if no
/// other transaction references it.
#[derive(clap::Parser)]
pub struct Rm {
    /// Id of the transaction to remove
    id: base::TxnId,
}

impl Rm {
    pub fn run(
        self,
        mut book: base::Book,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let Some(removed) = book.remove(&self.id) else {
            anyhow::bail!("nonexistent transaction")
        };
        fs.write_book(&book)
            .with_context(|| format!("failed to write transactions in '{}'", fs.dir().display()))?;

        Ok(cli::Output::Table(base::table::Config {
            charset: cli::sharedopts::charset_from_config(config),
            txns: vec![removed],
        }))
    }
}
