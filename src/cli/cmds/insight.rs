use crate::base;
use crate::cli;

/// Generate a natural-language summary of recent activity
///
/// Only the first 50 transactions' kind, amount, category and date are
/// disclosed to the generator; ids and descriptions never leave the machine.
#[derive(clap::Parser)]
pub struct Insight {}

impl Insight {
    pub fn run(self, book: base::Book) -> anyhow::Result<cli::Output> {
        Ok(cli::Output::Str(base::insight::run(
            &base::insight::LocalSource,
            book.as_slice(),
        )))
    }
}
