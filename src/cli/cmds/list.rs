use crate::base;
use crate::cli;

/// List transactions
#[derive(clap::Parser)]
pub struct List {
    #[command(flatten)]
    view_opts: cli::sharedopts::ViewOpts,
}

impl List {
    pub fn run(self, book: base::Book, config: &base::Config) -> anyhow::Result<cli::Output> {
        let txns = self.view_opts.project(book.as_slice(), config);
        Ok(cli::Output::Table(base::table::Config {
            charset: cli::sharedopts::charset_from_config(config),
            txns,
        }))
    }
}
