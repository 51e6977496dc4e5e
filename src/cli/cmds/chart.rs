use crate::base;
use crate::cli;

/// Plot the expense breakdown as a bar chart
#[derive(clap::Parser)]
pub struct Chart {}

impl Chart {
    pub fn run(self, book: base::Book, config: &base::Config) -> anyhow::Result<cli::Output> {
        Ok(cli::Output::Chart(base::chart::Config {
            charset: cli::sharedopts::charset_from_config(config),
            term_width: terminal_size::terminal_size()
                .map(|(w, _)| w.0)
                .unwrap_or_default() as usize,
            stats: base::Stats::compute(book.as_slice()),
        }))
    }
}
