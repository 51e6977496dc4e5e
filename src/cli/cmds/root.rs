use anyhow::Context;

use crate::base;
use crate::cli;

/// Personal finance tracker
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Add(cli::cmds::add::Add),
    Edit(cli::cmds::edit::Edit),
    Rm(cli::cmds::rm::Rm),
    List(cli::cmds::list::List),
    Stats(cli::cmds::stats::Stats),
    Chart(cli::cmds::chart::Chart),
    Cats(cli::cmds::cats::Cats),
    Import(cli::cmds::import::Import),
    Export(cli::cmds::export::Export),
    Insight(cli::cmds::insight::Insight),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let book = fs
            .read_book()
            .with_context(|| format!("failed to read transactions in '{}'", fs.dir().display()))?;
        let categories = fs.read::<base::Categories>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Categories>().display()
            )
        })?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Add(cmd) => cmd.run(book, categories, &config, fs),
            Commands::Edit(cmd) => cmd.run(book, categories, &config, fs),
            Commands::Rm(cmd) => cmd.run(book, &config, fs),
            Commands::List(cmd) => cmd.run(book, &config),
            Commands::Stats(cmd) => cmd.run(book, &config),
            Commands::Chart(cmd) => cmd.run(book, &config),
            Commands::Cats(cmd) => cmd.run(book, categories, fs),
            Commands::Import(cmd) => cmd.run(book, categories, fs),
            Commands::Export(cmd) => cmd.run(book, &config),
            Commands::Insight(cmd) => cmd.run(book),
        }
    }
}
