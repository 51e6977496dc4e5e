use anyhow::Context;

use crate::base;
use crate::cli;

/// Export transactions as a JSON array
///
/// The array uses the same record format the data files and 'import' use,
/// and honors the listing projection, so a filtered export can be re-imported
/// as-is.
#[derive(clap::Parser)]
pub struct Export {
    #[command(flatten)]
    view_opts: cli::sharedopts::ViewOpts,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<std::path::PathBuf>,
}

impl Export {
    pub fn run(self, book: base::Book, config: &base::Config) -> anyhow::Result<cli::Output> {
        let txns = self.view_opts.project(book.as_slice(), config);
        let count = txns.len();
        let json = txns.into_iter().collect::<base::Book>().to_string();

        Ok(match self.output {
            Some(path) => {
                std::fs::write(&path, &json)
                    .with_context(|| format!("failed to write '{}'", path.display()))?;
                cli::Output::Str(format!(
                    "Exported {} transaction(s) to '{}'.",
                    count,
                    path.display()
                ))
            }
            None => cli::Output::Str(json),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing;

    const EXPENSES: &str = r#"[
        {"id":"e1","type":"EXPENSE","category":"Rent","amount":"800.00","date":"2024-01-01"},
        {"id":"e2","type":"EXPENSE","category":"Groceries","amount":"50.00","date":"2024-01-03"}
    ]"#;

    #[test]
    fn test_stdout_payload_reimports_cleanly() {
        let (fs, _td) = testing::tempfs();
        testing::StrState::new()
            .with_config("{}")
            .with_expenses(EXPENSES)
            .to_fs(&fs);

        let root = <cli::Root as clap::Parser>::try_parse_from(["", "export"]).unwrap();
        let got = root.run(&fs).unwrap().to_string();

        // Default projection is date desc.
        let book = got.parse::<base::Book>().unwrap();
        let ids = book.iter().map(|t| t.id().str()).collect::<Vec<_>>();
        assert_eq!(ids, ["e2", "e1"]);
        assert!(base::import::parse(&got).is_ok());
    }

    #[test]
    fn test_category_filter_applies() {
        let (fs, _td) = testing::tempfs();
        testing::StrState::new()
            .with_config("{}")
            .with_expenses(EXPENSES)
            .to_fs(&fs);

        let args = ["", "export", "--category", "Rent"];
        let root = <cli::Root as clap::Parser>::try_parse_from(args).unwrap();
        let got = root.run(&fs).unwrap().to_string();
        let book = got.parse::<base::Book>().unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.iter().next().unwrap().category(), "Rent");
    }

    #[test]
    fn test_output_file() {
        let (fs, td) = testing::tempfs();
        testing::StrState::new()
            .with_config("{}")
            .with_expenses(EXPENSES)
            .to_fs(&fs);
        let path = td.path().join("out.json");

        let args = ["", "export", "--output", path.to_str().unwrap()];
        let root = <cli::Root as clap::Parser>::try_parse_from(args).unwrap();
        let output = root.run(&fs).unwrap().to_string();
        assert!(output.starts_with("Exported 2 transaction(s) to"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.parse::<base::Book>().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_book_exports_an_empty_array() {
        let (fs, _td) = testing::tempfs();
        testing::StrState::new().with_config("{}").to_fs(&fs);

        let root = <cli::Root as clap::Parser>::try_parse_from(["", "export"]).unwrap();
        let got = root.run(&fs).unwrap().to_string();
        assert_eq!(got.trim(), "[]");
    }
}
