use anyhow::Context;

use crate::base;
use crate::cli;

/// View or edit the managed category set
#[derive(clap::Parser)]
pub struct Cats {
    /// Add a label to the set
    #[arg(long, value_name = "LABEL")]
    add: Option<String>,

    /// Delete a label; its transactions are reassigned to 'Uncategorized'
    #[arg(long, value_name = "LABEL", conflicts_with = "add")]
    rm: Option<String>,
}

impl Cats {
    pub fn run(
        self,
        mut book: base::Book,
        mut categories: base::Categories,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        if let Some(label) = self.add {
            if !categories.add(label.clone()) {
                anyhow::bail!("category already exists")
            }
            write_categories(&categories, fs)?;
            return Ok(cli::Output::Str(format!("Added category '{}'.", label)));
        }

        if let Some(label) = self.rm {
            let Some(reassigned) = categories.remove(&label, &mut book) else {
                anyhow::bail!("nonexistent category")
            };
            if reassigned > 0 {
                fs.write_book(&book).with_context(|| {
                    format!("failed to write transactions in '{}'", fs.dir().display())
                })?;
            }
            write_categories(&categories, fs)?;
            return Ok(cli::Output::Str(format!(
                "Deleted category '{}'; {} transaction(s) reassigned to '{}'.",
                label,
                reassigned,
                base::Categories::DEFAULT_LABEL,
            )));
        }

        // The set can trail the book if its file was edited by hand; fold in
        // observed labels before listing.
        categories.reconcile(&book);
        Ok(if categories.is_empty() {
            cli::Output::Str("No categories.".to_string())
        } else {
            cli::Output::Str(categories.iter().collect::<Vec<_>>().join("\n"))
        })
    }
}

fn write_categories(categories: &base::Categories, fs: &base::Fs) -> anyhow::Result<()> {
    fs.write(categories).with_context(|| {
        format!(
            "failed to write '{}'",
            fs.path::<base::Categories>().display()
        )
    })
}
