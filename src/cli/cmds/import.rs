use anyhow::Context;

use crate::base;
use crate::cli;

/// Bulk-import transactions of one kind from a JSON file
///
/// Replaces all existing transactions of KIND with the imported batch;
/// transactions of the other kind are untouched. Records are normalized
/// field by field: a missing category becomes 'Uncategorized', an
/// unparseable amount becomes 0, an unparseable date becomes today. A
/// payload that is not a JSON array aborts the import with no changes.
#[derive(clap::Parser)]
pub struct Import {
    /// Which side of the book to replace
    kind: base::TxnKind,

    /// Path to the JSON payload
    file: std::path::PathBuf,
}

impl Import {
    pub fn run(
        self,
        mut book: base::Book,
        mut categories: base::Categories,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let payload = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read '{}'", self.file.display()))?;
        let raws = base::import::parse(&payload)
            .with_context(|| format!("failed to import '{}'", self.file.display()))?;
        let count = base::import::apply(&mut book, self.kind, raws);
        categories.reconcile(&book);

        fs.write_book(&book)
            .with_context(|| format!("failed to write transactions in '{}'", fs.dir().display()))?;
        fs.write(&categories).with_context(|| {
            format!(
                "failed to write '{}'",
                fs.path::<base::Categories>().display()
            )
        })?;

        Ok(cli::Output::Str(format!(
            "Imported {} {} transaction(s).",
            count, self.kind,
        )))
    }
}
