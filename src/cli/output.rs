use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Table(base::table::Config),
    Stats(base::summary::Config),
    Chart(base::chart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(config) => {
                if config.txns.is_empty() {
                    writeln!(f, "No transactions.")
                } else {
                    write!(f, "{}", config.to_table())
                }
            }
            Output::Stats(config) => write!(f, "{}", config.to_summary()),
            Output::Chart(config) => {
                if config.stats.expense_by_category.is_empty() {
                    writeln!(f, "No expenses.")
                } else {
                    write!(f, "{}", config.to_chart())
                }
            }
        }
    }
}
