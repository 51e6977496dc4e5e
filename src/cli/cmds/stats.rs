use crate::base;
use crate::cli;

/// View totals and the expense breakdown by category
#[derive(clap::Parser)]
pub struct Stats {}

impl Stats {
    pub fn run(self, book: base::Book, config: &base::Config) -> anyhow::Result<cli::Output> {
        Ok(cli::Output::Stats(base::summary::Config {
            charset: cli::sharedopts::charset_from_config(config),
            stats: base::Stats::compute(book.as_slice()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cli::testing::generate_testcases![
        (
            empty_book,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "stats"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Stats(
                        base::summary::Config {
                            charset: Default::default(),
                            stats: base::Stats::default(),
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
            }
        ),
        (
            normal_execution,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "stats"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Stats(
                        base::summary::Config {
                            charset: Default::default(),
                            stats: base::Stats::compute(
                                &r#"[
                                    {"id":"i1","type":"INCOME","category":"Salary","amount":"1000.00","date":"2024-01-01"},
                                    {"id":"e1","type":"EXPENSE","category":"Groceries","amount":"250.00","date":"2024-01-02"}
                                ]"#
                                .parse::<base::Book>()
                                .unwrap()
                                .into_iter()
                                .collect::<Vec<_>>()
                            ),
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_income(
                        r#"[{"id":"i1","type":"INCOME","category":"Salary","amount":"1000.00","date":"2024-01-01"}]"#
                    )
                    .with_expenses(
                        r#"[{"id":"e1","type":"EXPENSE","category":"Groceries","amount":"250.00","date":"2024-01-02"}]"#
                    ),
            }
        ),
    ];
}
