use crate::base;
use crate::cli::Output;
use crate::cli::testing::state::txns_eq_ignoring_ids;

/// Expectation on a command's `anyhow::Result<Output>`.
pub enum ResultMatcher<'a> {
    /// The result is `Ok` with exactly this payload.
    OkExact(Output),

    /// The result is an `Ok(Output::Table(_))` whose charset and transactions
    /// match the given config, ignoring transaction ids. Use this for
    /// commands that mint fresh ids.
    OkTableIgnoringIds(base::table::Config),

    /// The result is an `Ok(Output::Str(_))` matching this glob pattern,
    /// case-insensitively.
    OkStrGlob(&'a str),

    /// The result is `Err` and the error's `to_string()` matches this glob
    /// pattern, case-insensitively.
    ErrGlob(&'a str),
}

fn glob(pattern: &str, s: &str) -> bool {
    wildmatch::WildMatch::new(pattern.to_lowercase().as_str()).matches(s.to_lowercase().as_str())
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<Output>) {
        match self {
            ResultMatcher::OkExact(want_output) => {
                if let Ok(got_output) = &result {
                    if got_output == want_output {
                        return;
                    }
                    text_diff::print_diff(
                        format!("{:?}", want_output).as_str(),
                        format!("{:?}", got_output).as_str(),
                        " ",
                    );
                    panic!("diff between want (red) and got (green), see above");
                }
                panic!("\n\twant: {:?}\n\tgot: {:?}\n", want_output, result);
            }
            ResultMatcher::OkTableIgnoringIds(want_config) => {
                let matches = matches!(
                    result,
                    Ok(Output::Table(ref got_config))
                        if got_config.charset == want_config.charset
                            && txns_eq_ignoring_ids(&got_config.txns, &want_config.txns),
                );
                assert!(
                    matches,
                    "\n\twant (ids ignored): {:?}\n\tgot: {:?}\n",
                    want_config, result
                );
            }
            ResultMatcher::OkStrGlob(pattern) => {
                let matches = matches!(
                    result,
                    Ok(Output::Str(ref got_string)) if glob(pattern, got_string),
                );
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
            ResultMatcher::ErrGlob(pattern) => {
                let matches = matches!(
                    result,
                    Err(ref got_err) if glob(pattern, got_err.to_string().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
        }
    }
}
