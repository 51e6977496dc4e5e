use crate::base;
use crate::cli;

/// One command-line invocation and the expectation on its result.
pub struct Invocation<'a> {
    /// Argv for the invocation. The leading element stands in for the binary
    /// name and is never inspected, so it can be empty.
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

/// A scripted sequence of invocations against one repository directory,
/// where the commands are allowed to mutate it.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Repository file contents before the first invocation.
    pub initial_state: cli::testing::StrState<'a>,

    /// Expected repository contents after the last invocation.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    /// Seeds a tempdir from `initial_state`, runs every invocation in order
    /// checking each result, then asserts the directory deserializes to
    /// `final_state`.
    pub fn run(self) {
        let td = tempfile::TempDir::new().unwrap();
        let fs = base::Fs::new(td.path());
        self.initial_state.to_fs(&fs);

        for inv in self.invocations {
            let root = match <cli::Root as clap::Parser>::try_parse_from(inv.args) {
                Ok(cmd) => cmd,
                Err(e) => panic!("{}", e),
            };
            let res = root.run(&fs);
            inv.res.assert_matches(res);
        }

        let got_final_state = cli::testing::State::from_fs(&fs);
        assert_eq!(got_final_state, self.final_state);
    }
}

/// Like [`MutCase`], for invocations that must leave the repository
/// untouched.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    /// Runs as a [`MutCase`] whose final state is the initial state.
    pub fn run(self) {
        let tc = MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        };
        tc.run()
    }
}

/// Generates test functions from test cases.
///
/// Accepts one or more tuples of the form `(testcase_name: ident, testcase:
/// Case|MutCase)`. Creates a submodule named `cmd_testcases` in the caller's
/// module, and then for each test case tuple, creates a corresponding function
/// named `testcase_name`.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
