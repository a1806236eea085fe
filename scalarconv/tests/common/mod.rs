//! Common test utilities and macros

use std::process::Command;

#[derive(Debug)]
pub enum TestResult {
    /// Successful run with the exact standard output
    Output(String),
    /// Successful run whose standard output matches the pattern
    OutputRegex(String),
    /// Failed run with the exact standard error
    Error(String),
    ErrorRegex(String),
}

impl PartialEq for TestResult {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TestResult::Output(a), TestResult::Output(b)) => a == b,
            (TestResult::Error(a), TestResult::Error(b)) => a == b,
            (TestResult::OutputRegex(pattern), TestResult::Output(out))
            | (TestResult::Output(out), TestResult::OutputRegex(pattern))
            | (TestResult::ErrorRegex(pattern), TestResult::Error(out))
            | (TestResult::Error(out), TestResult::ErrorRegex(pattern)) => {
                regex::Regex::new(pattern).unwrap().is_match(out)
            }
            _ => false,
        }
    }
}

/// Run the `convert` binary on a single literal.
pub fn run_convert(literal: &str) -> TestResult {
    let output = Command::new(env!("CARGO_BIN_EXE_convert"))
        .arg(literal)
        .env_remove("CONVERT_LOG")
        .output()
        .expect("failed to launch convert");

    if output.status.success() {
        TestResult::Output(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        TestResult::Error(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

/// Check whether `<name>: impossible` appears in the output.
#[allow(dead_code)]
pub fn thrown_impossible(name: &str, out: &str) -> bool {
    out.contains(&format!("{name}: impossible"))
}

#[macro_export]
macro_rules! check_convert {
    ($test_name:ident, input=$input:expr, result=$expected:expr) => {
        #[test]
        fn $test_name() {
            let result = crate::common::run_convert($input);
            assert_eq!(result, $expected);
        }
    };
}
