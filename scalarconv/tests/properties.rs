//! Property checks for the conversion rules, run against the library and the
//! `convert` binary.

mod common;

use common::{TestResult, thrown_impossible};
use num_bigint::BigInt;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestCaseResult, TestRunner};
use std::str::FromStr;

const INT_MAX: &str = "2147483647";
const INT_MIN_MAGNITUDE: &str = "2147483648";
const FLOAT_MAX: &str = "340282346638528859811704183484516925440";
const DOUBLE_MAX: &str = "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368";

fn big(text: &str) -> BigInt {
    BigInt::from_str(text).unwrap()
}

/// A fixed-point literal split into sign, integral magnitude and whether any
/// fractional digit is non-zero.
#[derive(Debug, Clone)]
struct FixedPoint {
    negative: bool,
    whole: BigInt,
    has_fraction: bool,
}

impl FixedPoint {
    fn parse(text: &str) -> Self {
        let text = text.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, text),
        };
        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        Self {
            negative,
            whole: big(whole),
            has_fraction: fraction.bytes().any(|b| b != b'0'),
        }
    }

    /// Check whether the magnitude is strictly above `bound`.
    fn exceeds(&self, bound: &BigInt) -> bool {
        self.whole > *bound || (self.whole == *bound && self.has_fraction)
    }

    fn outside(&self, min_magnitude: &BigInt, max: &BigInt) -> bool {
        if self.negative {
            self.exceeds(min_magnitude)
        } else {
            self.exceeds(max)
        }
    }

    /// Integral part with its sign, as `int()` would compute it.
    fn trunc(&self) -> BigInt {
        if self.negative {
            -self.whole.clone()
        } else {
            self.whole.clone()
        }
    }
}

fn check_report(value: &FixedPoint, out: &str) -> TestCaseResult {
    let trunc = value.trunc();
    if trunc < BigInt::from(0) || trunc > BigInt::from(255) {
        prop_assert!(thrown_impossible("char", out), "{out}");
    }
    let in_char_range = !value.negative && !value.exceeds(&BigInt::from(255));
    let displayable = value.whole >= BigInt::from(32) && !value.exceeds(&BigInt::from(127));
    if in_char_range && !displayable {
        prop_assert!(out.contains("char: Non displayable"), "{out}");
    }
    if value.outside(&big(INT_MIN_MAGNITUDE), &big(INT_MAX)) {
        prop_assert!(thrown_impossible("int", out), "{out}");
    }
    if value.outside(&big(FLOAT_MAX), &big(FLOAT_MAX)) {
        prop_assert!(thrown_impossible("float", out), "{out}");
    } else {
        prop_assert!(!thrown_impossible("float", out), "{out}");
    }
    if value.outside(&big(DOUBLE_MAX), &big(DOUBLE_MAX)) {
        prop_assert!(thrown_impossible("double", out), "{out}");
    } else {
        prop_assert!(!thrown_impossible("double", out), "{out}");
    }
    prop_assert_eq!(out.lines().count(), 4);
    Ok(())
}

fn integers() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        (-300i32..600).prop_map(|n| n.to_string()),
        any::<i128>().prop_map(|n| n.to_string()),
        "-?[1-9][0-9]{0,330}",
    ]
}

/// Fixed-point literals with ten fractional digits, padded to 200 columns.
fn fixed_points() -> impl Strategy<Value = String> {
    let whole = prop_oneof![
        "[0-9]{1,3}",
        "[0-9]{1,12}",
        "[0-9]{1,40}",
        "[0-9]{300,310}",
    ];
    (any::<bool>(), whole, "[0-9]{10}")
        .prop_map(|(negative, whole, fraction)| {
            let sign = if negative { "-" } else { "" };
            format!("{:>200}", format!("{sign}{whole}.{fraction}"))
        })
}

#[test]
fn test_handle_int() {
    TestRunner::new(Config::with_source_file(file!()))
        .run(&integers(), |text| {
            let out = scalarconv::convert(&text).unwrap().to_string();
            let value = FixedPoint::parse(&text);
            check_report(&value, &out)?;
            if !value.outside(&big(INT_MIN_MAGNITUDE), &big(INT_MAX)) {
                prop_assert!(out.contains(&format!("int: {}\n", value.trunc())), "{out}");
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_handle_float() {
    TestRunner::new(Config::with_source_file(file!()))
        .run(&fixed_points(), |text| {
            let out = scalarconv::convert(&text).unwrap().to_string();
            let value = FixedPoint::parse(&text);
            check_report(&value, &out)?;
            if value.has_fraction {
                prop_assert!(thrown_impossible("int", &out), "{out}");
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_conversion_is_idempotent() {
    TestRunner::new(Config::with_source_file(file!()))
        .run(&prop_oneof![integers(), fixed_points()], |text| {
            let first = scalarconv::convert(&text).unwrap().to_string();
            let second = scalarconv::convert(&text).unwrap().to_string();
            prop_assert_eq!(first, second);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_binary_matches_library() {
    let config = Config {
        cases: 32,
        ..Config::with_source_file(file!())
    };
    TestRunner::new(config)
        .run(&prop_oneof![integers(), fixed_points()], |text| {
            let expected = scalarconv::convert(&text).unwrap().to_string();
            prop_assert_eq!(common::run_convert(&text), TestResult::Output(expected));
            Ok(())
        })
        .unwrap();
}
