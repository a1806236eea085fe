//! Range classification for the four target types.
//!
//! Every conversion is computed from the canonical [`Scalar`] alone, so the
//! result for one target never depends on another.

use crate::error::ParseLiteralError;
use crate::literal::{LiteralKind, parse_literal};
use crate::value::{Scalar, Special};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use std::sync::LazyLock;
use tracing::trace;

/// Smallest and largest byte accepted as a char.
pub const CHAR_MIN: u8 = 0;
pub const CHAR_MAX: u8 = 255;

/// Half-open window of characters that are printed as-is.
pub const DISPLAYABLE: std::ops::Range<u8> = 32..127;

static CHAR_BOUNDS: LazyLock<(BigInt, BigInt)> =
    LazyLock::new(|| (BigInt::from(CHAR_MIN), BigInt::from(CHAR_MAX)));

static INT_BOUNDS: LazyLock<(BigInt, BigInt)> =
    LazyLock::new(|| (BigInt::from(i32::MIN), BigInt::from(i32::MAX)));

/// `±f32::MAX`, i.e. ±340282346638528859811704183484516925440.
static FLOAT_BOUNDS: LazyLock<(BigInt, BigInt)> =
    LazyLock::new(|| symmetric_bound(f64::from(f32::MAX)));

/// `±f64::MAX`, the 309 digit integer 17976931348623157...858368.
static DOUBLE_BOUNDS: LazyLock<(BigInt, BigInt)> = LazyLock::new(|| symmetric_bound(f64::MAX));

fn symmetric_bound(max: f64) -> (BigInt, BigInt) {
    let max = BigInt::from_f64(max).unwrap_or_default();
    (-max.clone(), max)
}

/// Outcome of converting the canonical value into one target type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion<T> {
    Representable(T),
    /// Fits the target but has no printable form. Only produced for chars.
    NonDisplayable(T),
    Impossible,
}

/// The four conversions of a single literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: LiteralKind,
    pub char: Conversion<char>,
    pub int: Conversion<i32>,
    pub float: Conversion<f32>,
    pub double: Conversion<f64>,
}

impl Report {
    /// Derive every conversion from one canonical value.
    pub fn new(kind: LiteralKind, value: &Scalar) -> Self {
        let report = Self {
            kind,
            char: to_char(value),
            int: to_int(value),
            float: to_float(value),
            double: to_double(value),
        };
        trace!("Converted {}: {:?}", value, report);
        report
    }
}

/// Parse `input` and convert it to every target type.
///
/// # Errors
/// Returns [`ParseLiteralError`] when `input` is not a valid literal. Values
/// that merely do not fit a target are reported as [`Conversion::Impossible`].
///
/// # Examples
/// ```
/// use scalarconv::{Conversion, convert};
///
/// let report = convert("42").unwrap();
/// assert_eq!(report.char, Conversion::Representable('*'));
/// assert_eq!(report.int, Conversion::Representable(42));
///
/// let report = convert("-3.4").unwrap();
/// assert_eq!(report.int, Conversion::Impossible);
/// assert_eq!(report.float, Conversion::Representable(-3.4));
/// ```
pub fn convert(input: &str) -> Result<Report, ParseLiteralError> {
    let literal = parse_literal(input)?;
    Ok(Report::new(literal.kind, &literal.value))
}

/// Convert to a char using the integral part of the value.
pub fn to_char(value: &Scalar) -> Conversion<char> {
    let Scalar::Finite(decimal) = value else {
        return Conversion::Impossible;
    };
    let (min, max) = &*CHAR_BOUNDS;
    let Some(code) = decimal
        .trunc()
        .filter(|whole| min <= whole && whole <= max)
        .and_then(|whole| whole.to_u8())
    else {
        return Conversion::Impossible;
    };

    if DISPLAYABLE.contains(&code) {
        Conversion::Representable(char::from(code))
    } else {
        Conversion::NonDisplayable(char::from(code))
    }
}

/// Convert to a 32-bit signed integer. Values with a fractional part are
/// never representable.
pub fn to_int(value: &Scalar) -> Conversion<i32> {
    let Scalar::Finite(decimal) = value else {
        return Conversion::Impossible;
    };
    if !decimal.is_integral() {
        return Conversion::Impossible;
    }
    let (min, max) = &*INT_BOUNDS;
    if !decimal.within(min, max) {
        return Conversion::Impossible;
    }
    decimal
        .trunc()
        .and_then(|whole| whole.to_i32())
        .map_or(Conversion::Impossible, Conversion::Representable)
}

pub fn to_float(value: &Scalar) -> Conversion<f32> {
    match value {
        Scalar::Special(special) => Conversion::Representable(special_value(*special) as f32),
        Scalar::Finite(decimal) => {
            let (min, max) = &*FLOAT_BOUNDS;
            if !decimal.within(min, max) {
                return Conversion::Impossible;
            }
            decimal
                .narrow::<f32>()
                .map_or(Conversion::Impossible, Conversion::Representable)
        }
    }
}

pub fn to_double(value: &Scalar) -> Conversion<f64> {
    match value {
        Scalar::Special(special) => Conversion::Representable(special_value(*special)),
        Scalar::Finite(decimal) => {
            let (min, max) = &*DOUBLE_BOUNDS;
            if !decimal.within(min, max) {
                return Conversion::Impossible;
            }
            decimal
                .narrow::<f64>()
                .map_or(Conversion::Impossible, Conversion::Representable)
        }
    }
}

fn special_value(special: Special) -> f64 {
    match special {
        Special::Nan => f64::NAN,
        Special::Infinity { negative: true } => f64::NEG_INFINITY,
        Special::Infinity { negative: false } => f64::INFINITY,
    }
}
