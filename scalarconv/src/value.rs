use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Values with more integral digits than this are beyond every target bound.
const MAX_INTEGRAL_DIGITS: i64 = 512;

/// Non-finite floating point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    Nan,
    Infinity { negative: bool },
}

/// Exact decimal value of a literal.
///
/// The value is `digits * 10^-scale`. Trailing zeros are folded into the
/// scale, so a value has a fractional part if and only if `scale > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    negative: bool,
    /// Significant digits; zero for the value zero.
    digits: BigUint,
    /// Number of decimal digits in `digits`.
    len: i64,
    scale: i64,
}

/// Canonical value every target conversion is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Finite(Decimal),
    Special(Special),
}

impl Decimal {
    /// The value zero, keeping its sign for rendering purposes.
    pub fn zero(negative: bool) -> Self {
        Self {
            negative,
            digits: BigUint::zero(),
            len: 0,
            scale: 0,
        }
    }

    /// Build a decimal from already validated ASCII digit runs.
    ///
    /// # Arguments
    /// * `negative` - Whether the literal carried a minus sign
    /// * `int_digits` - Digits before the decimal point
    /// * `frac_digits` - Digits after the decimal point
    /// * `exponent` - Power of ten applied to the mantissa
    pub fn from_digits(negative: bool, int_digits: &str, frac_digits: &str, exponent: i64) -> Self {
        let mantissa: Vec<u8> = int_digits
            .bytes()
            .chain(frac_digits.bytes())
            .skip_while(|b| *b == b'0')
            .collect();
        let trailing = mantissa.iter().rev().take_while(|b| **b == b'0').count();
        let significant = &mantissa[..mantissa.len() - trailing];
        if significant.is_empty() {
            return Self::zero(negative);
        }

        debug_assert!(significant.iter().all(u8::is_ascii_digit));
        let raw: Vec<u8> = significant.iter().map(|b| b - b'0').collect();
        let digits = BigUint::from_radix_be(&raw, 10).unwrap_or_default();
        let scale = (frac_digits.len() as i64)
            .saturating_sub(exponent)
            .saturating_sub(trailing as i64);

        Self {
            negative,
            digits,
            len: significant.len() as i64,
            scale,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Check whether the value has no fractional part.
    pub fn is_integral(&self) -> bool {
        self.scale <= 0
    }

    fn integral_digits(&self) -> i64 {
        self.len.saturating_sub(self.scale)
    }

    /// Integral part of the value, rounded toward zero.
    ///
    /// Returns `None` when the value is too large for any bound to matter,
    /// which keeps literals such as `1e999999999` from being expanded.
    pub fn trunc(&self) -> Option<BigInt> {
        if self.integral_digits() > MAX_INTEGRAL_DIGITS {
            return None;
        }
        let ten = BigUint::from(10u32);
        let magnitude = if self.scale <= 0 {
            &self.digits * ten.pow(self.scale.unsigned_abs() as u32)
        } else if self.scale >= self.len {
            BigUint::zero()
        } else {
            &self.digits / ten.pow(self.scale as u32)
        };
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        Some(BigInt::from_biguint(sign, magnitude))
    }

    /// Exact comparison against an integer.
    pub fn cmp_integer(&self, other: &BigInt) -> Ordering {
        let beyond = if self.negative {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        match self.trunc() {
            None => beyond,
            Some(whole) => match whole.cmp(other) {
                Ordering::Equal if !self.is_integral() => beyond,
                ord => ord,
            },
        }
    }

    /// Check whether `min <= self <= max` holds exactly.
    pub fn within(&self, min: &BigInt, max: &BigInt) -> bool {
        self.cmp_integer(min) != Ordering::Less && self.cmp_integer(max) != Ordering::Greater
    }

    /// Round to the nearest value of a floating point type.
    pub fn narrow<F: FromStr>(&self) -> Option<F> {
        self.to_string().parse().ok()
    }
}

impl fmt::Display for Decimal {
    /// Scientific form accepted by the standard float parsers, e.g. `-34e-1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        if self.is_zero() {
            write!(f, "{sign}0")
        } else {
            write!(f, "{sign}{}e{}", self.digits, self.scale.saturating_neg())
        }
    }
}

impl From<u8> for Decimal {
    fn from(value: u8) -> Self {
        Self::from_digits(false, &value.to_string(), "", 0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Finite(decimal) => decimal.fmt(f),
            Scalar::Special(Special::Nan) => write!(f, "nan"),
            Scalar::Special(Special::Infinity { negative: true }) => write!(f, "-inf"),
            Scalar::Special(Special::Infinity { negative: false }) => write!(f, "inf"),
        }
    }
}
