//! Literal parsing.
//!
//! Reads the single command-line token into its canonical [`Scalar`] value and
//! remembers which kind of literal it was spelled as.

use crate::error::ParseLiteralError;
use crate::value::{Decimal, Scalar, Special};
use tracing::debug;

/// How the literal was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// A printable character such as `a` or `'a'`
    Char,
    /// Optional sign followed by digits only
    Integer,
    /// Decimal point, exponent, `f` suffix, `nan` or `inf`
    Float,
}

/// A parsed literal together with its canonical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: Scalar,
}

/// Parse a scalar literal.
///
/// Surrounding ASCII whitespace is ignored. Recognized forms, tried in order:
/// * a character literal: one printable non-digit character, optionally
///   enclosed in single quotes;
/// * `nan`, `inf` or `infinity` in any case, optionally signed and
///   `f`-suffixed;
/// * an integer or floating point literal with optional sign, decimal point,
///   exponent and `f` suffix.
///
/// # Errors
/// Returns [`ParseLiteralError`] when the input matches none of the forms.
pub fn parse_literal(input: &str) -> Result<Literal, ParseLiteralError> {
    let text = input.trim_matches(|c: char| c.is_ascii_whitespace());
    if text.is_empty() {
        return Err(ParseLiteralError::Empty);
    }

    let literal = if let Some(code) = char_literal(text) {
        Literal {
            kind: LiteralKind::Char,
            value: Scalar::Finite(Decimal::from(code)),
        }
    } else if let Some(special) = special_literal(text) {
        Literal {
            kind: LiteralKind::Float,
            value: Scalar::Special(special),
        }
    } else {
        numeric_literal(text)?
    };

    debug!("Parsed {:?} literal '{}' as {}", literal.kind, text, literal.value);
    Ok(literal)
}

fn is_displayable(byte: u8) -> bool {
    (0x20..0x7f).contains(&byte)
}

fn char_literal(text: &str) -> Option<u8> {
    match text.as_bytes() {
        [b'\'', c, b'\''] if is_displayable(*c) => Some(*c),
        [c] if is_displayable(*c) && !c.is_ascii_digit() => Some(*c),
        _ => None,
    }
}

/// Split off one leading sign, returning whether it was a minus.
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn special_literal(text: &str) -> Option<Special> {
    let (negative, body) = split_sign(text);
    let lower = body.to_ascii_lowercase();
    let word = lower
        .strip_suffix('f')
        .filter(|word| matches!(*word, "nan" | "inf" | "infinity"))
        .unwrap_or(&lower);
    match word {
        "nan" => Some(Special::Nan),
        "inf" | "infinity" => Some(Special::Infinity { negative }),
        _ => None,
    }
}

fn numeric_literal(text: &str) -> Result<Literal, ParseLiteralError> {
    if let Some((offset, found)) = text
        .char_indices()
        .find(|(_, c)| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E' | 'f' | 'F'))
    {
        return Err(ParseLiteralError::UnexpectedChar {
            literal: text.to_string(),
            found,
            offset,
        });
    }

    let (negative, body) = split_sign(text);
    let (body, suffixed) = match body.strip_suffix(['f', 'F']) {
        Some(body) => (body, true),
        None => (body, false),
    };
    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (body, None),
    };
    let (int_digits, frac_digits) = match mantissa.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, Some(frac_digits)),
        None => (mantissa, None),
    };

    digit_run(text, int_digits, "unexpected character in integer part")?;
    let frac = digit_run(text, frac_digits.unwrap_or(""), "unexpected character in fraction")?;
    if int_digits.is_empty() && frac.is_empty() {
        return Err(ParseLiteralError::malformed(text, "no digits"));
    }
    let exponent = exponent.map(|exp| parse_exponent(text, exp)).transpose()?;

    let kind = if frac_digits.is_none() && exponent.is_none() && !suffixed {
        LiteralKind::Integer
    } else {
        LiteralKind::Float
    };
    let value = Decimal::from_digits(negative, int_digits, frac, exponent.unwrap_or(0));

    Ok(Literal {
        kind,
        value: Scalar::Finite(value),
    })
}

fn digit_run<'a>(
    literal: &str,
    run: &'a str,
    reason: &'static str,
) -> Result<&'a str, ParseLiteralError> {
    if run.bytes().all(|b| b.is_ascii_digit()) {
        Ok(run)
    } else {
        Err(ParseLiteralError::malformed(literal, reason))
    }
}

/// Parse an exponent, saturating instead of overflowing.
fn parse_exponent(literal: &str, text: &str) -> Result<i64, ParseLiteralError> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseLiteralError::malformed(literal, "malformed exponent"));
    }
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Ok(if negative { -magnitude } else { magnitude })
}
