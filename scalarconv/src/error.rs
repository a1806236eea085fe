//! Errors raised while reading a scalar literal.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLiteralError {
    #[error("empty literal")]
    Empty,

    #[error("invalid literal '{literal}': {reason}")]
    Malformed { literal: String, reason: &'static str },

    #[error("invalid literal '{literal}': unexpected character '{found}' at offset {offset}")]
    UnexpectedChar {
        literal: String,
        found: char,
        offset: usize,
    },
}

impl ParseLiteralError {
    pub(crate) fn malformed(literal: &str, reason: &'static str) -> Self {
        Self::Malformed {
            literal: literal.to_string(),
            reason,
        }
    }
}
