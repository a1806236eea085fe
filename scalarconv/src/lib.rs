//! Scalar Converter Library
//!
//! Converts a single scalar literal into its char, int, float and double
//! representations. Each representation is derived independently from one
//! exact canonical value and reported as representable, impossible or, for
//! chars outside the printable window, non displayable.
//!
//! # Warning
//!
//! This library is meant to back the `convert` binary. Semantic versioning
//! only applies to the binary's output format.

pub mod convert;
pub mod error;
pub mod literal;
pub mod render;
pub mod value;

pub use crate::convert::{Conversion, Report, convert};
pub use crate::error::ParseLiteralError;
pub use crate::literal::{Literal, LiteralKind, parse_literal};
