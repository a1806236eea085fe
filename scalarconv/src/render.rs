//! Text form of a [`Report`].
//!
//! The output is four lines, always in the order char, int, float, double,
//! each prefixed with the target name:
//!
//! ```text
//! char: *
//! int: 42
//! float: 42.0
//! double: 42.0
//! ```

use crate::convert::{Conversion, Report};
use num_traits::Float;
use std::fmt;

/// Text printed when a value does not fit its target type.
pub const IMPOSSIBLE: &str = "impossible";
/// Text printed for chars outside the printable window.
pub const NON_DISPLAYABLE: &str = "Non displayable";

/// Trait for rendering a converted value.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for char {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for i32 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for f32 {
    fn render(&self) -> String {
        render_float(*self)
    }
}

impl Render for f64 {
    fn render(&self) -> String {
        render_float(*self)
    }
}

/// Shortest round-trip decimal form, marked with `.0` when integral.
fn render_float<F: Float + fmt::Display>(value: F) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

impl<T: Render> fmt::Display for Conversion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Representable(value) => f.write_str(&value.render()),
            Conversion::NonDisplayable(_) => f.write_str(NON_DISPLAYABLE),
            Conversion::Impossible => f.write_str(IMPOSSIBLE),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "char: {}", self.char)?;
        writeln!(f, "int: {}", self.int)?;
        writeln!(f, "float: {}", self.float)?;
        writeln!(f, "double: {}", self.double)
    }
}
