//! Error types.

use thiserror::Error;

/// Errors produced while parsing a color from text.
///
/// A failed parse never changes any state; callers keep their previous color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// The number of hex digits is not one of the accepted lengths.
    #[error("invalid number of hex digits: {0}")]
    InvalidLength(usize),

    /// A character that is not a hex digit.
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),

    /// The text is neither a hex color nor a known color function.
    #[error("unknown color function: {0}")]
    UnknownFunction(String),

    /// A color function is missing its closing parenthesis, or has text
    /// after it.
    #[error("unclosed color function: {0}()")]
    UnclosedFunction(String),

    /// A color function was given the wrong number of arguments.
    #[error("{function}() takes {expected} arguments, found {found}")]
    ArgumentCount {
        /// Name of the function.
        function: &'static str,
        /// Number of arguments the function takes.
        expected: usize,
        /// Number of arguments that were given.
        found: usize,
    },

    /// An argument of a color function is not a number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

/// Errors reported by a [`Clipboard`](crate::Clipboard) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// There is no clipboard to write to.
    #[error("clipboard is unavailable")]
    Unavailable,

    /// The clipboard refused the write.
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}
