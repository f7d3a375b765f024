//! Error handling types shared by every stage of the SLC front end.
//!
//! Scanning and parsing are fail-fast: the first violation aborts the whole
//! run and is reported as a single [`Error`]. Each error carries an
//! [`ErrorKind`] describing what went wrong and the 1-based source position
//! where it was detected.
//!
//! # Examples
//!
//! ```rust
//! use slc_syntax::error::{ErrorKind, Result, error_at};
//!
//! fn reject(line: usize, col: usize) -> Result<()> {
//!     error_at(line, col, ErrorKind::UnclosedBlock)
//! }
//!
//! let err = reject(3, 1).unwrap_err();
//! assert_eq!(err.to_string(), "block not closed at 3:1");
//! ```

use std::fmt;

use thiserror::Error as ThisError;

/// What went wrong, independent of where.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ErrorKind {
    /// A character (or run of symbol characters) the tokenizer cannot classify.
    #[error("unexpected character '{found}'")]
    Lex { found: char },

    /// End of input reached inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A number ending in a decimal point with no fractional digits.
    #[error("malformed number '{lexeme}'")]
    MalformedNumber { lexeme: String },

    /// The parser expected one thing and found another.
    #[error("expected {expected}, found {found}")]
    Parse { expected: String, found: String },

    /// End of input reached before the `}` closing a block.
    #[error("block not closed")]
    UnclosedBlock,

    /// A numeric literal that does not fit its target type.
    #[error("invalid literal '{lexeme}'")]
    InvalidLiteral { lexeme: String },

    /// Expressions or statements nested past the parser's limit.
    #[error("nesting too deep")]
    TooDeep,
}

/// An error with the source location it was detected at.
///
/// `line` and `col` are 1-based and point at the first character of the
/// offending token (or the offending character for lexing errors).
///
/// ```rust
/// use slc_syntax::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::Lex { found: '#' }, 2, 7);
/// assert_eq!(err.to_string(), "unexpected character '#' at 2:7");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    pub line: usize,
    pub col: usize,
}

impl Error {
    pub fn new(kind: ErrorKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    /// Shorthand for a [`ErrorKind::Parse`] error.
    pub fn expected(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: usize,
        col: usize,
    ) -> Self {
        Self::new(
            ErrorKind::Parse {
                expected: expected.into(),
                found: found.into(),
            },
            line,
            col,
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.kind, self.line, self.col)
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for scanning and parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience function to create an error result at a source location.
pub fn error_at<T>(line: usize, col: usize, kind: ErrorKind) -> Result<T> {
    Err(Error::new(kind, line, col))
}
