//! Defines [`CrsError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CrsError {
    /// The input is not well-formed coordinate system WKT.
    ///
    /// Raised for lexical failures, unexpected tokens, unknown keywords, missing or mistyped
    /// arguments, arity violations and leftover arguments.
    #[error("WKT parse error: {0}")]
    Parse(String),

    /// A WKT string described a different kind of object than the one requested.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The type that was asked for.
        expected: &'static str,
        /// The type that the WKT actually described.
        found: &'static str,
    },
}

impl CrsError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, CrsError>;
