//! Error types for key-value parsing and serialization.
//!
//! All malformed-input cases surface as a single error type with a
//! human-readable cause naming the structural expectation that failed and,
//! where applicable, the offending slice of input.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: malformed pair text, with line/column information
//! - **Invalid Keys**: a document handed to the serializer contains a key
//!   that could never re-parse (empty, or containing whitespace/colon)
//! - **JSON Errors**: failures projecting a document to JSON
//! - **I/O Errors**: reader/writer adapter failures
//!
//! ## Examples
//!
//! ```rust
//! use kvline::{parse, Error};
//!
//! let result = parse("key: unquoted");
//! assert!(matches!(result, Err(Error::Syntax { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//!     // Error messages include line/column and the offending text
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
///
/// Each variant includes contextual information to aid debugging.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Malformed input text, with the position and slice that failed
    #[error("Syntax error at line {line}, column {column}: {msg}{context}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
        context: String,
    },

    /// A key that cannot be serialized because it would not re-parse
    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// A value that cannot be serialized because it would not re-parse
    #[error("Invalid value for key {key:?}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// JSON projection failure
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// Use [`Error::syntax_with_context`] to also include the offending
    /// input slice in the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvline::Error;
    ///
    /// let err = Error::syntax(1, 5, "expected ':' after key");
    /// assert!(err.to_string().contains("column 5"));
    /// ```
    pub fn syntax(line: usize, column: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.to_string(),
            context: String::new(),
        }
    }

    /// Creates a syntax error that quotes the offending input slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvline::Error;
    ///
    /// let err = Error::syntax_with_context(1, 14, "trailing text after pair", "dangling");
    /// assert!(err.to_string().contains("dangling"));
    /// ```
    pub fn syntax_with_context(line: usize, column: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.to_string(),
            context: format!(" in {:?}", context),
        }
    }

    /// Creates an invalid-key error for a document that cannot be serialized.
    ///
    /// Keys containing whitespace or colons (or empty keys) are rejected by
    /// the serializer because the resulting text could not be parsed back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvline::Error;
    ///
    /// let err = Error::invalid_key("bad key", "key contains whitespace");
    /// assert!(err.to_string().contains("whitespace"));
    /// ```
    pub fn invalid_key(key: &str, reason: &str) -> Self {
        Error::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid-value error for a document that cannot be serialized.
    ///
    /// The only unrepresentable values are those ending in a backslash:
    /// the trailing backslash would swallow the closing quote on re-parse.
    pub fn invalid_value(key: &str, reason: &str) -> Self {
        Error::InvalidValue {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a JSON projection error.
    pub fn json(msg: &str) -> Self {
        Error::Json(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
