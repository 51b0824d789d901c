//! # kvline
//!
//! A parser and serializer for a compact, line-oriented key-value text
//! format, with a JSON projection.
//!
//! ## The format
//!
//! A document is a sequence of `key: "value"` pairs separated by
//! whitespace, typically carried on a single line:
//!
//! ```text
//! host: "db-1" state: "ready" note: "says \"hi\""
//! ```
//!
//! Keys contain no whitespace and no colons; values are arbitrary strings
//! with literal quotes escaped as `\"`. See the [`spec`] module for the
//! full format reference.
//!
//! ## Key Features
//!
//! - **Order-preserving**: pairs keep the order their keys first appeared,
//!   backed by an insertion-ordered map
//! - **Strict validation**: any stray text anywhere in the input rejects
//!   the whole input, with line/column error reporting
//! - **Round-trip guarantee**: `parse(serialize(doc)) == doc` for every
//!   document the parser produces
//! - **JSON projection**: one call turns a document into a JSON object
//!   with standard JSON escaping
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kvline = "0.1"
//! ```
//!
//! ### Parsing and serializing
//!
//! ```rust
//! use kvline::{parse, serialize};
//!
//! let doc = parse(r#"time: "12:34:56" note: "on schedule""#).unwrap();
//! assert_eq!(doc.get("time"), Some("12:34:56"));
//!
//! let text = serialize(&doc).unwrap();
//! assert_eq!(text, r#"time: "12:34:56" note: "on schedule""#);
//! ```
//!
//! ### Building documents with the document! macro
//!
//! ```rust
//! use kvline::{document, to_json};
//!
//! let doc = document! {
//!     "name" => "Alice",
//!     "role" => "admin",
//! };
//!
//! assert_eq!(to_json(&doc).unwrap(), r#"{"name":"Alice","role":"admin"}"#);
//! ```
//!
//! ## Error handling
//!
//! Malformed input is a caller contract violation, not a transient
//! condition: every failure surfaces as a single [`Error`] value and is
//! never retried internally.
//!
//! ```rust
//! use kvline::parse;
//!
//! assert!(parse(r#"key: "value" dangling"#).is_err());
//! assert!(parse("key: unquoted").is_err());
//! ```
//!
//! ## Concurrency
//!
//! [`parse`] and [`serialize`] are pure functions over immutable input;
//! every call is independent and safely callable from multiple threads
//! without synchronization.

pub mod document;
pub mod error;
pub mod macros;
pub mod options;
pub mod parser;
pub mod ser;
pub mod spec;

pub use document::Document;
pub use error::{Error, Result};
pub use options::ParseOptions;
pub use parser::Parser;
pub use ser::serialize;

use std::io;

/// Parses key-value text into a [`Document`].
///
/// Empty or whitespace-only input produces an empty document. Any text
/// that is not part of a well-formed pair sequence rejects the whole
/// input.
///
/// # Examples
///
/// ```rust
/// use kvline::parse;
///
/// let doc = parse(r#"key0: "value0"   key1: "value1""#).unwrap();
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.get("key1"), Some("value1"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] describing the first structural expectation
/// that failed, with line/column and the offending slice.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Document> {
    Parser::new(input).parse()
}

/// Parses key-value text with custom options.
///
/// # Examples
///
/// ```rust
/// use kvline::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_comma_separators();
/// let doc = parse_with_options(r#"a: "1", b: "2""#, options).unwrap();
/// assert_eq!(doc.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input is not well-formed under the
/// given options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Document> {
    Parser::with_options(input, options).parse()
}

/// Parses key-value text from bytes.
///
/// # Examples
///
/// ```rust
/// use kvline::parse_slice;
///
/// let doc = parse_slice(br#"key: "value""#).unwrap();
/// assert_eq!(doc.get("key"), Some("value"));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text is not
/// well-formed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    parse(s)
}

/// Parses key-value text from a line-oriented source.
///
/// Reads the source to the end before parsing; the format targets
/// single-line documents, not multi-gigabyte streams.
///
/// # Examples
///
/// ```rust
/// use kvline::parse_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(br#"key: "value""#);
/// let doc = parse_reader(cursor).unwrap();
/// assert_eq!(doc.get("key"), Some("value"));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is not well-formed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}

/// Serializes a document to a writer in the key-value text form.
///
/// # Examples
///
/// ```rust
/// use kvline::{document, to_writer};
///
/// let doc = document! { "key" => "value" };
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, br#"key: "value""#);
/// ```
///
/// # Errors
///
/// Returns an error if the document contains an invalid key or writing
/// fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    let text = serialize(doc)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Projects a document to a JSON object string.
///
/// Keys and values pass through as JSON strings with standard JSON
/// escaping, which is distinct from the format's own `\"` escaping.
/// Pair order is preserved in the output.
///
/// # Examples
///
/// ```rust
/// use kvline::{parse, to_json};
///
/// let doc = parse(r#"key: "fo \" bar""#).unwrap();
/// assert_eq!(to_json(&doc).unwrap(), r#"{"key":"fo \" bar"}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] if JSON encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json(doc: &Document) -> Result<String> {
    serde_json::to_string(doc).map_err(|e| Error::json(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serialize_roundtrip() {
        let input = r#"host: "db-1" state: "ready""#;
        let doc = parse(input).unwrap();
        assert_eq!(serialize(&doc).unwrap(), input);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("").unwrap(), Document::new());
        assert_eq!(parse("   \t\n ").unwrap(), Document::new());
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&Document::new()).unwrap(), "");
    }

    #[test]
    fn test_to_json_preserves_order() {
        let doc = parse(r#"z: "1" a: "2""#).unwrap();
        assert_eq!(to_json(&doc).unwrap(), r#"{"z":"1","a":"2"}"#);
    }

    #[test]
    fn test_parse_slice_and_reader() {
        let bytes = br#"key: "value""#;
        let from_slice = parse_slice(bytes).unwrap();
        let from_reader = parse_reader(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(from_slice, from_reader);
        assert_eq!(from_slice.get("key"), Some("value"));
    }

    #[test]
    fn test_parse_slice_invalid_utf8() {
        assert!(parse_slice(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_to_writer() {
        let doc = document! { "a" => "1", "b" => "2" };
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), r#"a: "1" b: "2""#);
    }
}
