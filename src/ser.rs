//! Serialization of a [`Document`] back to key-value text.
//!
//! The output format is exactly one normal form: `KEY: "VALUE"` pairs
//! joined by single spaces, with every `"` inside a value escaped as
//! `\"`. Parsing the output of [`serialize`] always reproduces the
//! original document.
//!
//! ## Usage
//!
//! ```rust
//! use kvline::{document, serialize};
//!
//! let doc = document! {
//!     "a" => "123",
//!     "b" => "fo \" bar",
//! };
//!
//! let text = serialize(&doc).unwrap();
//! assert_eq!(text, r#"a: "123" b: "fo \" bar""#);
//! ```

use crate::{Document, Error, Result};

/// Serializes a document to its textual form.
///
/// Pairs are emitted in encounter order. Each pair is validated before
/// output is produced: a key that is empty or contains whitespace or a
/// colon makes the document unserializable, as does a value ending in a
/// backslash (the trailing backslash would swallow the closing quote on
/// re-parse). In both cases the resulting text could not be parsed back.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] or [`Error::InvalidValue`] if a pair
/// fails validation. Documents produced by [`parse`](crate::parse)
/// always serialize successfully.
pub fn serialize(doc: &Document) -> Result<String> {
    let mut output = String::with_capacity(doc.len() * 16);

    for (i, (key, value)) in doc.iter().enumerate() {
        validate_key(key)?;
        if value.ends_with('\\') {
            return Err(Error::invalid_value(key, "value ends with a backslash"));
        }
        if i > 0 {
            output.push(' ');
        }
        output.push_str(key);
        output.push_str(": \"");
        output.push_str(&escape_value(value));
        output.push('"');
    }

    Ok(output)
}

/// Escapes a value for quoting: every `"` becomes `\"`. No other
/// characters are transformed.
pub(crate) fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_key(key, "key is empty"));
    }
    if key.contains(char::is_whitespace) {
        return Err(Error::invalid_key(key, "key contains whitespace"));
    }
    if key.contains(':') {
        return Err(Error::invalid_key(key, "key contains ':'"));
    }
    Ok(())
}
