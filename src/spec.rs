//! Format reference for the key-value line format.
//!
//! This module documents the textual format as implemented by this
//! library. It contains no code.
//!
//! # Overview
//!
//! The format is a compact, line-oriented sequence of key-value pairs,
//! typically carried on a single line:
//!
//! ```text
//! name: "Alice" role: "admin" note: "says \"hi\""
//! ```
//!
//! A document is zero or more pairs separated by runs of whitespace, with
//! optional leading and trailing whitespace. The empty string is a valid
//! document with no pairs.
//!
//! # Pairs
//!
//! A pair is `KEY ':' ' ' '"' VALUE '"'`:
//!
//! - **Key**: one or more characters containing neither whitespace nor a
//!   colon (`[^:\s]+`). Keys are not quoted.
//! - Exactly one space separates the colon from the opening quote. Zero
//!   spaces, or more than one, is a syntax error.
//! - **Value**: any character sequence in which every literal `"` is
//!   written as `\"`. The first quote not preceded by a backslash
//!   terminates the value. Values may be empty and may contain colons,
//!   spaces, and `": "` sequences without ambiguity, since pair detection
//!   never looks inside an open quoted value.
//!
//! # Escaping
//!
//! `\"` is the only escape sequence. During parsing it becomes a literal
//! `"`; any backslash not followed by a quote is preserved verbatim. A
//! quote preceded by a backslash never terminates a value, so `"\\""`
//! holds the two characters `\` and `"`.
//!
//! This escaping is specific to the format and is **not** JSON string
//! escaping. The JSON projection ([`to_json`](crate::to_json)) applies
//! standard JSON escaping on top of the already-unescaped values.
//!
//! # Separators
//!
//! | input | default | comma dialect |
//! |-------|---------|---------------|
//! | `a: "1" b: "2"` | accepted | accepted |
//! | `a: "1"   b: "2"` | accepted (any run of whitespace) | accepted |
//! | `a: "1"\tb: "2"` | accepted | accepted |
//! | `a: "1", b: "2"` | rejected | accepted |
//! | `a: "1",b: "2"` | rejected | rejected (comma needs whitespace after) |
//!
//! The comma dialect exists for compatibility with an older revision of
//! the format and is opt-in via
//! [`ParseOptions::with_comma_separators`](crate::ParseOptions::with_comma_separators).
//! Serialized output always uses single spaces.
//!
//! # Duplicate keys
//!
//! A repeated key overwrites the earlier value but keeps the position
//! where the key was first seen:
//!
//! ```text
//! a: "1" b: "2" a: "3"   =>   {a: "3", b: "2"}  (a before b)
//! ```
//!
//! # Rejected inputs
//!
//! The whole input is rejected if any part of it is not pair text:
//!
//! ```text
//! key: "value" dangling     trailing unquoted text
//! key: unquoted             value without quotes
//! key:"value"               missing space after colon
//! key:  "value"             two spaces after colon
//! key: "unterminated        missing closing quote
//! : "value"                 empty key
//! ```
//!
//! # Normal form
//!
//! [`serialize`](crate::serialize) emits pairs in encounter order, joined
//! by single spaces, with values escaped as above. For any text `t`
//! accepted by the parser, `serialize(parse(t))` differs from `t` at most
//! in inter-pair whitespace; for any document `d` produced by the parser,
//! `parse(serialize(d)) == d`.
