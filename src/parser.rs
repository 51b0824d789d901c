//! Parsing of key-value text into a [`Document`].
//!
//! This module provides the [`Parser`] implementation that turns the
//! line-oriented `key: "value"` format into an ordered [`Document`].
//!
//! ## Overview
//!
//! - **Single-pass parsing**: one cursor over the input, no backtracking
//! - **Strict validation**: any text that is not part of a well-formed
//!   pair sequence fails the whole input
//! - **Error reporting**: errors carry line/column and the offending slice
//!
//! ## Grammar
//!
//! The input is zero or more pairs separated by runs of whitespace, with
//! optional leading and trailing whitespace. A pair is
//! `KEY ':' ' ' '"' VALUE '"'` where `KEY` contains neither whitespace nor
//! a colon, exactly one space follows the colon, and `VALUE` runs to the
//! first quote not preceded by a backslash. See [`crate::spec`] for the
//! full format reference.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use kvline::parse;
//!
//! let doc = parse(r#"time: "12:34:56""#).unwrap();
//! assert_eq!(doc.get("time"), Some("12:34:56"));
//! ```

use crate::options::ParseOptions;
use crate::{Document, Error, Result};

/// Longest slice of remaining input quoted in error messages.
const ERROR_CONTEXT_LEN: usize = 24;

/// The key-value parser.
///
/// Walks the input with a char cursor, building a [`Document`] pair by
/// pair. Created via [`Parser::new`] or [`Parser::with_options`].
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            options,
        }
    }

    /// Consumes the parser and produces the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the input is not a well-formed
    /// sequence of pairs.
    pub fn parse(mut self) -> Result<Document> {
        let mut doc = Document::new();

        self.skip_whitespace();
        while !self.at_end() {
            let (key, value) = self.parse_pair()?;
            doc.insert(key, value);
            if self.at_end() {
                break;
            }
            self.expect_separator()?;
        }

        Ok(doc)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Remaining input, capped for inclusion in error messages.
    fn context(&self) -> &'a str {
        let rest = &self.input[self.position..];
        match rest.char_indices().nth(ERROR_CONTEXT_LEN) {
            Some((idx, _)) => &rest[..idx],
            None => rest,
        }
    }

    fn parse_pair(&mut self) -> Result<(String, String)> {
        let key = self.parse_key()?;
        self.expect_value_prefix()?;
        let value = self.parse_value()?;
        Ok((key, value))
    }

    /// Reads the key up to the colon. Keys are one or more characters
    /// containing neither whitespace nor a colon.
    fn parse_key(&mut self) -> Result<String> {
        let start = self.position;
        let (start_line, start_column) = (self.line, self.column);

        loop {
            match self.peek_char() {
                Some(':') => break,
                Some(ch) if ch.is_whitespace() => {
                    return Err(Error::syntax_with_context(
                        start_line,
                        start_column,
                        "expected ':' after key",
                        &self.input[start..self.position],
                    ));
                }
                Some(_) => {
                    self.next_char();
                }
                None => {
                    return Err(Error::syntax_with_context(
                        start_line,
                        start_column,
                        "expected ':' after key",
                        &self.input[start..self.position],
                    ));
                }
            }
        }

        if self.position == start {
            return Err(Error::syntax_with_context(
                start_line,
                start_column,
                "empty key before ':'",
                self.context(),
            ));
        }

        let key = self.input[start..self.position].to_string();
        self.next_char(); // consume ':'
        Ok(key)
    }

    /// After the colon: exactly one space, then the opening quote.
    fn expect_value_prefix(&mut self) -> Result<()> {
        if self.peek_char() != Some(' ') {
            return Err(Error::syntax_with_context(
                self.line,
                self.column,
                "expected a single space after ':'",
                self.context(),
            ));
        }
        self.next_char(); // consume ' '

        if self.peek_char() != Some('"') {
            return Err(Error::syntax_with_context(
                self.line,
                self.column,
                "expected opening '\"' before value",
                self.context(),
            ));
        }
        self.next_char(); // consume '"'
        Ok(())
    }

    /// Reads the value up to the first quote not preceded by a backslash,
    /// unescaping `\"` to `"` along the way. No other escape sequences are
    /// recognized; a backslash not followed by a quote is kept verbatim.
    fn parse_value(&mut self) -> Result<String> {
        let mut value = String::new();

        loop {
            match self.next_char() {
                Some('"') => return Ok(value),
                Some('\\') => {
                    if self.peek_char() == Some('"') {
                        self.next_char();
                        value.push('"');
                    } else {
                        value.push('\\');
                    }
                }
                Some(ch) => value.push(ch),
                None => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "unterminated value, expected closing '\"'",
                    ));
                }
            }
        }
    }

    /// After a closing quote, at least one whitespace character must
    /// separate it from the next pair. In the comma dialect a single
    /// comma may precede that whitespace.
    fn expect_separator(&mut self) -> Result<()> {
        if self.options.comma_separators && self.peek_char() == Some(',') {
            self.next_char();
            if !self.peek_char().is_some_and(char::is_whitespace) {
                return Err(Error::syntax_with_context(
                    self.line,
                    self.column,
                    "expected whitespace after ','",
                    self.context(),
                ));
            }
            self.skip_whitespace();
            return Ok(());
        }

        if !self.peek_char().is_some_and(char::is_whitespace) {
            return Err(Error::syntax_with_context(
                self.line,
                self.column,
                "expected whitespace between pairs",
                self.context(),
            ));
        }
        self.skip_whitespace();
        Ok(())
    }
}
