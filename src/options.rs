//! Configuration options for parsing.
//!
//! The format has one historical dialect switch: whether a comma is
//! accepted between pairs in addition to whitespace. [`ParseOptions`]
//! exposes it; the default rule set is whitespace-only separators.
//!
//! ## Examples
//!
//! ```rust
//! use kvline::{parse_with_options, ParseOptions};
//!
//! // Strict (default): only whitespace may separate pairs
//! let options = ParseOptions::new();
//! assert!(parse_with_options(r#"a: "1", b: "2""#, options).is_err());
//!
//! // Comma dialect: a comma after the closing quote is also accepted
//! let options = ParseOptions::new().with_comma_separators();
//! let doc = parse_with_options(r#"a: "1", b: "2""#, options).unwrap();
//! assert_eq!(doc.len(), 2);
//! ```

/// Configuration options for [`parse_with_options`](crate::parse_with_options).
///
/// # Examples
///
/// ```rust
/// use kvline::ParseOptions;
///
/// // Default strict options
/// let options = ParseOptions::new();
///
/// // Accept the comma-separated dialect
/// let options = ParseOptions::new().with_comma_separators();
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub comma_separators: bool,
}

impl ParseOptions {
    /// Creates default options (whitespace-only pair separators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvline::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert!(!options.comma_separators);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a single comma directly after a closing quote, followed by
    /// whitespace, as a pair separator.
    ///
    /// This matches an older dialect of the format. Output produced by
    /// [`serialize`](crate::serialize) never contains commas between
    /// pairs, so round-trips are unaffected by this setting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvline::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_comma_separators();
    /// assert!(options.comma_separators);
    /// ```
    #[must_use]
    pub fn with_comma_separators(mut self) -> Self {
        self.comma_separators = true;
        self
    }
}
