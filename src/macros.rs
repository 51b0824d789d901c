/// Builds a [`Document`](crate::Document) from literal pairs.
///
/// Pairs are inserted left to right, so the macro follows the same
/// encounter-order and overwrite rules as the parser.
///
/// # Examples
///
/// ```rust
/// use kvline::document;
///
/// let doc = document! {
///     "name" => "Alice",
///     "role" => "admin",
/// };
///
/// assert_eq!(doc.get("name"), Some("Alice"));
/// ```
#[macro_export]
macro_rules! document {
    // Handle empty document
    {} => {
        $crate::Document::new()
    };

    // Handle non-empty document
    { $($key:expr => $value:expr),* $(,)? } => {{
        let mut doc = $crate::Document::new();
        $(
            doc.insert($key.to_string(), $value.to_string());
        )*
        doc
    }};
}
