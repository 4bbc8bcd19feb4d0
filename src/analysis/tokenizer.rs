//! Word tokenization.

/// Splits text into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters (Unicode letters and
/// digits); punctuation and whitespace are boundaries and produce no tokens.
/// Lowercasing uses Unicode case mapping, so the result does not depend on
/// any locale setting.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::tokenize;
///
/// let tokens = tokenize("Hello, world! It's 2024.");
/// assert_eq!(tokens, vec!["hello", "world", "it", "s", "2024"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect()
}
