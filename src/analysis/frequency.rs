//! Token counting and ranking.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Upper bound on ranking entries kept for reporting.
///
/// Effectively unbounded for realistic archives; exists so a pathological
/// input cannot balloon the report files.
pub const RANKING_CAP: usize = 100_000;

/// Common English function words excluded from the filtered frequency table.
///
/// Includes the single-letter fragments ("s", "t") and "don" produced when
/// the tokenizer splits contractions at the apostrophe.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "because", "as", "if", "when", "while", "of", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "all", "any", "both", "each",
    "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same",
    "so", "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Returns `true` if `word` is in the fixed stop-word set.
///
/// Matching is exact; callers are expected to pass already-lowercased tokens
/// as produced by [`tokenize`](crate::analysis::tokenize).
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Occurrence counts and ranking for a token sequence.
///
/// The ranking is sorted by descending count; tokens with equal counts are
/// ordered lexicographically ascending. That tie-break is part of the
/// contract — rerunning on the same input reproduces the same ranking
/// byte for byte.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::{FrequencyTable, tokenize};
///
/// let tokens = tokenize("b a b c a b");
/// let table = FrequencyTable::from_tokens(tokens.iter().map(String::as_str));
///
/// assert_eq!(table.total(), 6);
/// assert_eq!(
///     table.ranking(),
///     &[
///         ("b".to_string(), 3),
///         ("a".to_string(), 2),
///         ("c".to_string(), 1),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    total: usize,
    counts: HashMap<String, usize>,
    ranking: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Counts and ranks a token sequence.
    ///
    /// One pass builds the counts; an explicit sort produces the ranking
    /// (descending count, then ascending token). The ranking is truncated to
    /// [`RANKING_CAP`] entries; the counts and total are not.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut total = 0;
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in tokens {
            total += 1;
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }

        let mut ranking: Vec<(String, usize)> =
            counts.iter().map(|(w, c)| (w.clone(), *c)).collect();
        ranking.sort_by(|(word_a, count_a), (word_b, count_b)| {
            count_b.cmp(count_a).then_with(|| word_a.cmp(word_b))
        });
        ranking.truncate(RANKING_CAP);

        Self {
            total,
            counts,
            ranking,
        }
    }

    /// Counts and ranks the subsequence of `tokens` that are not stop words.
    ///
    /// Filtering happens before counting, so totals and percentages describe
    /// the filtered multiset itself rather than the raw table minus some
    /// rows.
    pub fn without_stop_words(tokens: &[String]) -> Self {
        Self::from_tokens(
            tokens
                .iter()
                .map(String::as_str)
                .filter(|token| !is_stop_word(token)),
        )
    }

    /// Total number of tokens counted (with multiplicity).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Occurrence count for a token; zero if absent.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Ranked `(token, count)` pairs, most frequent first.
    pub fn ranking(&self) -> &[(String, usize)] {
        &self.ranking
    }

    /// Share of the total held by `count`, as a percentage.
    ///
    /// Only meaningful for counts taken from this table; never called on an
    /// empty table since an empty table has an empty ranking.
    pub fn percentage(&self, count: usize) -> f64 {
        debug_assert!(self.total > 0, "percentage of an empty table");
        (count as f64 / self.total as f64) * 100.0
    }

    /// Returns `true` if no tokens were counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(tokens: &[&str]) -> FrequencyTable {
        FrequencyTable::from_tokens(tokens.iter().copied())
    }

    #[test]
    fn test_empty() {
        let t = table(&[]);
        assert!(t.is_empty());
        assert_eq!(t.total(), 0);
        assert_eq!(t.distinct(), 0);
        assert!(t.ranking().is_empty());
    }

    #[test]
    fn test_counts_and_total() {
        let t = table(&["a", "b", "a", "c", "a", "b"]);
        assert_eq!(t.total(), 6);
        assert_eq!(t.distinct(), 3);
        assert_eq!(t.count("a"), 3);
        assert_eq!(t.count("b"), 2);
        assert_eq!(t.count("c"), 1);
        assert_eq!(t.count("missing"), 0);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let t = table(&["x", "y", "x", "z", "z", "z", "y", "x"]);
        let sum: usize = t.ranking().iter().map(|(_, c)| c).sum();
        assert_eq!(sum, t.total());
    }

    #[test]
    fn test_ranking_descending_count() {
        let t = table(&["a", "b", "a", "c", "a", "b"]);
        assert_eq!(
            t.ranking(),
            &[
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ranking_ties_lexicographic() {
        let t = table(&["zebra", "apple", "mango"]);
        assert_eq!(
            t.ranking(),
            &[
                ("apple".to_string(), 1),
                ("mango".to_string(), 1),
                ("zebra".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_percentage() {
        let t = table(&["a", "a", "b", "c"]);
        assert!((t.percentage(t.count("a")) - 50.0).abs() < f64::EPSILON);
        assert!((t.percentage(t.count("b")) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_without_stop_words_counts_filtered_multiset() {
        let tokens: Vec<String> = ["the", "cat", "sat", "on", "the", "mat"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let t = FrequencyTable::without_stop_words(&tokens);

        assert_eq!(t.total(), 3);
        assert_eq!(t.count("cat"), 1);
        assert_eq!(t.count("the"), 0);
        assert_eq!(t.count("on"), 0);
        // Percentages come out of the filtered total, not the raw one.
        assert!((t.percentage(t.count("mat")) - 33.333_333_333_333_33).abs() < 1e-9);
    }

    #[test]
    fn test_stop_word_set() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("don"));
        assert!(is_stop_word("t"));
        assert!(!is_stop_word("cat"));
        // Matching is exact; no case folding here.
        assert!(!is_stop_word("The"));
    }
}
