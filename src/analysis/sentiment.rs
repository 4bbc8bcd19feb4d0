//! Lexicon-based sentiment scoring.
//!
//! Scores the whole text at once rather than sentence by sentence: every
//! token is looked up in a fixed valence lexicon, and the score is the mean
//! valence of the tokens that matched. The lexicon is intentionally a
//! commodity — any scorer producing one scalar in `[-1.0, 1.0]` per text
//! could be swapped in without touching the rest of the pipeline.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::tokenizer::tokenize;

/// Graded valence word lists. Tiers keep the table readable; values are the
/// valence assigned to every word in the tier.
const TIERS: &[(f64, &[&str])] = &[
    (
        0.9,
        &[
            "excellent",
            "wonderful",
            "amazing",
            "fantastic",
            "brilliant",
            "outstanding",
            "perfect",
            "superb",
            "love",
            "delighted",
        ],
    ),
    (
        0.6,
        &[
            "good",
            "great",
            "nice",
            "pleasant",
            "happy",
            "glad",
            "pleased",
            "enjoy",
            "helpful",
            "useful",
            "interesting",
            "impressive",
            "thanks",
            "thank",
        ],
    ),
    (
        0.3,
        &[
            "okay",
            "fine",
            "decent",
            "works",
            "solved",
            "positive",
            "promising",
            "hopeful",
            "better",
            "yes",
        ],
    ),
    (
        -0.3,
        &[
            "meh",
            "slow",
            "unclear",
            "confusing",
            "doubt",
            "worse",
            "negative",
            "problem",
            "issue",
            "unfortunately",
        ],
    ),
    (
        -0.6,
        &[
            "bad",
            "wrong",
            "broken",
            "fails",
            "failed",
            "error",
            "annoying",
            "frustrating",
            "sad",
            "angry",
            "hate",
            "sorry",
        ],
    ),
    (
        -0.9,
        &[
            "terrible",
            "awful",
            "horrible",
            "dreadful",
            "disastrous",
            "useless",
            "catastrophic",
            "unacceptable",
            "furious",
            "miserable",
        ],
    ),
];

static LEXICON: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut lexicon = HashMap::new();
    for (valence, words) in TIERS {
        for word in *words {
            lexicon.insert(*word, *valence);
        }
    }
    lexicon
});

/// Estimates the overall sentiment of `text`.
///
/// Returns the mean valence of lexicon-matched tokens, clamped to
/// `[-1.0, 1.0]`. Returns `0.0` when no score is computable — empty text or
/// no token present in the lexicon.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::sentiment_score;
///
/// assert!(sentiment_score("this is wonderful, thanks!") > 0.0);
/// assert!(sentiment_score("terrible, everything is broken") < 0.0);
/// assert_eq!(sentiment_score(""), 0.0);
/// ```
pub fn sentiment_score(text: &str) -> f64 {
    let mut sum = 0.0;
    let mut hits = 0_usize;

    for token in tokenize(text) {
        if let Some(valence) = LEXICON.get(token.as_str()) {
            sum += valence;
            hits += 1;
        }
    }

    if hits == 0 {
        return 0.0;
    }

    (sum / hits as f64).clamp(-1.0, 1.0)
}
