//! Text statistics over extracted message content.
//!
//! Three building blocks, composed by the pipeline but usable on their own:
//!
//! - [`tokenize`] — lowercase word tokens from raw text
//! - [`FrequencyTable`] — token counts and a deterministic ranking
//! - [`sentiment_score`] — one scalar sentiment estimate per text
//!
//! # Example
//!
//! ```rust
//! use chatstats::analysis::{FrequencyTable, sentiment_score, tokenize};
//!
//! let tokens = tokenize("The cat sat. The cat purred!");
//! let table = FrequencyTable::from_tokens(tokens.iter().map(String::as_str));
//!
//! assert_eq!(table.total(), 6);
//! assert_eq!(table.count("cat"), 2);
//!
//! let score = sentiment_score("what a wonderful day");
//! assert!(score > 0.0);
//! ```

mod frequency;
mod sentiment;
mod tokenizer;

pub use frequency::{FrequencyTable, RANKING_CAP, is_stop_word};
pub use sentiment::sentiment_score;
pub use tokenizer::tokenize;
