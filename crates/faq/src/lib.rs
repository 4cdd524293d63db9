//! Local FAQ answering for DigiBot.
//!
//! A small, fixed corpus of question/answer/keyword records and a
//! keyword-scoring matcher that picks the single best record for a free-text
//! query. The matcher is pure and never fails: "no match" is a normal result.

pub mod corpus;
pub mod loader;
pub mod matcher;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use loader::load_corpus;
pub use matcher::{find_best_match, score_all, score_record, FaqMatcher, KeywordMatcher, MatchScore, ScoredRecord};
pub use types::{Corpus, FaqRecord};
