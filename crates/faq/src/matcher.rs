//! Keyword scoring matcher.
//!
//! Scoring, per record:
//! - **containment**: +2 for every keyword found as a substring of the
//!   lower-cased query, regardless of word boundaries;
//! - **overlap**: +1 for every (token, keyword) pair where one contains the
//!   other. Tokens come from splitting the lower-cased query on single spaces
//!   and only count when longer than [`MIN_OVERLAP_TOKEN_LEN`] UTF-16 units.
//!
//! A keyword can be credited by both passes and by several tokens. The record
//! with the highest total wins; ties go to the earlier record; a best total of
//! zero means no match.

use crate::types::{Corpus, FaqRecord};
use serde::Serialize;

/// Points for a keyword contained in the query.
pub const CONTAINMENT_WEIGHT: u32 = 2;

/// Points for a token/keyword substring overlap.
pub const OVERLAP_WEIGHT: u32 = 1;

/// Tokens of this many UTF-16 code units or fewer are ignored by the overlap
/// pass. An emoji outside the BMP counts as two units.
pub const MIN_OVERLAP_TOKEN_LEN: usize = 2;

/// Score breakdown of one record against one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    /// Points from the containment pass
    pub containment: u32,

    /// Points from the overlap pass
    pub overlap: u32,
}

impl MatchScore {
    pub fn total(&self) -> u32 {
        self.containment + self.overlap
    }
}

/// A record with its position in the corpus and its score.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredRecord<'a> {
    pub index: usize,
    pub record: &'a FaqRecord,
    pub score: MatchScore,
}

/// Query normalized once and scored against many records.
struct PreparedQuery {
    lower: String,
}

impl PreparedQuery {
    fn new(query: &str) -> Self {
        Self {
            lower: query.to_lowercase(),
        }
    }

    /// Single-space split: no punctuation stripping, empty tokens kept.
    fn tokens(&self) -> std::str::Split<'_, char> {
        self.lower.split(' ')
    }

    fn score(&self, record: &FaqRecord) -> MatchScore {
        let containment = record
            .keywords
            .iter()
            .filter(|keyword| self.lower.contains(keyword.as_str()))
            .count() as u32
            * CONTAINMENT_WEIGHT;

        let mut overlap = 0;
        for token in self
            .tokens()
            .filter(|token| token.encode_utf16().count() > MIN_OVERLAP_TOKEN_LEN)
        {
            for keyword in &record.keywords {
                if keyword.contains(token) || token.contains(keyword.as_str()) {
                    overlap += OVERLAP_WEIGHT;
                }
            }
        }

        MatchScore {
            containment,
            overlap,
        }
    }
}

/// Score a single record against a query.
pub fn score_record(query: &str, record: &FaqRecord) -> MatchScore {
    PreparedQuery::new(query).score(record)
}

/// Score every record, in corpus order.
pub fn score_all<'a>(query: &str, corpus: &'a Corpus) -> Vec<ScoredRecord<'a>> {
    let prepared = PreparedQuery::new(query);
    corpus
        .iter()
        .enumerate()
        .map(|(index, record)| ScoredRecord {
            index,
            record,
            score: prepared.score(record),
        })
        .collect()
}

/// Select the best-matching record for `query`, or `None` if nothing scores.
///
/// # Example
/// ```
/// use digibot_faq::{find_best_match, Corpus};
///
/// let corpus = Corpus::builtin();
/// let hit = find_best_match("How do I check my balance?", &corpus).unwrap();
/// assert_eq!(hit.question, "How do I check my Paytm balance?");
/// assert!(find_best_match("tell me a joke", &corpus).is_none());
/// ```
pub fn find_best_match<'a>(query: &str, corpus: &'a Corpus) -> Option<&'a FaqRecord> {
    let prepared = PreparedQuery::new(query);

    let mut best: Option<&FaqRecord> = None;
    let mut max_score = 0;

    for record in corpus {
        let score = prepared.score(record).total();
        // Strictly greater: on a tie the earlier record stays
        if score > max_score {
            max_score = score;
            best = Some(record);
        }
    }

    best
}

/// Strategy for picking a FAQ record.
pub trait FaqMatcher: Send + Sync {
    fn find_best_match<'a>(&self, query: &str, corpus: &'a Corpus) -> Option<&'a FaqRecord>;
}

/// The keyword scoring matcher described in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl FaqMatcher for KeywordMatcher {
    fn find_best_match<'a>(&self, query: &str, corpus: &'a Corpus) -> Option<&'a FaqRecord> {
        find_best_match(query, corpus)
    }
}
