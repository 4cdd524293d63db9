//! FAQ data model.

use digibot_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One question/answer pair and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Canonical question, shown in listings and logs
    pub question: String,

    /// Answer text returned to the user (may span several lines)
    pub answer: String,

    /// Lower-case keywords, in declaration order
    pub keywords: Vec<String>,
}

impl FaqRecord {
    /// Create a record.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the record invariant: a non-empty answer and at least one
    /// keyword, none of them empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.question.trim().is_empty() {
            return Err(AppError::Corpus("FAQ question cannot be empty".to_string()));
        }

        if self.answer.trim().is_empty() {
            return Err(AppError::Corpus(format!(
                "FAQ '{}' has an empty answer",
                self.question
            )));
        }

        if self.keywords.is_empty() {
            return Err(AppError::Corpus(format!(
                "FAQ '{}' has no keywords",
                self.question
            )));
        }

        if self.keywords.iter().any(|k| k.is_empty()) {
            return Err(AppError::Corpus(format!(
                "FAQ '{}' has an empty keyword",
                self.question
            )));
        }

        Ok(())
    }
}

/// Ordered, immutable collection of FAQ records.
///
/// Declaration order is preserved and decides ties in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    records: Vec<FaqRecord>,
}

impl Corpus {
    /// Build a corpus, validating every record.
    pub fn new(records: Vec<FaqRecord>) -> AppResult<Self> {
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    /// Construct without validation. Only for data checked by tests.
    pub(crate) fn from_trusted(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }

    /// Records in declaration order.
    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `record` is one of this corpus' own records (identity, not equality).
    pub fn owns(&self, record: &FaqRecord) -> bool {
        self.records.iter().any(|r| std::ptr::eq(r, record))
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a FaqRecord;
    type IntoIter = std::slice::Iter<'a, FaqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
