//! Corpus loader for YAML FAQ files.
//!
//! The file is a YAML sequence of records:
//!
//! ```yaml
//! - question: How do I share my location on WhatsApp?
//!   answer: |
//!     1. Open the chat
//!     2. Tap the attachment icon, then Location
//!   keywords: [whatsapp, location, share]
//! ```

use crate::types::{Corpus, FaqRecord};
use digibot_core::{AppError, AppResult};
use std::path::Path;

/// Load and validate a FAQ corpus from a YAML file.
///
/// Records keep their file order. Every record must satisfy
/// [`FaqRecord::validate`], and the file must contain at least one record.
pub fn load_corpus(path: &Path) -> AppResult<Corpus> {
    tracing::debug!("Loading FAQ corpus from: {:?}", path);

    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::Corpus(format!("Failed to read FAQ file {:?}: {}", path, e))
    })?;

    let records = parse_corpus(&contents)
        .map_err(|e| AppError::Corpus(format!("Invalid FAQ file {:?}: {}", path, e)))?;

    let corpus = Corpus::new(records)?;

    tracing::info!("Loaded {} FAQ records from {:?}", corpus.len(), path);

    Ok(corpus)
}

fn parse_corpus(contents: &str) -> AppResult<Vec<FaqRecord>> {
    let records: Vec<FaqRecord> = serde_yaml::from_str(contents)?;

    if records.is_empty() {
        return Err(AppError::Corpus("contains no records".to_string()));
    }

    // Queries are lower-cased before matching, so upper-case keywords only
    // ever match through the overlap pass
    for record in &records {
        if let Some(keyword) = record
            .keywords
            .iter()
            .find(|k| k.chars().any(char::is_uppercase))
        {
            tracing::warn!(
                "Keyword '{}' of FAQ '{}' contains upper-case letters and will rarely match",
                keyword,
                record.question
            );
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
- question: How do I share my location on WhatsApp?
  answer: |
    1. Open the chat
    2. Tap the attachment icon, then Location
  keywords: [whatsapp, location, share]
- question: How do I scan a QR code with Paytm?
  answer: Tap 'Scan & Pay' and point the camera at the code.
  keywords: [paytm, scan, qr]
"#;

    fn write_temp(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.yaml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_corpus() {
        let (_dir, path) = write_temp(VALID);
        let corpus = load_corpus(&path).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(
            corpus.records()[0].question,
            "How do I share my location on WhatsApp?"
        );
        assert_eq!(
            corpus.records()[0].answer,
            "1. Open the chat\n2. Tap the attachment icon, then Location\n"
        );
        assert_eq!(corpus.records()[1].keywords, vec!["paytm", "scan", "qr"]);
    }

    #[test]
    fn test_loaded_corpus_is_matchable() {
        let (_dir, path) = write_temp(VALID);
        let corpus = load_corpus(&path).unwrap();

        let hit = crate::find_best_match("scan a qr code in paytm", &corpus).unwrap();
        assert_eq!(hit.question, "How do I scan a QR code with Paytm?");
    }

    #[test]
    fn test_missing_file() {
        let result = load_corpus(Path::new("/nonexistent/faqs.yaml"));
        assert!(matches!(result, Err(AppError::Corpus(_))));
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let (_dir, path) = write_temp("- question: Q?\n  answer: A.\n  keywords: []\n");
        match load_corpus(&path) {
            Err(AppError::Corpus(msg)) => assert!(msg.contains("no keywords")),
            other => panic!("expected corpus error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_keyword_string_rejected() {
        let (_dir, path) = write_temp("- question: Q?\n  answer: A.\n  keywords: [ok, \"\"]\n");
        assert!(matches!(load_corpus(&path), Err(AppError::Corpus(_))));
    }

    #[test]
    fn test_empty_file_rejected() {
        let (_dir, path) = write_temp("[]\n");
        assert!(matches!(load_corpus(&path), Err(AppError::Corpus(_))));
    }

    #[test]
    fn test_missing_field_rejected() {
        let (_dir, path) = write_temp("- question: Q?\n  keywords: [a]\n");
        assert!(matches!(load_corpus(&path), Err(AppError::Corpus(_))));
    }
}
