//! FAQ command handler.
//!
//! Lists the corpus and shows how the matcher scores a query. Never calls
//! the remote provider.

use super::load_configured_corpus;
use clap::{Args, Subcommand};
use digibot_core::{config::AppConfig, AppResult};
use digibot_faq::{find_best_match, score_all, Corpus, ScoredRecord};

/// Inspect the FAQ corpus and the matcher
#[derive(Args, Debug)]
pub struct FaqCommand {
    #[command(subcommand)]
    pub command: FaqSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FaqSubcommand {
    /// List FAQ questions in matching order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a query against every FAQ record
    Explain {
        /// The query to score
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl FaqCommand {
    /// Execute the faq command.
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let corpus = load_configured_corpus(config)?;

        let output = match &self.command {
            FaqSubcommand::List { json } => {
                tracing::info!("Listing {} FAQ records", corpus.len());
                list(&corpus, *json)?
            }
            FaqSubcommand::Explain { query, json } => {
                tracing::info!("Explaining match for query");
                explain(&corpus, query, *json)?
            }
        };

        println!("{}", output);
        Ok(())
    }
}

fn list(corpus: &Corpus, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(corpus)?);
    }

    let lines: Vec<String> = corpus
        .iter()
        .enumerate()
        .map(|(i, record)| format!("{:>2}. {}  [{}]", i + 1, record.question, record.keywords.join(", ")))
        .collect();
    Ok(lines.join("\n"))
}

fn explain(corpus: &Corpus, query: &str, json: bool) -> AppResult<String> {
    let scores = score_all(query, corpus);
    let best = find_best_match(query, corpus);

    if json {
        let output = serde_json::json!({
            "query": query,
            "scores": scores,
            "match": best.map(|record| &record.question),
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mut out = String::new();
    for ScoredRecord { index, record, score } in &scores {
        out.push_str(&format!(
            "{:>2}. {:<50} containment={} overlap={} total={}\n",
            index + 1,
            record.question,
            score.containment,
            score.overlap,
            score.total()
        ));
    }

    match best {
        Some(record) => out.push_str(&format!("\nMatch: {}", record.question)),
        None => out.push_str("\nNo match; the help text would be shown"),
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keeps_declaration_order() {
        let corpus = Corpus::builtin();
        let out = list(&corpus, false).unwrap();

        let first = out.lines().next().unwrap();
        assert!(first.contains("How do I send a message on WhatsApp?"));
        assert_eq!(out.lines().count(), corpus.len());
    }

    #[test]
    fn test_list_json() {
        let value: serde_json::Value =
            serde_json::from_str(&list(&Corpus::builtin(), true).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 5);
        assert!(value[0]["keywords"].is_array());
    }

    #[test]
    fn test_explain_reports_match() {
        let out = explain(&Corpus::builtin(), "How do I send a message on WhatsApp?", false).unwrap();
        assert!(out.contains("total=9"));
        assert!(out.ends_with("Match: How do I send a message on WhatsApp?"));
    }

    #[test]
    fn test_explain_without_match() {
        let out = explain(&Corpus::builtin(), "tell me a joke", false).unwrap();
        assert!(out.contains("No match"));
    }

    #[test]
    fn test_explain_json() {
        let value: serde_json::Value =
            serde_json::from_str(&explain(&Corpus::builtin(), "camera", true).unwrap()).unwrap();
        assert_eq!(value["scores"].as_array().unwrap().len(), 5);
        assert_eq!(value["match"], "How do I video call someone on WhatsApp?");
        assert!(value["scores"][0]["score"]["containment"].is_number());
    }
}
