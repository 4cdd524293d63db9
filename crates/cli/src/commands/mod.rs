//! Command handlers for the DigiBot CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod chat;
pub mod faq;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use faq::FaqCommand;

use digibot_assistant::{GenerationSettings, Responder};
use digibot_core::{config::AppConfig, AppResult};
use digibot_faq::{load_corpus, Corpus};
use std::time::Duration;

/// Load the corpus named by the config, or the built-in one.
pub fn load_configured_corpus(config: &AppConfig) -> AppResult<Corpus> {
    match config.faq_file.as_deref() {
        Some(path) => load_corpus(path),
        None => {
            tracing::debug!("Using built-in FAQ corpus");
            Ok(Corpus::builtin())
        }
    }
}

/// Build the responder for this process: corpus, request settings and,
/// unless disabled, the remote client.
pub fn build_responder(config: &AppConfig) -> AppResult<Responder> {
    let corpus = load_configured_corpus(config)?;
    let responder =
        Responder::new(corpus).with_settings(GenerationSettings::from_config(config));

    if !config.remote_enabled() {
        tracing::info!("Remote provider disabled, using FAQs only");
        return Ok(responder);
    }

    let client = digibot_llm::create_client(
        &config.provider,
        &config.endpoint,
        config.api_key.as_deref(),
        Duration::from_secs(config.timeout_secs),
    )?;

    if let Some(client) = client {
        responder.configure_remote(client)?;
    }

    Ok(responder)
}
