//! Parameters of the remote request built for each message.

use crate::persona::SYSTEM_PROMPT;
use digibot_core::config::{AppConfig, DEFAULT_MODEL};
use digibot_llm::LlmRequest;

/// How each remote request is shaped.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}

impl GenerationSettings {
    /// Take model and sampling parameters from the application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            ..Self::default()
        }
    }

    /// Single-message request: system prompt plus the user's text, no history.
    pub fn request_for(&self, user_message: &str) -> LlmRequest {
        LlmRequest::new(user_message, &self.model)
            .with_system(&self.system_prompt)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}
