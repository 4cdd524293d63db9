//! Remote-first responder with local FAQ fallback.
//!
//! Per message:
//! 1. remote model, if a client is configured; its text is returned verbatim;
//! 2. on remote failure or absence, the FAQ matcher; the record's answer;
//! 3. with no FAQ match, [`DEFAULT_HELP_TEXT`].
//!
//! Each tier runs at most once. Remote failures are logged and swallowed.

use crate::persona::DEFAULT_HELP_TEXT;
use crate::settings::GenerationSettings;
use digibot_core::{ApiError, AppError, AppResult};
use digibot_faq::{Corpus, FaqMatcher, KeywordMatcher};
use digibot_llm::LlmClient;
use serde::Serialize;
use std::sync::{Arc, OnceLock};

/// Which tier produced a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReplySource {
    /// Generated by the remote provider
    Remote { provider: String },
    /// Answer of the matched FAQ record
    Faq { question: String },
    /// Nothing matched; the fixed help text
    Default,
}

/// A reply and its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotReply {
    pub text: String,
    pub source: ReplySource,
}

/// Answers user messages.
///
/// The remote client is held in a set-once cell: it is either given at
/// construction, set later through [`Responder::configure_remote`], or never
/// set. Once set it is read-only, so a `Responder` can be shared behind an
/// `Arc` by concurrent callers.
pub struct Responder<M: FaqMatcher = KeywordMatcher> {
    corpus: Corpus,
    matcher: M,
    settings: GenerationSettings,
    remote: OnceLock<Arc<dyn LlmClient>>,
}

impl Responder<KeywordMatcher> {
    /// Responder over `corpus` with the keyword matcher and no remote client.
    pub fn new(corpus: Corpus) -> Self {
        Self::with_matcher(corpus, KeywordMatcher)
    }
}

impl<M: FaqMatcher> Responder<M> {
    /// Responder with a custom matching strategy.
    pub fn with_matcher(corpus: Corpus, matcher: M) -> Self {
        Self {
            corpus,
            matcher,
            settings: GenerationSettings::default(),
            remote: OnceLock::new(),
        }
    }

    /// Replace the remote request settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the remote client at construction time.
    pub fn with_remote(self, client: Arc<dyn LlmClient>) -> Self {
        // A fresh cell cannot already be set, but a builder chain could call this twice
        if self.remote.set(client).is_err() {
            tracing::warn!("Remote client already configured; keeping the first one");
        }
        self
    }

    /// Set the remote client once, after construction.
    ///
    /// # Errors
    /// Returns `AppError::Config` if a remote client is already configured.
    pub fn configure_remote(&self, client: Arc<dyn LlmClient>) -> AppResult<()> {
        let provider = client.provider_name().to_string();
        self.remote.set(client).map_err(|_| {
            AppError::Config("Remote client is already configured for this session".to_string())
        })?;
        tracing::info!(provider = %provider, "Remote client configured");
        Ok(())
    }

    /// Whether a remote tier will be attempted.
    pub fn has_remote(&self) -> bool {
        self.remote.get().is_some()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Reply text for `user_message`. Never fails.
    pub async fn respond(&self, user_message: &str) -> String {
        self.reply(user_message).await.text
    }

    /// Reply for `user_message` together with the tier that produced it.
    pub async fn reply(&self, user_message: &str) -> BotReply {
        tracing::debug!(chars = user_message.chars().count(), "Generating reply");

        match self.remote.get() {
            Some(client) => match self.try_remote(client.as_ref(), user_message).await {
                Ok(reply) => return reply,
                Err(err) => self.log_remote_failure(client.as_ref(), &err),
            },
            None => tracing::debug!("No remote client, using FAQs"),
        }

        self.answer_locally(user_message)
    }

    /// The local tiers only: FAQ match, else the help text.
    pub fn answer_locally(&self, user_message: &str) -> BotReply {
        match self.matcher.find_best_match(user_message, &self.corpus) {
            Some(record) => {
                tracing::debug!(question = %record.question, "Found FAQ match");
                BotReply {
                    text: record.answer.clone(),
                    source: ReplySource::Faq {
                        question: record.question.clone(),
                    },
                }
            }
            None => {
                tracing::debug!("No FAQ match, replying with help text");
                BotReply {
                    text: DEFAULT_HELP_TEXT.to_string(),
                    source: ReplySource::Default,
                }
            }
        }
    }

    async fn try_remote(
        &self,
        client: &dyn LlmClient,
        user_message: &str,
    ) -> Result<BotReply, ApiError> {
        tracing::info!(provider = client.provider_name(), "Attempting remote completion");

        let request = self.settings.request_for(user_message);
        let response = client.complete(&request).await?;

        tracing::debug!(
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Remote completion succeeded"
        );

        Ok(BotReply {
            text: response.content,
            source: ReplySource::Remote {
                provider: client.provider_name().to_string(),
            },
        })
    }

    fn log_remote_failure(&self, client: &dyn LlmClient, err: &ApiError) {
        if err.is_auth_failure() {
            tracing::warn!(
                provider = client.provider_name(),
                error = %err,
                "Remote credential rejected or missing, falling back to FAQs"
            );
        } else {
            tracing::warn!(
                provider = client.provider_name(),
                error = %err,
                "Remote completion failed, falling back to FAQs"
            );
        }
    }
}
