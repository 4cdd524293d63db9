//! Remote generation crate for DigiBot.
//!
//! This crate wraps the remote language-model API behind the [`LlmClient`]
//! trait. Every failure of a remote call surfaces as a single
//! [`ApiError`](digibot_core::ApiError) so callers can fall back without
//! inspecting transport details.
//!
//! # Providers
//! - **OpenAI**: chat completions API (or any compatible endpoint)
//! - **Mock**: canned responses with call counting, for tests
//!
//! # Example
//! ```no_run
//! use digibot_llm::{LlmClient, LlmRequest, providers::OpenAiClient};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new(
//!     "https://api.openai.com/v1",
//!     Some("sk-...".to_string()),
//!     Duration::from_secs(30),
//! )?;
//! let request = LlmRequest::new("How do I use Google Maps?", "gpt-3.5-turbo");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::{MockClient, OpenAiClient};
pub use digibot_core::ProviderType;
