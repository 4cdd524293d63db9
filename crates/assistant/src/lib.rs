//! DigiBot response orchestration.
//!
//! The [`Responder`] answers one user message at a time with a two-tier
//! fallback chain: the remote language model first (when configured), then
//! the local FAQ matcher, then a fixed help text. It never fails.
//!
//! [`ChatSession`] keeps the transcript of the running session on top of it.

pub mod persona;
pub mod responder;
pub mod session;
pub mod settings;

// Re-export main types
pub use responder::{BotReply, ReplySource, Responder};
pub use session::{ChatMessage, ChatSession, Sender};
pub use settings::GenerationSettings;
