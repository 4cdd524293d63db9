//! Remote generation providers.

pub mod mock;
pub mod openai;

pub use mock::MockClient;
pub use openai::{OpenAiClient, EMPTY_COMPLETION_TEXT};
