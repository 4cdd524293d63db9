//! In-memory chat transcript for one running session.
//!
//! Nothing here is persisted; the transcript is dropped with the session.

use crate::persona::GREETING;
use crate::responder::{ReplySource, Responder};
use chrono::{DateTime, Utc};
use digibot_faq::{FaqMatcher, KeywordMatcher};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the transcript.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,

    /// Tier that produced a bot reply; `None` for user messages and the greeting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ReplySource>,
}

impl ChatMessage {
    fn new(content: impl Into<String>, sender: Sender, source: Option<ReplySource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            source,
        }
    }
}

/// A conversation with DigiBot.
///
/// Every message is answered independently; the transcript is never sent
/// to the responder.
pub struct ChatSession<M: FaqMatcher = KeywordMatcher> {
    responder: Arc<Responder<M>>,
    messages: Vec<ChatMessage>,
}

impl<M: FaqMatcher> ChatSession<M> {
    /// Start a session; the greeting is the first message.
    pub fn new(responder: Arc<Responder<M>>) -> Self {
        Self {
            responder,
            messages: vec![ChatMessage::new(GREETING, Sender::Bot, None)],
        }
    }

    /// Send a user message and return DigiBot's reply.
    ///
    /// Input is trimmed; blank input is ignored and returns `None`.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.messages
            .push(ChatMessage::new(text, Sender::User, None));

        let reply = self.responder.reply(text).await;
        self.messages
            .push(ChatMessage::new(reply.text, Sender::Bot, Some(reply.source)));

        tracing::debug!(messages = self.messages.len(), "Session updated");

        self.messages.last()
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::DEFAULT_HELP_TEXT;
    use digibot_faq::Corpus;
    use digibot_llm::MockClient;

    fn session() -> ChatSession {
        ChatSession::new(Arc::new(Responder::new(Corpus::builtin())))
    }

    #[tokio::test]
    async fn test_session_starts_with_greeting() {
        let session = session();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert_eq!(session.messages()[0].content, GREETING);
    }

    #[tokio::test]
    async fn test_send_records_both_sides() {
        let mut session = session();

        let reply = session.send("  tell me a joke  ").await.unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.content, DEFAULT_HELP_TEXT);
        assert_eq!(reply.source, Some(ReplySource::Default));

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].content, "tell me a joke");
        assert_ne!(messages[1].id, messages[2].id);
        assert!(messages[1].timestamp <= messages[2].timestamp);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut session = session();
        assert!(session.send("   \n").await.is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_session_uses_remote_when_configured() {
        let responder = Responder::new(Corpus::builtin())
            .with_remote(Arc::new(MockClient::succeeding("From the model")));
        let mut session = ChatSession::new(Arc::new(responder));

        let reply = session.send("hello").await.unwrap();
        assert_eq!(reply.content, "From the model");
    }

    #[tokio::test]
    async fn test_transcript_serializes() {
        let mut session = session();
        session.send("camera").await;

        let json = serde_json::to_value(session.messages()).unwrap();
        assert_eq!(json[1]["sender"], "user");
        assert_eq!(json[2]["source"]["kind"], "faq");
        assert!(json[0].get("source").is_none());
    }
}
