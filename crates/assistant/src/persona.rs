//! Fixed texts that give DigiBot its voice.

/// System prompt sent with every remote request.
pub const SYSTEM_PROMPT: &str = "You are DigiBot, a friendly digital literacy assistant. \
Help users learn how to use WhatsApp, Paytm, Google Maps, and other digital tools. \
Provide step-by-step guidance with emojis. Keep responses concise and helpful.";

/// First bot message of every chat session.
pub const GREETING: &str = "👋 Hi! I'm DigiBot, your digital literacy assistant! \
I can help you learn how to use WhatsApp, Paytm, Google Maps, and other digital tools. \
What would you like to know?";

/// Reply when neither the remote model nor the FAQ has an answer.
pub const DEFAULT_HELP_TEXT: &str = "🤔 I understand you're asking about digital tools, \
but I don't have a specific answer for that question. Here are some topics I can help you with:\n\n\
📱 WhatsApp: Sending messages, making calls, sharing files\n\
💳 Paytm: Making payments, checking balance, QR codes\n\
🗺️ Google Maps: Getting directions, finding places\n\n\
Please ask me something more specific about these apps, and I'll be happy to help! 😊";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_lists_supported_topics() {
        for topic in ["WhatsApp", "Paytm", "Google Maps"] {
            assert!(DEFAULT_HELP_TEXT.contains(topic), "missing {}", topic);
        }
        assert!(DEFAULT_HELP_TEXT.contains("more specific"));
    }
}
