//! Built-in FAQ corpus.

use crate::types::{Corpus, FaqRecord};

/// (question, answer, keywords) in declaration order.
const BUILTIN_FAQS: &[(&str, &str, &[&str])] = &[
    (
        "How do I send a message on WhatsApp?",
        "📱 To send a message on WhatsApp:\n\n\
         1. Open WhatsApp on your phone\n\
         2. Tap on the chat with the person you want to message\n\
         3. Type your message in the text box at the bottom\n\
         4. Tap the send button (arrow icon) or press Enter\n\n\
         💡 Tip: You can also send voice messages by holding the microphone icon!",
        &["whatsapp", "message", "send", "chat", "text"],
    ),
    (
        "How do I make a payment using Paytm?",
        "💳 To make a payment with Paytm:\n\n\
         1. Open the Paytm app\n\
         2. Tap 'Scan & Pay' or 'Send Money'\n\
         3. Enter the recipient's phone number or scan their QR code\n\
         4. Enter the amount you want to send\n\
         5. Add a note (optional)\n\
         6. Tap 'Proceed' and enter your PIN\n\
         7. Confirm the payment\n\n\
         🔒 Always verify the recipient details before confirming!",
        &["paytm", "payment", "money", "send", "pay", "transaction"],
    ),
    (
        "How do I search for directions on Google Maps?",
        "🗺️ To get directions on Google Maps:\n\n\
         1. Open Google Maps app\n\
         2. Tap the search bar at the top\n\
         3. Type your destination address or place name\n\
         4. Tap on the correct location from the suggestions\n\
         5. Tap the 'Directions' button\n\
         6. Choose your mode of transport (car, walking, public transit)\n\
         7. Tap 'Start' to begin navigation\n\n\
         📍 Tip: You can also tap and hold on the map to set a destination!",
        &["google maps", "directions", "navigation", "location", "map", "route"],
    ),
    (
        "How do I video call someone on WhatsApp?",
        "📹 To make a video call on WhatsApp:\n\n\
         1. Open WhatsApp\n\
         2. Go to the chat with the person you want to call\n\
         3. Tap the video camera icon at the top right\n\
         4. Wait for them to answer\n\n\
         👥 For group video calls:\n\
         1. Open a group chat\n\
         2. Tap the video camera icon\n\
         3. Select up to 7 people to call\n\
         4. Tap 'Call'",
        &["whatsapp", "video call", "call", "video", "camera"],
    ),
    (
        "How do I check my Paytm balance?",
        "💰 To check your Paytm wallet balance:\n\n\
         1. Open the Paytm app\n\
         2. Log in with your mobile number and password\n\
         3. Your wallet balance will be displayed on the home screen\n\
         4. You can also tap on 'My Paytm' to see detailed balance\n\n\
         📊 You can also check transaction history by tapping on 'Passbook' or 'Transaction History'",
        &["paytm", "balance", "wallet", "money", "check", "amount"],
    ),
];

impl Corpus {
    /// The corpus shipped with DigiBot: WhatsApp, Paytm and Google Maps how-tos.
    pub fn builtin() -> Self {
        let records = BUILTIN_FAQS
            .iter()
            .map(|(question, answer, keywords)| {
                FaqRecord::new(*question, *answer, keywords.iter().copied())
            })
            .collect();

        Corpus::from_trusted(records)
    }
}
