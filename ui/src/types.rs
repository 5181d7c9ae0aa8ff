//! API types matching the SoftSell server, plus chat transcript state

use serde::{Deserialize, Serialize};

/// First message of every chat session
pub const GREETING: &str = "Hello! I'm here to help with your questions about licenses. Try asking something like 'How do I sell my license?'";

/// Shown when the assistant cannot be reached
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again or contact support.";

/// Suggested questions offered under the chat input
pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "How do I sell my license?",
    "What is the refund policy?",
    "How do I contact support?",
];

/// Chat request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub fallback: bool,
}

/// API error response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// One entry of the chat transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// In-memory chat session
///
/// Append-only. At most one reply is outstanding at a time: while one is
/// pending, further sends are refused and the transcript is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::with_greeting()
    }
}

impl Transcript {
    /// Fresh session opened by the assistant greeting
    pub fn with_greeting() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while waiting for the assistant ("is typing")
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a user message and mark a reply as pending.
    ///
    /// Returns the trimmed text to send, or `None` when the input is blank or
    /// a reply is already pending.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        self.pending = true;
        Some(text.to_string())
    }

    /// Append the assistant reply for the pending send
    pub fn finish_send(&mut self, reply: impl Into<String>) {
        if !self.pending {
            return;
        }
        self.messages.push(ChatMessage::assistant(reply));
        self.pending = false;
    }
}

/// License families offered in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseType {
    Adobe,
    Microsoft,
    Autodesk,
    Salesforce,
    Oracle,
    Sap,
    Other,
}

impl LicenseType {
    pub const ALL: [LicenseType; 7] = [
        LicenseType::Adobe,
        LicenseType::Microsoft,
        LicenseType::Autodesk,
        LicenseType::Salesforce,
        LicenseType::Oracle,
        LicenseType::Sap,
        LicenseType::Other,
    ];

    /// Form value
    pub fn value(self) -> &'static str {
        match self {
            LicenseType::Adobe => "adobe",
            LicenseType::Microsoft => "microsoft",
            LicenseType::Autodesk => "autodesk",
            LicenseType::Salesforce => "salesforce",
            LicenseType::Oracle => "oracle",
            LicenseType::Sap => "sap",
            LicenseType::Other => "other",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            LicenseType::Adobe => "Adobe Creative Cloud",
            LicenseType::Microsoft => "Microsoft 365",
            LicenseType::Autodesk => "Autodesk",
            LicenseType::Salesforce => "Salesforce",
            LicenseType::Oracle => "Oracle",
            LicenseType::Sap => "SAP",
            LicenseType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let transcript = Transcript::with_greeting();
        assert_eq!(transcript.messages(), &[ChatMessage::assistant(GREETING)]);
        assert!(!transcript.is_pending());
    }

    #[test]
    fn test_send_appends_one_user_then_one_assistant_message() {
        let mut transcript = Transcript::with_greeting();

        let text = transcript.begin_send("  How do I sell my license?  ");
        assert_eq!(text.as_deref(), Some("How do I sell my license?"));
        assert!(transcript.is_pending());

        transcript.finish_send(FALLBACK_REPLY);

        assert_eq!(
            &transcript.messages()[1..],
            &[
                ChatMessage::user("How do I sell my license?"),
                ChatMessage::assistant(FALLBACK_REPLY),
            ]
        );
        assert!(!transcript.is_pending());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut transcript = Transcript::with_greeting();
        assert_eq!(transcript.begin_send("   \n"), None);
        assert_eq!(transcript.messages().len(), 1);
        assert!(!transcript.is_pending());
    }

    #[test]
    fn test_second_send_while_pending_is_refused() {
        let mut transcript = Transcript::with_greeting();
        transcript.begin_send("first");

        assert_eq!(transcript.begin_send("second"), None);
        assert_eq!(transcript.messages().len(), 2);

        transcript.finish_send("reply");
        assert_eq!(transcript.begin_send("second").as_deref(), Some("second"));
    }

    #[test]
    fn test_stray_reply_is_dropped() {
        let mut transcript = Transcript::with_greeting();
        transcript.finish_send("unexpected");
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn test_license_type_values_round_trip() {
        for license in LicenseType::ALL {
            assert_eq!(LicenseType::from_value(license.value()), Some(license));
        }
        assert_eq!(LicenseType::Adobe.label(), "Adobe Creative Cloud");
        assert_eq!(LicenseType::from_value(""), None);
    }

    #[test]
    fn test_chat_response_without_fallback_flag() {
        let response: ChatResponse = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
        assert_eq!(response.response, "hi");
        assert!(!response.fallback);
    }
}
