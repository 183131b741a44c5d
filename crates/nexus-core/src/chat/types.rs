//! Chat message types and the OpenAI-compatible wire schema.

use serde::{Deserialize, Serialize};

/// Default model when no override is configured.
pub const DEFAULT_CHAT_MODEL: &str = "groq/compound";

/// Chat completions endpoint used when no override is configured.
pub const DEFAULT_CHAT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Greeting seeded into every fresh session.
pub const GREETING_TEXT: &str =
    "System Online. I am NEXUS-019, Saquib Nazeer's AI assistant. How can I assist you today?";

/// Shown when no API credential is configured. Detected before any network
/// call.
pub const OFFLINE_ERROR_TEXT: &str = "Error: API Protocol Offline (Missing Key).";

/// Shown on any transport or API failure. The underlying cause never reaches
/// the visitor.
pub const CONNECTION_ERROR_TEXT: &str = "Connection Error: Unable to reach neural net.";

/// System instruction for the assistant persona.
pub const SYSTEM_INSTRUCTION: &str = "\
You are NEXUS-019, the AI portfolio assistant for Saquib Nazeer.
Your goal is to impress visitors with Saquib's skills in Full Stack Development, AI integration, and futuristic UI design.
Keep responses concise, professional, yet slightly \"tech-savvy\" or \"cyberpunk\" in tone.
If asked about contact info, direct them to the contact form at the bottom.
Highlight that this website itself is a demonstration of Saquib's engineering skills.
Do not make up false projects not listed in the context.";

/// Who authored a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the widget's message history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn assistant_error(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            is_error: true,
        }
    }
}

/// Wire role, constrained to the three values the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    System,
    User,
    Assistant,
}

/// One `{role, content}` pair in the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: WireRole,
    pub content: String,
}

/// Streaming chat-completions request body.
#[derive(Debug, Clone, Serialize)]
pub struct WireRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub stream: bool,
    pub temperature: f32,
}

/// Converts widget history into the request message array: the system
/// instruction first, then every non-empty turn in order.
pub fn build_wire_messages(history: &[ChatMessage]) -> Vec<WireMessage> {
    let mut out = Vec::with_capacity(history.len() + 1);
    out.push(WireMessage {
        role: WireRole::System,
        content: SYSTEM_INSTRUCTION.to_string(),
    });
    out.extend(
        history
            .iter()
            .filter(|m| !m.text.trim().is_empty())
            .map(|m| WireMessage {
                role: match m.role {
                    ChatRole::User => WireRole::User,
                    ChatRole::Assistant => WireRole::Assistant,
                },
                content: m.text.clone(),
            }),
    );
    out
}
