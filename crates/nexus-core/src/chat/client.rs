//! Chat completions client for Groq's OpenAI-compatible API.
//!
//! [`ChatBackend`] is the seam between the session state machine and the
//! network; tests substitute a scripted backend, the gateway wires in
//! [`GroqClient`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{info, warn};

use super::sse::DeltaStream;
use super::types::{WireMessage, WireRequest};
use crate::config::ChatConfig;
use crate::error::ChatError;

/// Transport seam for issuing one streaming completion request.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Issues the request and returns the decoded delta stream.
    async fn stream_chat(&self, messages: Vec<WireMessage>) -> Result<DeltaStream, ChatError>;
}

// Non-streaming response shape, used when the provider answers with a plain
// JSON completion instead of an event stream.
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Deserialize)]
struct ChatMessageBody {
    content: String,
}

/// Reqwest-backed chat client.
pub struct GroqClient {
    config: ChatConfig,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: ChatConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { config, client }
    }
}

#[async_trait]
impl ChatBackend for GroqClient {
    async fn stream_chat(&self, messages: Vec<WireMessage>) -> Result<DeltaStream, ChatError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ChatError::MissingCredential)?;

        let body = WireRequest {
            model: self.config.model.clone(),
            messages,
            stream: true,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = %status, detail = %detail, "chat API rejected the request");
            return Err(ChatError::Api {
                status: status.as_u16(),
            });
        }

        let is_event_stream = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("text/event-stream"))
            .unwrap_or(false);

        if !is_event_stream {
            // Non-streaming fallback: one full completion, yielded as a
            // single delta.
            let parsed: ChatResponse = response.json().await?;
            let text = parsed
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .unwrap_or_default();
            return Ok(DeltaStream::once(text));
        }

        info!(model = %self.config.model, "chat stream established");
        Ok(DeltaStream::from_sse(response.bytes_stream()))
    }
}
