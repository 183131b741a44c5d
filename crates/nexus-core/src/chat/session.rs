//! Chat widget state machine: message history, visibility toggle, and the
//! single-send-in-flight guard.
//!
//! Per message the session moves `idle → sending → streaming-append → idle`,
//! or `idle → sending → error → idle`. History is append-only during a send:
//! deltas accumulate into the trailing assistant placeholder, never into new
//! entries.

use std::sync::Arc;

use futures_util::StreamExt;
use tracing::warn;

use super::client::ChatBackend;
use super::types::{
    build_wire_messages, ChatMessage, CONNECTION_ERROR_TEXT, GREETING_TEXT, OFFLINE_ERROR_TEXT,
};
use crate::config::ChatConfig;
use crate::error::ChatError;

/// One visitor's chat session. Independent of the content store.
pub struct ChatSession {
    backend: Arc<dyn ChatBackend>,
    config: ChatConfig,
    history: Vec<ChatMessage>,
    open: bool,
    sending: bool,
}

impl ChatSession {
    pub fn new(config: ChatConfig, backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            config,
            history: vec![ChatMessage::assistant(GREETING_TEXT)],
            open: false,
            sending: false,
        }
    }

    /// Toggles widget visibility. Does not touch message history.
    pub fn toggle_open(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a send is in flight; the input control stays disabled.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Sends one message and folds the response stream into history.
    pub async fn send(&mut self, input: &str) {
        self.send_with(input, |_| {}).await;
    }

    /// Like [`send`](Self::send), invoking `on_delta` for each decoded
    /// fragment so callers can relay the stream while it accumulates.
    pub async fn send_with(&mut self, input: &str, mut on_delta: impl FnMut(&str)) {
        let text = input.trim();
        if text.is_empty() || self.sending {
            return;
        }
        self.sending = true;
        self.history.push(ChatMessage::user(text));

        // Credential check happens before the placeholder exists so the
        // offline case appends exactly one assistant message.
        if self.config.api_key.is_none() {
            self.history
                .push(ChatMessage::assistant_error(OFFLINE_ERROR_TEXT));
            self.sending = false;
            return;
        }

        let wire = build_wire_messages(&self.history);
        self.history.push(ChatMessage::assistant(""));

        match self.backend.stream_chat(wire).await {
            Ok(mut stream) => {
                let mut accumulated = String::new();
                let mut failed = false;
                while let Some(item) = stream.next().await {
                    match item {
                        Ok(delta) => {
                            accumulated.push_str(&delta);
                            if let Some(last) = self.history.last_mut() {
                                last.text.clone_from(&accumulated);
                            }
                            on_delta(&delta);
                        }
                        Err(e) => {
                            warn!(error = %e, "chat stream failed mid-response");
                            failed = true;
                            break;
                        }
                    }
                }
                if failed {
                    self.mark_failed(CONNECTION_ERROR_TEXT);
                }
            }
            Err(ChatError::MissingCredential) => {
                self.mark_failed(OFFLINE_ERROR_TEXT);
            }
            Err(e) => {
                warn!(error = %e, "chat request failed");
                self.mark_failed(CONNECTION_ERROR_TEXT);
            }
        }
        self.sending = false;
    }

    /// Converts the trailing assistant placeholder into the fixed
    /// error-flagged message. Details never reach the visitor.
    fn mark_failed(&mut self, message: &str) {
        if let Some(last) = self.history.last_mut() {
            last.text = message.to_string();
            last.is_error = true;
        }
    }
}
