//! Core error types. User-facing surfaces map these to fixed, non-technical
//! messages; the underlying cause only reaches tracing output.

use thiserror::Error;

/// Errors raised by the content store and provider lifecycle.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("durable storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Raised when a consumer reaches for the store outside the provider's
    /// active lifetime. Programmer error, not a recoverable runtime state.
    #[error("content provider is not active (accessed after shutdown)")]
    ProviderClosed,
    /// A destructive reset was confirmed with a stale or unknown token.
    #[error("reset was not confirmed with a valid token")]
    ResetNotConfirmed,
}

/// Errors raised by the chat pipeline.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API credential configured. Detected before any network call.
    #[error("chat credential is not configured")]
    MissingCredential,
    #[error("chat transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chat API returned status {status}")]
    Api { status: u16 },
}

/// Error raised by the contact relay. Deliberately opaque: the caller shows a
/// generic failure message and the detail stays in the logs.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact relay request failed")]
    RelayFailed,
}
