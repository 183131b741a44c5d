//! Chat widget pipeline: history state machine, wire schema, streaming
//! client, and SSE decoding. A parallel subsystem with no shared state with
//! the content store.

pub mod client;
pub mod session;
pub mod sse;
pub mod types;

pub use client::{ChatBackend, GroqClient};
pub use session::ChatSession;
pub use sse::{AbortHandle, DeltaStream, SseDecoder};
pub use types::{
    build_wire_messages, ChatMessage, ChatRole, WireMessage, WireRequest, WireRole,
    CONNECTION_ERROR_TEXT, DEFAULT_CHAT_API_URL, DEFAULT_CHAT_MODEL, GREETING_TEXT,
    OFFLINE_ERROR_TEXT, SYSTEM_INSTRUCTION,
};
