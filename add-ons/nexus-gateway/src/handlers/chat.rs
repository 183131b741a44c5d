//! Chat widget routes. Each visitor gets a server-side [`ChatSession`]
//! addressed by the `x-chat-session` header; the streaming route relays
//! decoded deltas as SSE `token` events while the session accumulates them.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use futures_util::StreamExt;
use nexus_core::ChatSession;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;
use tokio_stream::wrappers::UnboundedReceiverStream;
use uuid::Uuid;

use crate::AppState;

/// Header carrying the visitor's chat session id.
pub(crate) const CHAT_SESSION_HEADER: &str = "x-chat-session";

#[derive(Deserialize)]
pub(crate) struct ChatSendRequest {
    message: String,
}

fn get_or_create_session(
    state: &AppState,
    headers: &HeaderMap,
) -> (String, Arc<Mutex<ChatSession>>) {
    if let Some(id) = headers
        .get(CHAT_SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(session) = state.chat_sessions.get(id) {
            return (id.to_string(), Arc::clone(session.value()));
        }
    }
    let id = Uuid::new_v4().to_string();
    let session = Arc::new(Mutex::new(ChatSession::new(
        state.chat_config.clone(),
        Arc::clone(&state.chat_backend),
    )));
    state.chat_sessions.insert(id.clone(), Arc::clone(&session));
    (id, session)
}

/// POST /api/v1/chat – send one message and return the updated history.
pub(crate) async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChatSendRequest>,
) -> impl IntoResponse {
    let (session_id, session) = get_or_create_session(&state, &headers);
    let mut guard = session.lock().await;
    guard.send(&req.message).await;
    let body = json!({
        "session": session_id.clone(),
        "messages": guard.history(),
    });
    drop(guard);
    (
        AppendHeaders([(CHAT_SESSION_HEADER, session_id)]),
        Json(body),
    )
}

/// POST /api/v1/chat/stream – same send, relayed as SSE: one `token` event
/// per decoded delta, then a final `done` event. Errors never surface here;
/// they land in the session history as the fixed error message.
pub(crate) async fn chat_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChatSendRequest>,
) -> impl IntoResponse {
    let (session_id, session) = get_or_create_session(&state, &headers);
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<String>();

    let message = req.message;
    tokio::spawn(async move {
        let mut guard = session.lock().await;
        guard
            .send_with(&message, |delta| {
                let _ = tx.send(delta.to_string());
            })
            .await;
    });

    let tokens = UnboundedReceiverStream::new(rx)
        .map(|delta| Ok::<_, Infallible>(Event::default().event("token").data(delta)));
    let done = futures_util::stream::once(async { Ok(Event::default().event("done").data("")) });
    let stream = tokens.chain(done);

    let keep_alive = KeepAlive::new()
        .interval(Duration::from_secs(15))
        .text("keepalive");
    (
        AppendHeaders([(CHAT_SESSION_HEADER, session_id)]),
        Sse::new(stream).keep_alive(keep_alive),
    )
}
