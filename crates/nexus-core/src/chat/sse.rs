//! Server-sent-event decoding for the chat completions stream.
//!
//! [`SseDecoder`] is the byte-level state machine: feed it raw chunks, get
//! back completed text deltas. [`DeltaStream`] wraps a decoded source as a
//! finite, non-restartable pull stream with an explicit [`AbortHandle`].

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};
use serde::Deserialize;
use tokio::sync::watch;
use tracing::debug;

use crate::error::ChatError;

/// Terminator line payload ending the stream early.
const DONE_SENTINEL: &str = "[DONE]";

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Option<StreamDelta>,
    /// Non-streaming shape some providers return chunk-wise.
    #[serde(default)]
    message: Option<StreamMessage>,
}

#[derive(Deserialize)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct StreamMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Incremental SSE line decoder. Buffers raw bytes, splits on newline
/// boundaries, parses `data:`-prefixed lines as JSON chunks, and skips
/// malformed lines without aborting the rest of the stream.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
    done: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the `[DONE]` sentinel has been seen; later pushes yield
    /// nothing.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feeds one raw chunk and returns every completed text delta it
    /// produced.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut out = Vec::new();
        if self.done {
            return out;
        }
        self.buf.extend_from_slice(chunk);
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let mut line = &line[..line.len() - 1];
            if line.last() == Some(&b'\r') {
                line = &line[..line.len() - 1];
            }
            let text = String::from_utf8_lossy(line);
            if let Some(delta) = self.handle_line(text.trim()) {
                out.push(delta);
            }
            if self.done {
                break;
            }
        }
        out
    }

    fn handle_line(&mut self, line: &str) -> Option<String> {
        let data = line.strip_prefix("data:")?.trim();
        if data.is_empty() {
            return None;
        }
        if data == DONE_SENTINEL {
            self.done = true;
            return None;
        }
        match serde_json::from_str::<StreamChunk>(data) {
            Ok(chunk) => chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| {
                    choice
                        .delta
                        .and_then(|d| d.content)
                        .or_else(|| choice.message.and_then(|m| m.content))
                })
                .filter(|content| !content.is_empty()),
            Err(e) => {
                debug!(error = %e, "skipping malformed stream line");
                None
            }
        }
    }
}

/// Aborts an in-flight [`DeltaStream`]. Aborting ends the stream cleanly:
/// text accumulated so far stands, and no error is surfaced.
#[derive(Clone)]
pub struct AbortHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl AbortHandle {
    pub fn abort(&self) {
        let _ = self.tx.send(true);
    }
}

/// A finite, non-restartable stream of decoded text fragments. Consumed by a
/// fold that appends each fragment to the trailing assistant message.
pub struct DeltaStream {
    inner: Pin<Box<dyn Stream<Item = Result<String, ChatError>> + Send>>,
    abort: AbortHandle,
}

impl DeltaStream {
    /// Wraps any delta source with abort plumbing.
    pub fn new<S>(source: S) -> Self
    where
        S: Stream<Item = Result<String, ChatError>> + Send + 'static,
    {
        let (tx, mut rx) = watch::channel(false);
        let stream = async_stream::stream! {
            let mut source = Box::pin(source);
            loop {
                let item = tokio::select! {
                    changed = rx.changed() => {
                        if changed.is_err() || *rx.borrow() {
                            break;
                        }
                        continue;
                    }
                    item = source.next() => item,
                };
                match item {
                    Some(value) => yield value,
                    None => break,
                }
            }
        };
        Self {
            inner: Box::pin(stream),
            abort: AbortHandle { tx: Arc::new(tx) },
        }
    }

    /// Decodes a raw SSE byte stream (e.g. `reqwest`'s body stream) into
    /// deltas, ending early at the `[DONE]` sentinel.
    pub fn from_sse<B, T>(bytes: B) -> Self
    where
        B: Stream<Item = Result<T, reqwest::Error>> + Send + 'static,
        T: AsRef<[u8]> + Send + 'static,
    {
        let decoded = async_stream::stream! {
            let mut decoder = SseDecoder::new();
            let mut bytes = Box::pin(bytes);
            while let Some(chunk) = bytes.next().await {
                match chunk {
                    Ok(chunk) => {
                        for delta in decoder.push(chunk.as_ref()) {
                            yield Ok(delta);
                        }
                        if decoder.is_done() {
                            break;
                        }
                    }
                    Err(e) => {
                        yield Err(ChatError::Http(e));
                        break;
                    }
                }
            }
        };
        Self::new(decoded)
    }

    /// A single-delta stream, used for the non-streaming response fallback.
    pub fn once(text: String) -> Self {
        Self::new(futures_util::stream::iter([Ok(text)]))
    }

    /// Handle for cancelling this stream from outside the consuming fold.
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }
}

impl Stream for DeltaStream {
    type Item = Result<String, ChatError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_line(delta: &str) -> String {
        format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":\"{}\"}}}}]}}\n",
            delta
        )
    }

    #[test]
    fn decodes_deltas_and_stops_at_done() {
        let mut decoder = SseDecoder::new();
        let mut out = decoder.push(data_line("Hi").as_bytes());
        out.extend(decoder.push(data_line(" there").as_bytes()));
        out.extend(decoder.push(b"data: [DONE]\n"));
        assert_eq!(out, vec!["Hi", " there"]);
        assert!(decoder.is_done());
        assert!(decoder.push(data_line("late").as_bytes()).is_empty());
    }

    #[test]
    fn skips_malformed_lines_without_aborting() {
        let mut decoder = SseDecoder::new();
        let mut out = decoder.push(data_line("Hi").as_bytes());
        out.extend(decoder.push(b"data: {not json}\n"));
        out.extend(decoder.push(data_line(" there").as_bytes()));
        assert_eq!(out, vec!["Hi", " there"]);
        assert!(!decoder.is_done());
    }

    #[test]
    fn handles_chunks_split_mid_line() {
        let mut decoder = SseDecoder::new();
        let line = data_line("Hello");
        let (a, b) = line.as_bytes().split_at(17);
        assert!(decoder.push(a).is_empty());
        assert_eq!(decoder.push(b), vec!["Hello"]);
    }

    #[test]
    fn handles_crlf_and_ignores_non_data_lines() {
        let mut decoder = SseDecoder::new();
        let out = decoder.push(b": keepalive\r\nevent: ping\r\n");
        assert!(out.is_empty());
        let out = decoder.push(
            b"data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\r\n",
        );
        assert_eq!(out, vec!["ok"]);
    }

    #[test]
    fn falls_back_to_message_content() {
        let mut decoder = SseDecoder::new();
        let out = decoder.push(
            b"data: {\"choices\":[{\"message\":{\"content\":\"full text\"}}]}\n",
        );
        assert_eq!(out, vec!["full text"]);
    }

    #[tokio::test]
    async fn abort_ends_a_pending_stream() {
        let mut stream = DeltaStream::new(futures_util::stream::pending());
        let handle = stream.abort_handle();
        handle.abort();
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn delta_stream_yields_source_items() {
        let mut stream = DeltaStream::new(futures_util::stream::iter([
            Ok("a".to_string()),
            Ok("b".to_string()),
        ]));
        assert_eq!(stream.next().await.unwrap().unwrap(), "a");
        assert_eq!(stream.next().await.unwrap().unwrap(), "b");
        assert!(stream.next().await.is_none());
    }
}
