//! Upstream event-stream to fragment-stream translation
//!
//! The provider speaks a line-oriented SSE protocol where each `data:` line
//! carries one JSON frame with an incremental delta, terminated by a
//! `[DONE]` sentinel. Network chunks split lines at arbitrary byte
//! boundaries, so lines are re-assembled before interpretation; one corrupt
//! frame skips that line only, never the stream.

use std::collections::VecDeque;

use futures::{stream, StreamExt};
use serde::Deserialize;
use tracing::error;

use crate::domain::{FragmentStream, STREAM_FALLBACK_REPLY};
use crate::infrastructure::http::ByteStream;

const DATA_PREFIX: &str = "data:";
const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, Deserialize)]
struct StreamFrame {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Incremental SSE line decoder. Buffers partial lines across chunks and
/// emits the non-empty delta text of each complete data frame, in order.
///
/// The buffer holds raw bytes: chunk boundaries can land inside a multi-byte
/// UTF-8 sequence, so decoding happens per complete line, never per chunk.
#[derive(Debug, Default)]
pub(crate) struct SseDecoder {
    buf: Vec<u8>,
    done: bool,
}

impl SseDecoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_done(&self) -> bool {
        self.done
    }

    /// Feed one network chunk; returns the fragments completed by it.
    pub(crate) fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut fragments = Vec::new();

        if self.done {
            return fragments;
        }

        self.buf.extend_from_slice(chunk);

        while let Some(newline) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&line);

            match decode_line(line.trim_end_matches(['\n', '\r'])) {
                LineEvent::Fragment(text) => fragments.push(text),
                LineEvent::Done => {
                    self.done = true;
                    break;
                }
                LineEvent::Nothing => {}
            }
        }

        fragments
    }
}

enum LineEvent {
    Fragment(String),
    Done,
    Nothing,
}

fn decode_line(line: &str) -> LineEvent {
    // The upstream protocol interleaves non-data lines (comments, blank
    // keep-alives); those are not errors, just noise.
    let Some(data) = line.strip_prefix(DATA_PREFIX) else {
        return LineEvent::Nothing;
    };
    let data = data.trim();

    if data == DONE_SENTINEL {
        return LineEvent::Done;
    }

    match extract_delta(data) {
        Some(text) if !text.is_empty() => LineEvent::Fragment(text),
        _ => LineEvent::Nothing,
    }
}

/// Delta text of one frame. Malformed JSON or a missing content field is an
/// empty extraction for that line, not a stream failure.
fn extract_delta(data: &str) -> Option<String> {
    let frame: StreamFrame = serde_json::from_str(data).ok()?;
    frame.choices.into_iter().next()?.delta.content
}

struct TransformState {
    bytes: ByteStream,
    decoder: SseDecoder,
    pending: VecDeque<String>,
    failed: bool,
}

/// Adapt an upstream byte stream into the downstream fragment stream.
///
/// Pull-based: nothing is read upstream until the consumer asks for the next
/// fragment, and dropping the returned stream drops the upstream body. If
/// the connection errors mid-stream, exactly one terminal apology fragment
/// is emitted and the stream ends.
pub fn fragments(bytes: ByteStream) -> FragmentStream {
    let state = TransformState {
        bytes,
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
        failed: false,
    };

    Box::pin(stream::unfold(state, |mut state| async move {
        loop {
            if let Some(fragment) = state.pending.pop_front() {
                return Some((fragment, state));
            }

            if state.failed || state.decoder.is_done() {
                return None;
            }

            match state.bytes.next().await {
                Some(Ok(chunk)) => state.pending.extend(state.decoder.feed(&chunk)),
                Some(Err(e)) => {
                    error!(error = %e, "Error in streaming completion");
                    state.failed = true;
                    return Some((STREAM_FALLBACK_REPLY.to_string(), state));
                }
                None => return None,
            }
        }
    }))
}
