//! Simulated streaming over the non-streaming backend.
//!
//! Generation and replay are separate phases: the client completes the
//! request first, then this producer re-emits the final text as paced
//! word deltas. A real-streaming backend can replace the first phase
//! without touching this one.

use std::time::Duration;

use tokio::time::sleep;

use crate::types::{ChatResponse, ChatStream, ChatStreamEvent};

/// Delay between emitted chunks, to emulate token-by-token arrival.
pub const CHUNK_DELAY: Duration = Duration::from_millis(30);

/// Replay a completed response as a finite event stream.
///
/// The text is split on single spaces — a lossy re-tokenization: runs of
/// whitespace in the original are not preserved, only single-space joins
/// are reconstructed. Every word but the last gets its trailing space
/// re-appended, so concatenating the deltas reproduces the text. Exactly
/// one `StreamEnd` follows the last delta, carrying the finish reason and
/// usage of the underlying response. The stream is finite and not
/// restartable; a fresh call must re-run generation.
pub fn simulate_stream(response: ChatResponse) -> ChatStream {
    let text = response.content_text().unwrap_or_default().to_string();
    let finish_reason = response.finish_reason;
    let usage = response.usage;

    let stream = async_stream::stream! {
        let words: Vec<&str> = text.split(' ').collect();
        let last = words.len().saturating_sub(1);
        for (i, word) in words.iter().enumerate() {
            let delta = if i < last {
                format!("{word} ")
            } else {
                (*word).to_string()
            };
            yield Ok(ChatStreamEvent::ContentDelta { delta });
            sleep(CHUNK_DELAY).await;
        }
        yield Ok(ChatStreamEvent::StreamEnd {
            finish_reason,
            usage,
        });
    };
    Box::pin(stream)
}
