//! Cooperative cancellation for chat streams.
//!
//! The replay producer suspends between chunks; cancellation takes
//! effect at that suspension point and ends the stream. Nothing else is
//! held — the pending delay timer is dropped along with the producer.

use tokio_util::sync::CancellationToken;

use crate::types::ChatStream;

/// Requests that a wrapped stream stop producing.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    /// Signal cancellation. The wrapped stream terminates at its next
    /// suspension point instead of yielding another event.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Wrap a stream so it can be stopped through a [`CancelHandle`].
///
/// A consumer that simply stops pulling gets the same effect by dropping
/// the stream; the handle exists for callers that hand the stream off
/// but keep the right to abort it.
pub fn make_cancellable_stream(stream: ChatStream) -> (ChatStream, CancelHandle) {
    let token = CancellationToken::new();
    let handle = CancelHandle {
        token: token.clone(),
    };
    let wrapped = async_stream::stream! {
        use futures::StreamExt;
        let mut events = stream;
        while let Some(event) = token.run_until_cancelled(events.next()).await.flatten() {
            yield event;
        }
    };
    (Box::pin(wrapped), handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::huggingface::simulate_stream;
    use crate::types::{ChatResponse, ChatStreamEvent, FinishReason};
    use futures_util::StreamExt;

    #[tokio::test(start_paused = true)]
    async fn cancel_ends_a_replay_without_waiting_out_the_delay() {
        let replay = simulate_stream(ChatResponse::text("alpha beta gamma", FinishReason::Stop));
        let (mut stream, handle) = make_cancellable_stream(replay);

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(
            first,
            ChatStreamEvent::ContentDelta {
                delta: "alpha ".to_string()
            }
        );

        handle.cancel();
        assert!(handle.is_cancelled());

        // The producer is parked in its inter-chunk delay. Ending the
        // stream must not require that delay to elapse.
        let before = tokio::time::Instant::now();
        assert!(stream.next().await.is_none());
        assert_eq!(tokio::time::Instant::now(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn uncancelled_wrapper_is_transparent() {
        let replay = simulate_stream(ChatResponse::text("one two", FinishReason::Stop));
        let (stream, handle) = make_cancellable_stream(replay);
        assert!(!handle.is_cancelled());

        let events: Vec<ChatStreamEvent> = stream.map(|event| event.unwrap()).collect().await;
        assert_eq!(events.len(), 3);
        assert!(matches!(
            events.last(),
            Some(ChatStreamEvent::StreamEnd { .. })
        ));
    }
}
