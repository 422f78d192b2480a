//! Queue-backed embedding channel.

use bridge_traits::channel::{EmbeddingSink, EmittedEvent};
use bridge_traits::error::{BridgeError, Result};
use tokio::sync::mpsc;
use tracing::trace;

/// `EmbeddingSink` backed by an unbounded Tokio channel.
///
/// The returned receiver is the embedding side's event queue: the host polls
/// it from whatever execution context it considers safe, which is exactly
/// the marshalling step the dispatcher's contract requires. Dropping the
/// receiver tears the channel down; subsequent emissions fail with
/// [`BridgeError::ChannelClosed`] and are swallowed upstream.
pub struct ChannelEmbeddingSink {
    tx: mpsc::UnboundedSender<EmittedEvent>,
}

impl ChannelEmbeddingSink {
    /// Create the sink and the receiving end of the embedding event queue.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<EmittedEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EmbeddingSink for ChannelEmbeddingSink {
    fn emit(&self, event: EmittedEvent) -> Result<()> {
        trace!(event = %event.name, "emitting to embedding queue");
        self.tx.send(event).map_err(|_| BridgeError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_emitted_events_arrive_in_order() {
        let (sink, mut rx) = ChannelEmbeddingSink::new();

        sink.emit(EmittedEvent::new("SDK_STATE", json!({ "newState": "A" })))
            .unwrap();
        sink.emit(EmittedEvent::new("SDK_STATE", json!({ "newState": "B" })))
            .unwrap();

        assert_eq!(rx.recv().await.unwrap().payload["newState"], "A");
        assert_eq!(rx.recv().await.unwrap().payload["newState"], "B");
    }

    #[tokio::test]
    async fn test_emit_after_teardown_reports_closed() {
        let (sink, rx) = ChannelEmbeddingSink::new();
        drop(rx);

        let result = sink.emit(EmittedEvent::new("SDK_STATE", json!({})));
        assert!(matches!(result, Err(BridgeError::ChannelClosed)));
    }
}
