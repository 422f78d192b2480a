//! Embedding Runtime Event Channel Contract
//!
//! Outbound half of the bridge: named events carrying a single JSON payload,
//! delivered to whatever event queue the embedding runtime exposes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A named event in the shape the embedding side consumes.
///
/// `name` selects the subscription (`SDK_STATE`, `SDK_PERMISSIONS`,
/// `SDK_ERROR`); `payload` is a single JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmittedEvent {
    pub name: String,
    pub payload: Value,
}

impl EmittedEvent {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// Event channel of the embedding runtime.
///
/// Implementations are responsible for marshalling onto whatever execution
/// context the embedding runtime requires for safe emission (commonly its
/// UI/main context), queuing if that context is busy. `emit` itself is
/// called from a single dispatch task and must not block for long.
///
/// A torn-down channel should report [`BridgeError::ChannelClosed`]; the
/// dispatcher treats delivery as best-effort and will not retry.
///
/// [`BridgeError::ChannelClosed`]: crate::error::BridgeError::ChannelClosed
pub trait EmbeddingSink: Send + Sync {
    /// Deliver one event to the embedding side.
    fn emit(&self, event: EmittedEvent) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emitted_event_serializes_payload_as_object() {
        let event = EmittedEvent::new("SDK_STATE", json!({ "newState": "RUNNING" }));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["name"], "SDK_STATE");
        assert_eq!(json["payload"]["newState"], "RUNNING");
    }
}
