//! Command surface of the bridge, as data.
//!
//! Commands are immutable and fire-and-forget: none carries a synchronous
//! response value, and none can fail synchronously. Hosts that deliver
//! commands as messages deserialize into [`Command`] and hand it to
//! [`SdkBridge::handle`](crate::SdkBridge::handle); hosts with a direct call
//! path use the gateway methods instead.

use serde::{Deserialize, Serialize};

/// One inbound command from the embedding side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    /// Initialize the SDK with the given credential.
    #[serde(rename_all = "camelCase")]
    Initialize { api_key: String },
    /// Begin a recording session.
    StartRecording,
    /// End the current recording session.
    StopRecording,
    /// Attach one key/value metadata pair to the current session.
    LogMetadata { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_wire_shape() {
        let cmd: Command =
            serde_json::from_str(r#"{"command":"initialize","apiKey":"key1"}"#).unwrap();
        assert_eq!(
            cmd,
            Command::Initialize {
                api_key: "key1".to_string()
            }
        );
    }

    #[test]
    fn test_log_metadata_wire_shape() {
        let cmd = Command::LogMetadata {
            key: "session".to_string(),
            value: "abc".to_string(),
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["command"], "logMetadata");
        assert_eq!(json["key"], "session");
        assert_eq!(json["value"], "abc");
    }

    #[test]
    fn test_unit_commands_roundtrip() {
        for cmd in [Command::StartRecording, Command::StopRecording] {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cmd);
        }
    }
}
