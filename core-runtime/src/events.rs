//! # Canonical SDK Events
//!
//! The tagged-union representation of SDK notifications used between the
//! listener adapter and the event dispatcher, plus its encoding into the
//! outbound event surface consumed by the embedding side.
//!
//! ## Wire contract
//!
//! | Event name        | Payload shape                              |
//! |-------------------|--------------------------------------------|
//! | `SDK_STATE`       | `{ "newState": string }`                   |
//! | `SDK_PERMISSIONS` | `{ "permissions": [string, ...] }`         |
//! | `SDK_ERROR`       | `{ "error": "<ERROR_CODE>:<message>" }`    |
//!
//! An absent error message renders as the empty string, so the `error`
//! field is `"<ERROR_CODE>:"` in that case. This sentinel is deliberate and
//! fixed; see DESIGN.md.
//!
//! Events are constructed once per SDK callback and consumed immediately by
//! the dispatcher; no history is retained anywhere in the bridge.

use bridge_traits::channel::EmittedEvent;
use bridge_traits::sdk::{ErrorKind, SdkState};
use serde_json::json;

/// Event name for SDK state transitions.
pub const SDK_STATE_EVENT: &str = "SDK_STATE";
/// Event name for SDK permission requests.
pub const SDK_PERMISSIONS_EVENT: &str = "SDK_PERMISSIONS";
/// Event name for SDK-reported errors.
pub const SDK_ERROR_EVENT: &str = "SDK_ERROR";

/// Canonical event produced by the listener adapter, one per SDK callback.
#[derive(Debug, Clone, PartialEq)]
pub enum SdkEvent {
    /// The SDK's state machine moved to a new state.
    StateChanged(SdkState),
    /// The SDK reported an error; `code` is always present.
    ErrorOccurred {
        code: ErrorKind,
        message: Option<String>,
    },
    /// The SDK asked for permissions, in request order.
    PermissionsRequested(Vec<String>),
}

impl SdkEvent {
    /// The outbound event name this event is delivered under.
    pub fn name(&self) -> &'static str {
        match self {
            SdkEvent::StateChanged(_) => SDK_STATE_EVENT,
            SdkEvent::ErrorOccurred { .. } => SDK_ERROR_EVENT,
            SdkEvent::PermissionsRequested(_) => SDK_PERMISSIONS_EVENT,
        }
    }

    /// Returns a human-readable description of the event.
    pub fn description(&self) -> &'static str {
        match self {
            SdkEvent::StateChanged(_) => "SDK state changed",
            SdkEvent::ErrorOccurred { .. } => "SDK reported an error",
            SdkEvent::PermissionsRequested(_) => "SDK requested permissions",
        }
    }

    /// Encode into the wire shape handed to the embedding channel.
    pub fn into_emitted(self) -> EmittedEvent {
        let name = self.name();
        let payload = match self {
            SdkEvent::StateChanged(state) => json!({ "newState": state.name() }),
            SdkEvent::ErrorOccurred { code, message } => {
                json!({ "error": format_error(&code, message.as_deref()) })
            }
            SdkEvent::PermissionsRequested(permissions) => {
                json!({ "permissions": permissions })
            }
        };
        EmittedEvent::new(name, payload)
    }
}

/// String-encode an SDK error signal as `"<code>:<message>"`.
///
/// An absent message encodes as the empty string (`"<code>:"`).
pub fn format_error(code: &ErrorKind, message: Option<&str>) -> String {
    format!("{}:{}", code, message.unwrap_or_default())
}
