//! Recording SDK Control & Notification Contracts
//!
//! The native SDK is an external collaborator: this crate only pins down the
//! surface the bridge talks to. The control interface is imperative and
//! fire-and-forget; the notification interface is callback-based and may be
//! invoked from any thread the SDK owns.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::notification::ForegroundNotice;

/// Opaque label for a state in the SDK's state machine.
///
/// The SDK owns its state enumeration; the bridge only observes state names
/// and forwards them verbatim. Exactly one current state exists at any time,
/// and it is never set from this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkState(pub String);

impl SdkState {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The state's name as reported by the SDK.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SdkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque label for an SDK-defined error code.
///
/// Owned and enumerated by the SDK; forwarded verbatim by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorKind(pub String);

impl ErrorKind {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-time initialization payload for [`RecorderControl::initialize`].
///
/// Built once per `initialize` command, handed to the SDK, and not retained
/// by the bridge.
#[derive(Debug, Clone)]
pub struct InitConfig {
    /// Credential identifying the embedding application to the SDK backend.
    pub api_key: String,
    /// Persistent notification shown while the long-running background
    /// recording operation is alive.
    pub foreground_notice: ForegroundNotice,
    /// Keep the recording operation alive while the app is backgrounded.
    pub keep_alive: bool,
}

/// Notification interface implemented by the bridge and registered with the
/// SDK via [`RecorderControl::set_status_listener`].
///
/// Only one listener is active at a time (last registration wins). The SDK
/// may invoke these callbacks concurrently from arbitrary threads, so
/// implementations must not block or touch the embedding runtime directly —
/// they should only construct an event and enqueue it.
pub trait StatusListener: Send + Sync {
    /// The SDK's state machine transitioned to `state`.
    fn on_state_change(&self, state: SdkState);

    /// The SDK reported an error. `message` may be absent; `code` never is.
    /// Errors are informational forwards, never raised back into the SDK.
    fn on_error(&self, code: ErrorKind, message: Option<String>);

    /// The SDK needs the listed permissions granted, in request order.
    fn ask_permissions(&self, permissions: Vec<String>);
}

/// Control interface of the native recording SDK.
///
/// Every method is non-blocking from the caller's point of view: it returns
/// once the call has been forwarded, never waiting on SDK completion.
/// Precondition failures (e.g., `start_recording` before initialization)
/// surface asynchronously through [`StatusListener::on_error`], not here.
pub trait RecorderControl: Send + Sync {
    /// Initialize the SDK with the given one-time configuration.
    ///
    /// Re-initialization semantics belong to the SDK; the bridge forwards
    /// repeated calls without deduplication.
    fn initialize(&self, config: InitConfig);

    /// Begin a recording session. No effect ordering is guaranteed relative
    /// to subsequently delivered events beyond what the SDK provides.
    fn start_recording(&self);

    /// End the current recording session. The only way to stop a recording;
    /// there is no timeout-based auto-cancellation.
    fn stop_recording(&self);

    /// Attach metadata to the current session. The SDK accepts a mapping;
    /// the bridge always forwards exactly one entry per call.
    fn log_metadata(&self, metadata: HashMap<String, String>);

    /// Register `listener` as the sole notification sink, replacing any
    /// previous registration. Callbacks already in flight may still reach
    /// the previous listener.
    fn set_status_listener(&self, listener: Arc<dyn StatusListener>);
}
