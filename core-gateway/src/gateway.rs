//! Command Gateway
//!
//! The inbound half of the bridge: four typed operations forwarded to the
//! SDK's control interface with no business logic in between. Every
//! operation is synchronous from the embedding side's point of view — it
//! returns once the call has been forwarded — and none can fail
//! synchronously. All failure visibility is asynchronous, via the
//! `SDK_ERROR` event channel.

use std::collections::HashMap;
use std::sync::Arc;

use bridge_traits::channel::EmbeddingSink;
use bridge_traits::notification::NotificationHost;
use bridge_traits::sdk::RecorderControl;
use core_runtime::dispatch::EventDispatcher;
use core_runtime::logging::redact_credential;
use tracing::debug;

use crate::command::Command;
use crate::config::ConfigBuilder;
use crate::listener::{ListenerAdapter, ListenerSlot};

/// Stable module name the bridge registers under with the embedding host.
pub const MODULE_NAME: &str = "TruemetricsSdkModule";

/// Aggregated handle to the collaborators the bridge requires.
pub struct BridgeDependencies {
    pub sdk: Arc<dyn RecorderControl>,
    pub notifications: Arc<dyn NotificationHost>,
    pub embedding: Arc<dyn EmbeddingSink>,
}

impl BridgeDependencies {
    /// Construct a dependency bundle from explicit collaborator handles.
    pub fn new(
        sdk: Arc<dyn RecorderControl>,
        notifications: Arc<dyn NotificationHost>,
        embedding: Arc<dyn EmbeddingSink>,
    ) -> Self {
        Self {
            sdk,
            notifications,
            embedding,
        }
    }
}

/// Primary facade exposed to the embedding host.
///
/// Owns the dispatcher feeding the embedding channel and the single listener
/// registration slot. Cheap to clone; clones share all state.
///
/// Must be created within a Tokio runtime (the dispatcher's consumer task is
/// spawned on construction).
#[derive(Clone)]
pub struct SdkBridge {
    deps: Arc<BridgeDependencies>,
    dispatcher: EventDispatcher,
    listener: Arc<ListenerSlot>,
}

impl SdkBridge {
    /// Create a new bridge from the provided collaborators.
    pub fn new(deps: BridgeDependencies) -> Self {
        let dispatcher = EventDispatcher::spawn(Arc::clone(&deps.embedding));
        Self {
            deps: Arc::new(deps),
            dispatcher,
            listener: Arc::new(ListenerSlot::new()),
        }
    }

    /// Initialize the SDK with `api_key`.
    ///
    /// Builds the init config (registering the foreground notification
    /// channel as an idempotent side effect), installs a fresh listener
    /// adapter as the SDK's sole notification sink, then forwards the
    /// initialization call. Calling twice forwards twice; deduplication and
    /// re-initialization semantics belong to the SDK.
    pub fn initialize(&self, api_key: &str) {
        debug!(api_key = %redact_credential(api_key), "initialize");

        let config = ConfigBuilder::new(api_key).build(self.deps.notifications.as_ref());

        let adapter = Arc::new(ListenerAdapter::new(self.dispatcher.clone()));
        self.listener.replace(Arc::clone(&adapter));
        self.deps.sdk.set_status_listener(adapter);
        self.deps.sdk.initialize(config);
    }

    /// Begin a recording session. Pass-through; precondition failures
    /// surface on the error event channel.
    pub fn start_recording(&self) {
        debug!("startRecording");
        self.deps.sdk.start_recording();
    }

    /// End the current recording session. Pass-through.
    pub fn stop_recording(&self) {
        debug!("stopRecording");
        self.deps.sdk.stop_recording();
    }

    /// Attach one metadata pair to the current session.
    ///
    /// Exactly one key/value pair per call; multiple pairs require multiple
    /// calls. Pairs from distinct calls are never merged.
    pub fn log_metadata(&self, key: &str, value: &str) {
        debug!(key, value, "logMetadata");

        let mut metadata = HashMap::with_capacity(1);
        metadata.insert(key.to_string(), value.to_string());
        self.deps.sdk.log_metadata(metadata);
    }

    /// Dispatch a data-shaped command to the operation it names.
    pub fn handle(&self, command: Command) {
        match command {
            Command::Initialize { api_key } => self.initialize(&api_key),
            Command::StartRecording => self.start_recording(),
            Command::StopRecording => self.stop_recording(),
            Command::LogMetadata { key, value } => self.log_metadata(&key, &value),
        }
    }

    /// Access the collaborators backing this bridge.
    pub fn dependencies(&self) -> Arc<BridgeDependencies> {
        Arc::clone(&self.deps)
    }
}
