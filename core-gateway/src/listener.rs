//! Listener Adapter & single-slot registration
//!
//! The adapter is the one object registered with the SDK's notification
//! interface. Its callbacks run on whatever thread the SDK chooses, so each
//! one does construct-and-enqueue work only: build the canonical event,
//! hand it to the dispatcher. No notification is filtered, rate-limited, or
//! coalesced — every callback invocation maps to exactly one event.
//!
//! The SDK's "set one global listener" pattern is modeled explicitly as
//! [`ListenerSlot`]: one active registration at a time with a last-write-wins
//! replace. Replacement does not hand off atomically — callbacks already in
//! flight may still reach the previous adapter. Since every adapter feeds
//! the same dispatcher queue, that race never reorders delivered events.

use std::sync::{Arc, Mutex};

use bridge_traits::sdk::{ErrorKind, SdkState, StatusListener};
use core_runtime::dispatch::EventDispatcher;
use core_runtime::events::SdkEvent;
use tracing::debug;

/// The single registered sink for SDK notifications.
pub struct ListenerAdapter {
    dispatcher: EventDispatcher,
}

impl ListenerAdapter {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self { dispatcher }
    }
}

impl StatusListener for ListenerAdapter {
    fn on_state_change(&self, state: SdkState) {
        debug!(state = %state, "onStateChange");
        self.dispatcher.dispatch(SdkEvent::StateChanged(state));
    }

    fn on_error(&self, code: ErrorKind, message: Option<String>) {
        debug!(code = %code, message = ?message, "onError");
        self.dispatcher
            .dispatch(SdkEvent::ErrorOccurred { code, message });
    }

    fn ask_permissions(&self, permissions: Vec<String>) {
        debug!(?permissions, "askPermissions");
        self.dispatcher
            .dispatch(SdkEvent::PermissionsRequested(permissions));
    }
}

/// Single-slot registration holding the currently active adapter.
#[derive(Default)]
pub struct ListenerSlot {
    active: Mutex<Option<Arc<ListenerAdapter>>>,
}

impl ListenerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `adapter` as the active listener, returning the one it
    /// replaced. Last write wins.
    pub fn replace(&self, adapter: Arc<ListenerAdapter>) -> Option<Arc<ListenerAdapter>> {
        self.active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .replace(adapter)
    }

    /// The currently active adapter, if `initialize` has run.
    pub fn active(&self) -> Option<Arc<ListenerAdapter>> {
        self.active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::channel::{EmbeddingSink, EmittedEvent};
    use bridge_traits::error::Result;
    use std::time::Duration;

    #[derive(Default)]
    struct CollectingSink {
        events: Mutex<Vec<EmittedEvent>>,
    }

    impl EmbeddingSink for CollectingSink {
        fn emit(&self, event: EmittedEvent) -> Result<()> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_each_callback_produces_one_event() {
        let sink = Arc::new(CollectingSink::default());
        let dispatcher = EventDispatcher::spawn(sink.clone());
        let adapter = ListenerAdapter::new(dispatcher);

        adapter.on_state_change(SdkState::new("RUNNING"));
        adapter.on_error(ErrorKind::new("UPLOAD_FAILED"), Some("timeout".to_string()));
        adapter.ask_permissions(vec!["LOCATION".to_string(), "ACTIVITY_RECOGNITION".to_string()]);
        tokio::time::sleep(Duration::from_millis(20)).await;

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].name, "SDK_STATE");
        assert_eq!(events[0].payload["newState"], "RUNNING");
        assert_eq!(events[1].name, "SDK_ERROR");
        assert_eq!(events[1].payload["error"], "UPLOAD_FAILED:timeout");
        assert_eq!(events[2].name, "SDK_PERMISSIONS");
        assert_eq!(
            events[2].payload["permissions"],
            serde_json::json!(["LOCATION", "ACTIVITY_RECOGNITION"])
        );
    }

    #[tokio::test]
    async fn test_slot_replace_is_last_write_wins() {
        let sink = Arc::new(CollectingSink::default());
        let dispatcher = EventDispatcher::spawn(sink);

        let slot = ListenerSlot::new();
        assert!(slot.active().is_none());

        let first = Arc::new(ListenerAdapter::new(dispatcher.clone()));
        let second = Arc::new(ListenerAdapter::new(dispatcher));

        assert!(slot.replace(first.clone()).is_none());
        let replaced = slot.replace(second.clone()).unwrap();
        assert!(Arc::ptr_eq(&replaced, &first));
        assert!(Arc::ptr_eq(&slot.active().unwrap(), &second));
    }
}
