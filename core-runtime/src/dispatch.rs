//! # Event Dispatcher
//!
//! Delivers canonical events to the embedding runtime's event channel.
//!
//! ## Threading contract
//!
//! SDK callbacks arrive on arbitrary threads that are unsafe for direct
//! interaction with the embedding runtime. The dispatcher therefore splits
//! delivery into two halves:
//!
//! - a cheaply cloneable producer handle ([`EventDispatcher::dispatch`]) that
//!   only enqueues, callable from any thread without blocking, and
//! - a single consumer task that owns the queue's receiving end and performs
//!   every [`EmbeddingSink::emit`] call, serializing delivery onto one
//!   execution context.
//!
//! One queue, one consumer: events are emitted in the exact order their
//! originating callbacks enqueued them (FIFO, no reordering across event
//! kinds, no batching), and each enqueued event maps to exactly one emission
//! attempt.
//!
//! ## Failure semantics
//!
//! Delivery is best-effort. If the embedding channel is torn down the
//! emission failure is logged at debug level and the event dropped; the
//! dispatcher never retries or buffers across a torn-down channel. Likewise,
//! dispatching after the consumer task has exited is a logged no-op.

use std::fmt;
use std::sync::Arc;

use bridge_traits::channel::EmbeddingSink;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::events::SdkEvent;

/// Producer handle for the event delivery queue.
///
/// Clones share the same queue and consumer task. The consumer task exits
/// once every handle has been dropped, which in this bridge only happens at
/// process teardown.
#[derive(Clone)]
pub struct EventDispatcher {
    tx: mpsc::UnboundedSender<SdkEvent>,
}

impl EventDispatcher {
    /// Spawn the consumer task delivering onto `sink` and return the
    /// producer handle.
    ///
    /// Must be called within a Tokio runtime.
    pub fn spawn(sink: Arc<dyn EmbeddingSink>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<SdkEvent>();

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let name = event.name();
                trace!(event = name, "delivering event to embedding channel");
                if let Err(err) = sink.emit(event.into_emitted()) {
                    // Best-effort delivery: a torn-down channel is not ours
                    // to recover.
                    debug!(event = name, error = %err, "event emission failed; dropping");
                }
            }
            debug!("event dispatch task finished");
        });

        Self { tx }
    }

    /// Enqueue one event for delivery. Non-blocking, callable from any
    /// thread, including SDK callback threads.
    pub fn dispatch(&self, event: SdkEvent) {
        if self.tx.send(event).is_err() {
            debug!("dispatch queue closed; dropping event");
        }
    }

    /// Whether the consumer task is still draining the queue.
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("open", &self.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::channel::EmittedEvent;
    use bridge_traits::error::{BridgeError, Result};
    use bridge_traits::sdk::{ErrorKind, SdkState};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Sink that records every emission, or fails after being torn down.
    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<EmittedEvent>>,
        torn_down: Mutex<bool>,
    }

    impl RecordingSink {
        fn tear_down(&self) {
            *self.torn_down.lock().unwrap() = true;
        }

        fn events(&self) -> Vec<EmittedEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl EmbeddingSink for RecordingSink {
        fn emit(&self, event: EmittedEvent) -> Result<()> {
            if *self.torn_down.lock().unwrap() {
                return Err(BridgeError::ChannelClosed);
            }
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    async fn settle() {
        // Give the consumer task a chance to drain the queue.
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn test_events_delivered_in_fifo_order() {
        let sink = Arc::new(RecordingSink::default());
        let dispatcher = EventDispatcher::spawn(sink.clone());

        dispatcher.dispatch(SdkEvent::StateChanged(SdkState::new("INITIALIZING")));
        dispatcher.dispatch(SdkEvent::PermissionsRequested(vec!["LOCATION".into()]));
        dispatcher.dispatch(SdkEvent::StateChanged(SdkState::new("RUNNING")));
        settle().await;

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].name, "SDK_STATE");
        assert_eq!(events[0].payload["newState"], "INITIALIZING");
        assert_eq!(events[1].name, "SDK_PERMISSIONS");
        assert_eq!(events[2].payload["newState"], "RUNNING");
    }

    #[tokio::test]
    async fn test_exactly_one_emission_per_dispatch() {
        let sink = Arc::new(RecordingSink::default());
        let dispatcher = EventDispatcher::spawn(sink.clone());

        for i in 0..50 {
            dispatcher.dispatch(SdkEvent::StateChanged(SdkState::new(format!("S{i}"))));
        }
        settle().await;

        let events = sink.events();
        assert_eq!(events.len(), 50);
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.payload["newState"], format!("S{i}"));
        }
    }

    #[tokio::test]
    async fn test_dispatch_from_foreign_thread() {
        let sink = Arc::new(RecordingSink::default());
        let dispatcher = EventDispatcher::spawn(sink.clone());

        // SDK callbacks arrive on threads the runtime does not own.
        let handle = {
            let dispatcher = dispatcher.clone();
            std::thread::spawn(move || {
                for i in 0..10 {
                    dispatcher.dispatch(SdkEvent::StateChanged(SdkState::new(format!("T{i}"))));
                }
            })
        };
        handle.join().unwrap();
        settle().await;

        let events = sink.events();
        assert_eq!(events.len(), 10);
        assert_eq!(events[0].payload["newState"], "T0");
        assert_eq!(events[9].payload["newState"], "T9");
    }

    #[tokio::test]
    async fn test_torn_down_channel_swallows_emissions() {
        let sink = Arc::new(RecordingSink::default());
        let dispatcher = EventDispatcher::spawn(sink.clone());

        sink.tear_down();
        dispatcher.dispatch(SdkEvent::ErrorOccurred {
            code: ErrorKind::new("UPLOAD_FAILED"),
            message: None,
        });
        settle().await;

        // Dropped silently; dispatcher still usable.
        assert!(sink.events().is_empty());
        assert!(dispatcher.is_open());
    }

    #[tokio::test]
    async fn test_queue_closes_when_all_handles_drop() {
        let sink = Arc::new(RecordingSink::default());
        let dispatcher = EventDispatcher::spawn(sink.clone());
        let clone = dispatcher.clone();

        drop(dispatcher);
        drop(clone);
        settle().await;
        // Nothing to assert beyond not hanging; the consumer task has exited
        // and late sinks see no further emissions.
        assert!(sink.events().is_empty());
    }
}
