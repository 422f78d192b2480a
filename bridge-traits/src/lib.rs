//! # Host Bridge Traits
//!
//! Collaborator contracts between the recording-SDK bridge and its two
//! neighbours: the native SDK below it and the embedding runtime above it.
//!
//! ## Overview
//!
//! This crate defines the interfaces the bridge consumes and implements but
//! does not own. The bridge itself (see `core-gateway`) is pure boundary
//! plumbing: commands flow down through [`RecorderControl`](sdk::RecorderControl),
//! notifications flow up through [`StatusListener`](sdk::StatusListener) and
//! out through [`EmbeddingSink`](channel::EmbeddingSink).
//!
//! ## Traits
//!
//! ### SDK side
//! - [`RecorderControl`](sdk::RecorderControl) - Fire-and-forget control calls
//!   (initialize, start/stop recording, metadata)
//! - [`StatusListener`](sdk::StatusListener) - Callback sink for state
//!   changes, errors, and permission requests
//!
//! ### Embedding side
//! - [`EmbeddingSink`](channel::EmbeddingSink) - Named-event delivery into
//!   the embedding runtime's event queue
//!
//! ### Host platform
//! - [`NotificationHost`](notification::NotificationHost) - Idempotent
//!   notification-channel registration for the foreground operation
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host
//!   logging
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync`: SDK callbacks arrive on
//! arbitrary threads and the dispatch task runs on the async runtime, so
//! every implementation must be safely shareable.
//!
//! ## Error Handling
//!
//! Fallible trait methods use [`BridgeError`](error::BridgeError). Command
//! forwarding is deliberately infallible: the SDK reports all failures
//! asynchronously through its error callback, never synchronously.

pub mod channel;
pub mod error;
pub mod logging;
pub mod notification;
pub mod sdk;

pub use error::BridgeError;

// Re-export commonly used types
pub use channel::{EmbeddingSink, EmittedEvent};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use notification::{ChannelSpec, ForegroundNotice, Importance, NotificationHost};
pub use sdk::{ErrorKind, InitConfig, RecorderControl, SdkState, StatusListener};
