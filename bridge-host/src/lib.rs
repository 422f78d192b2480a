//! # In-Process Host Adapters
//!
//! Concrete implementations of the bridge traits for hosts that run the
//! bridge in-process (desktop harnesses, integration tests):
//! - `EmbeddingSink` backed by a Tokio channel whose receiver is the
//!   embedding side's event queue
//! - `NotificationHost` that keeps an idempotent channel registry and logs
//!   through `tracing` instead of touching a platform notification manager
//!
//! Mobile hosts replace these with platform-native adapters; the core crates
//! only ever see the traits.

mod emitter;
mod notification;

pub use emitter::ChannelEmbeddingSink;
pub use notification::TracingNotificationHost;
