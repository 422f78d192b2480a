//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the SDK bridge:
//! - Canonical event model and its wire encoding
//! - The single-consumer event dispatcher
//! - Logging and tracing infrastructure
//!
//! ## Overview
//!
//! This crate owns everything between the listener adapter and the embedding
//! runtime's event channel. It establishes the delivery guarantees the
//! bridge advertises (FIFO order, exactly-once mapping from callback to
//! emission attempt, best-effort delivery) and the logging conventions used
//! throughout the workspace.

pub mod dispatch;
pub mod error;
pub mod events;
pub mod logging;

pub use dispatch::EventDispatcher;
pub use error::{Error, Result};
pub use events::SdkEvent;
