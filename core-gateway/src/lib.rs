//! Bridge facade and command gateway.
//!
//! This crate wires the bridge's collaborators (the native SDK control
//! interface, the host notification subsystem, and the embedding runtime's
//! event channel) into the [`SdkBridge`] facade. The bridge holds no durable
//! state of its own: commands are forwarded down as-is, SDK callbacks come
//! back up through the listener adapter and the event dispatcher, and all
//! durable state lives in the SDK.
//!
//! Embedding hosts construct an [`SdkBridge`] from a
//! [`BridgeDependencies`] bundle — typically with the in-process adapters
//! from `bridge-host` on desktop, or platform-native implementations on
//! mobile.

pub mod command;
pub mod config;
pub mod gateway;
pub mod listener;

pub use command::Command;
pub use config::ConfigBuilder;
pub use gateway::{BridgeDependencies, SdkBridge, MODULE_NAME};
pub use listener::{ListenerAdapter, ListenerSlot};
