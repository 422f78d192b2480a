//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the
//! individual workspace crates. Host applications can depend on
//! `truemetrics-bridge` and enable the documented features without wiring
//! each crate individually:
//!
//! - `gateway` (default): the [`core-gateway`] facade and command surface
//! - `in-process-host` (default): the Tokio-backed host adapters from
//!   [`bridge-host`] for desktop harnesses and tests
//!
//! [`core-gateway`]: ../core_gateway/index.html
//! [`bridge-host`]: ../bridge_host/index.html

#[cfg(feature = "gateway")]
pub use core_gateway;

#[cfg(feature = "in-process-host")]
pub use bridge_host;
