//! Host Notification Subsystem Contract
//!
//! A long-running background recording operation needs a persistent,
//! user-visible announcement on most host platforms (Android foreground
//! services being the canonical case). This module abstracts the two pieces
//! the bridge touches: channel registration and the persistent notice handed
//! to the SDK inside its init config.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Importance level for a notification channel.
///
/// Maps onto the host's own importance scale; the bridge only ever requests
/// `Low` for its foreground-service channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    Low,
    Default,
    High,
}

/// Registration descriptor for a notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Stable channel identifier; registration is keyed on this.
    pub id: String,
    /// Human-readable channel name shown in host settings.
    pub display_name: String,
    pub importance: Importance,
    /// Whether the host shows a launcher badge for this channel.
    pub show_badge: bool,
}

/// Persistent notification descriptor supporting a long-running background
/// operation. Plain data: the host renders it, the SDK keeps it alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForegroundNotice {
    /// Channel the notice is posted on; must be registered first.
    pub channel_id: String,
    pub title: String,
    /// Host resource identifier for the small icon.
    pub small_icon: String,
    /// Marks the notice as non-dismissable while the operation runs.
    pub ongoing: bool,
}

/// Host notification subsystem.
///
/// Implementations wrap the platform's notification manager. Registration
/// must be idempotent: registering the same channel id twice must not create
/// duplicate platform resources.
pub trait NotificationHost: Send + Sync {
    /// Create or update the channel described by `spec`.
    fn register_channel(&self, spec: ChannelSpec) -> Result<()>;
}
