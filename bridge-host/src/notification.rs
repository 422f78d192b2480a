//! Logging stand-in for the host notification subsystem.

use std::collections::HashMap;
use std::sync::Mutex;

use bridge_traits::error::Result;
use bridge_traits::notification::{ChannelSpec, NotificationHost};
use tracing::debug;

/// `NotificationHost` that records registrations instead of touching a real
/// notification manager. Registration is keyed on the channel id, so
/// repeated registration updates the stored spec rather than creating a
/// duplicate — the same idempotency contract a platform implementation must
/// honor.
#[derive(Default)]
pub struct TracingNotificationHost {
    channels: Mutex<HashMap<String, ChannelSpec>>,
}

impl TracingNotificationHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered channel ids, for assertions in tests and harnesses.
    pub fn registered_ids(&self) -> Vec<String> {
        self.channels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

impl NotificationHost for TracingNotificationHost {
    fn register_channel(&self, spec: ChannelSpec) -> Result<()> {
        debug!(channel = %spec.id, name = %spec.display_name, "registering notification channel");
        self.channels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(spec.id.clone(), spec);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::notification::Importance;

    fn spec(id: &str) -> ChannelSpec {
        ChannelSpec {
            id: id.to_string(),
            display_name: "Foreground service".to_string(),
            importance: Importance::Low,
            show_badge: false,
        }
    }

    #[test]
    fn test_repeated_registration_is_idempotent() {
        let host = TracingNotificationHost::new();
        host.register_channel(spec("FOREGROUND_SERVICE_CHANNEL")).unwrap();
        host.register_channel(spec("FOREGROUND_SERVICE_CHANNEL")).unwrap();

        assert_eq!(host.registered_ids(), vec!["FOREGROUND_SERVICE_CHANNEL"]);
    }
}
