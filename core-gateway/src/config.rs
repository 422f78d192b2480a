//! Config Builder
//!
//! Assembles the one-time [`InitConfig`] consumed by the SDK's
//! initialization entry point. Building the config has one host side
//! effect: registering the notification channel the persistent foreground
//! notice is posted on. Registration is keyed on the channel id and must be
//! idempotent in the host, so repeated `initialize` calls never create
//! duplicate platform resources.
//!
//! There is no synchronous error path here. If channel registration fails,
//! the failure is logged and the config is built anyway; the embedding side
//! learns about a broken initialization only through the SDK's own error
//! event channel.

use bridge_traits::notification::{ChannelSpec, ForegroundNotice, Importance, NotificationHost};
use bridge_traits::sdk::InitConfig;
use tracing::warn;

/// Channel the foreground notice is posted on.
pub const FOREGROUND_CHANNEL_ID: &str = "FOREGROUND_SERVICE_CHANNEL";
/// Channel display name shown in host settings.
pub const FOREGROUND_CHANNEL_NAME: &str = "Foreground service";
/// Title of the persistent foreground notice.
pub const FOREGROUND_NOTICE_TITLE: &str = "Foreground service";
/// Host resource id for the notice's small icon.
pub const FOREGROUND_NOTICE_ICON: &str = "ic_notification_logo";

/// Builder for the one-time SDK initialization payload.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    api_key: String,
}

impl ConfigBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Register the foreground channel on `notifications` and produce the
    /// config. The config is owned by the caller and handed straight to the
    /// SDK; the bridge retains nothing.
    pub fn build(self, notifications: &dyn NotificationHost) -> InitConfig {
        let spec = ChannelSpec {
            id: FOREGROUND_CHANNEL_ID.to_string(),
            display_name: FOREGROUND_CHANNEL_NAME.to_string(),
            importance: Importance::Low,
            show_badge: false,
        };
        if let Err(err) = notifications.register_channel(spec) {
            warn!(error = %err, "notification channel registration failed");
        }

        InitConfig {
            api_key: self.api_key,
            foreground_notice: ForegroundNotice {
                channel_id: FOREGROUND_CHANNEL_ID.to_string(),
                title: FOREGROUND_NOTICE_TITLE.to_string(),
                small_icon: FOREGROUND_NOTICE_ICON.to_string(),
                ongoing: true,
            },
            keep_alive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::{BridgeError, Result};
    use std::sync::Mutex;

    #[derive(Default)]
    struct SpyHost {
        registered: Mutex<Vec<ChannelSpec>>,
        fail: bool,
    }

    impl NotificationHost for SpyHost {
        fn register_channel(&self, spec: ChannelSpec) -> Result<()> {
            if self.fail {
                return Err(BridgeError::NotAvailable("notifications".to_string()));
            }
            self.registered.lock().unwrap().push(spec);
            Ok(())
        }
    }

    #[test]
    fn test_build_registers_foreground_channel() {
        let host = SpyHost::default();
        let config = ConfigBuilder::new("key1").build(&host);

        let registered = host.registered.lock().unwrap();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].id, FOREGROUND_CHANNEL_ID);
        assert_eq!(registered[0].importance, Importance::Low);
        assert!(!registered[0].show_badge);

        assert_eq!(config.api_key, "key1");
        assert_eq!(config.foreground_notice.channel_id, FOREGROUND_CHANNEL_ID);
        assert!(config.foreground_notice.ongoing);
        assert!(config.keep_alive);
    }

    #[test]
    fn test_registration_failure_is_swallowed() {
        let host = SpyHost {
            fail: true,
            ..Default::default()
        };
        // No panic, no error surface: the config is still produced.
        let config = ConfigBuilder::new("key1").build(&host);
        assert_eq!(config.api_key, "key1");
    }
}
