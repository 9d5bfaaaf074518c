use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CHANNEL_NAME, DEFAULT_MAX_SUBSCRIBERS,
    MAX_MAX_SUBSCRIBERS, MIN_MAX_SUBSCRIBERS,
};

use serde::Deserialize;

/// Broadcast channel settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Component name used in logs, errors and metrics
    pub name: String,
    /// Upper bound on concurrent registrations
    pub max_subscribers: usize,
    /// Limit applied when a subscriber requests none. None = unbounded
    pub default_max_messages: Option<usize>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_CHANNEL_NAME),
            max_subscribers: DEFAULT_MAX_SUBSCRIBERS,
            default_max_messages: None,
        }
    }
}

impl ChannelConfig {
    /// Default settings under a different channel name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::channel("channel.name must not be blank"));
        }

        if self.max_subscribers < MIN_MAX_SUBSCRIBERS || self.max_subscribers > MAX_MAX_SUBSCRIBERS
        {
            return Err(ConfigError::channel(format!(
                "channel.max_subscribers must be {}-{}, got {}",
                MIN_MAX_SUBSCRIBERS, MAX_MAX_SUBSCRIBERS, self.max_subscribers
            )));
        }

        if self.default_max_messages == Some(0) {
            return Err(ConfigError::channel(
                "channel.default_max_messages must be positive when set",
            ));
        }

        Ok(())
    }
}
