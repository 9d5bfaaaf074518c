use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] fx_config::ConfigError),

    #[error("Channel error: {0}")]
    Channel(#[from] fx_channel::ChannelError),

    #[error("Message error: {0}")]
    Core(#[from] fx_core::CoreError),

    #[error("Invalid header '{value}': expected name=value {location}")]
    InvalidHeader {
        value: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

impl DemoError {
    #[track_caller]
    pub fn invalid_header<S: Into<String>>(value: S) -> Self {
        Self::InvalidHeader {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
