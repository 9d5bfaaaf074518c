use crate::SubscriberDeliveryFault;

use std::panic::Location;

use error_location::ErrorLocation;
use fx_config::ConfigError;
use fx_core::MessageId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Subscriber '{subscriber}' is already subscribed to channel '{channel}' {location}")]
    DuplicateSubscription {
        subscriber: String,
        channel: String,
        location: ErrorLocation,
    },

    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Subscriber limit exceeded on channel '{channel}': {current} subscribers (max: {max}) {location}"
    )]
    SubscriberLimitExceeded {
        channel: String,
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error(
        "{} subscriber(s) failed on channel '{channel}' for message {message_id} ({delivered} delivered) {location}",
        .faults.len()
    )]
    DeliveryFaults {
        channel: String,
        message_id: MessageId,
        delivered: usize,
        faults: Vec<SubscriberDeliveryFault>,
        location: ErrorLocation,
    },

    #[error("Invalid channel configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ChannelError {
    #[track_caller]
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for logs and callers that match on strings
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateSubscription { .. } => "DUPLICATE_SUBSCRIPTION",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::SubscriberLimitExceeded { .. } => "SUBSCRIBER_LIMIT",
            Self::DeliveryFaults { .. } => "DELIVERY_FAULTS",
            Self::Config(_) => "INVALID_CONFIG",
        }
    }
}

/// Failure returned by a subscriber while handling a message
#[derive(Error, Debug)]
#[error("{message} {location}")]
pub struct SubscriberError {
    pub message: String,
    pub location: ErrorLocation,
}

impl SubscriberError {
    #[track_caller]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChannelError>;
