use crate::{SubscriberError, SubscriptionId};

use fx_core::MessageId;
use thiserror::Error;

/// Why a single delivery failed
#[derive(Error, Debug)]
pub enum FaultCause {
    #[error("{0}")]
    Error(#[from] SubscriberError),

    #[error("panicked: {0}")]
    Panic(String),
}

/// A subscriber failure collected during fan-out
#[derive(Error, Debug)]
#[error("Subscriber '{subscriber_name}' ({subscription_id}) failed on message {message_id}: {cause}")]
pub struct SubscriberDeliveryFault {
    pub subscription_id: SubscriptionId,
    pub subscriber_name: String,
    pub message_id: MessageId,
    #[source]
    pub cause: FaultCause,
}

impl SubscriberDeliveryFault {
    pub fn is_panic(&self) -> bool {
        matches!(self.cause, FaultCause::Panic(_))
    }
}
