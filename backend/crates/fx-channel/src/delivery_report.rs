use crate::{
    ChannelError, Result as ChannelErrorResult, SubscriberDeliveryFault, SubscriptionHandle,
    SubscriptionId,
};

use std::panic::Location;

use error_location::ErrorLocation;
use fx_core::MessageId;

/// Outcome of one `publish` call.
///
/// Faults are collected here rather than returned as an error so that a
/// failing subscriber never hides the deliveries that did happen. Call
/// [`into_result`](Self::into_result) to treat any fault as an error.
#[derive(Debug)]
#[must_use = "a delivery report may carry subscriber faults"]
pub struct DeliveryReport {
    channel: String,
    message_id: MessageId,
    recipients: Vec<SubscriptionId>,
    faults: Vec<SubscriberDeliveryFault>,
    exhausted: Vec<SubscriptionId>,
}

impl DeliveryReport {
    pub(crate) fn new(channel: impl Into<String>, message_id: MessageId) -> Self {
        Self {
            channel: channel.into(),
            message_id,
            recipients: Vec::new(),
            faults: Vec::new(),
            exhausted: Vec::new(),
        }
    }

    pub(crate) fn record_delivery(&mut self, id: SubscriptionId) {
        self.recipients.push(id);
    }

    pub(crate) fn record_fault(&mut self, fault: SubscriberDeliveryFault) {
        self.faults.push(fault);
    }

    pub(crate) fn record_exhausted(&mut self, id: SubscriptionId) {
        self.exhausted.push(id);
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    /// Number of subscribers that received the message without fault
    pub fn delivered_count(&self) -> usize {
        self.recipients.len()
    }

    /// Subscriptions that received the message, in delivery order
    pub fn recipients(&self) -> &[SubscriptionId] {
        &self.recipients
    }

    pub fn was_delivered_to(&self, handle: &SubscriptionHandle) -> bool {
        self.recipients.contains(&handle.id())
    }

    pub fn faults(&self) -> &[SubscriberDeliveryFault] {
        &self.faults
    }

    pub fn has_faults(&self) -> bool {
        !self.faults.is_empty()
    }

    /// Subscriptions removed during this publish because their limit was reached
    pub fn exhausted(&self) -> &[SubscriptionId] {
        &self.exhausted
    }

    /// Deliveries plus faults: every subscriber the channel tried
    pub fn attempted_count(&self) -> usize {
        self.recipients.len() + self.faults.len()
    }

    /// Delivered count, or `DeliveryFaults` if any subscriber failed
    #[track_caller]
    pub fn into_result(self) -> ChannelErrorResult<usize> {
        if self.faults.is_empty() {
            return Ok(self.recipients.len());
        }

        Err(ChannelError::DeliveryFaults {
            channel: self.channel,
            message_id: self.message_id,
            delivered: self.recipients.len(),
            faults: self.faults,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
