use crate::SubscriptionId;

/// Returned by `subscribe`; pass it back to `unsubscribe`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionHandle {
    id: SubscriptionId,
    subscriber_name: String,
    channel_name: String,
}

impl SubscriptionHandle {
    pub(crate) fn new(id: SubscriptionId, subscriber_name: String, channel_name: String) -> Self {
        Self {
            id,
            subscriber_name,
            channel_name,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn subscriber_name(&self) -> &str {
        &self.subscriber_name
    }

    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }
}
