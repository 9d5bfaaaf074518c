use crate::{Capacity, Subscriber, SubscriptionId};

use std::sync::Arc;

/// One subscriber on one channel, plus what it may still receive there
pub(crate) struct SubscriberRegistration<T> {
    pub(crate) id: SubscriptionId,
    pub(crate) subscriber: Arc<dyn Subscriber<T>>,
    pub(crate) capacity: Capacity,
}

impl<T> SubscriberRegistration<T> {
    pub(crate) fn new(subscriber: Arc<dyn Subscriber<T>>, capacity: Capacity) -> Self {
        Self {
            id: SubscriptionId::new(),
            subscriber,
            capacity,
        }
    }

    /// Identity is the allocation, not the vtable
    pub(crate) fn is_same_instance(&self, other: &Arc<dyn Subscriber<T>>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.subscriber), Arc::as_ptr(other))
    }
}
