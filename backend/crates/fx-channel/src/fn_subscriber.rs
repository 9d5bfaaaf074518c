use crate::{Subscriber, SubscriberError};

use fx_core::Message;

/// Adapts a closure into a [`Subscriber`]
pub struct FnSubscriber<F> {
    name: String,
    handler: F,
}

impl<F> FnSubscriber<F> {
    pub fn new<T>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Message<T>) -> Result<(), SubscriberError> + Send + Sync,
    {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<T, F> Subscriber<T> for FnSubscriber<F>
where
    F: Fn(&Message<T>) -> Result<(), SubscriberError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn on_message(&self, message: &Message<T>) -> Result<(), SubscriberError> {
        (self.handler)(message)
    }
}

impl<F> std::fmt::Debug for FnSubscriber<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSubscriber")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
