use crate::SubscriberError;

use fx_core::Message;

/// Receiving side of a [`BroadcastChannel`](crate::BroadcastChannel).
///
/// The channel calls `on_message` once per delivered message, in publish
/// order. Returning an error (or panicking) is reported back to the publisher
/// as a [`SubscriberDeliveryFault`](crate::SubscriberDeliveryFault) and does
/// not stop delivery to other subscribers.
///
/// Implementations may subscribe or unsubscribe on the delivering channel from
/// inside `on_message`, but must not publish to it.
pub trait Subscriber<T>: Send + Sync {
    /// Diagnostic name used in logs, errors and handles
    fn name(&self) -> &str;

    fn on_message(&self, message: &Message<T>) -> Result<(), SubscriberError>;

    /// Called once when a bounded subscription has used up its limit and the
    /// channel has removed it. Not called on explicit unsubscribe.
    fn on_complete(&self) {}

    /// Limit this subscriber asks for. Used by
    /// [`subscribe`](crate::BroadcastChannel::subscribe) when the caller passes
    /// no explicit limit.
    fn requested(&self) -> Option<usize> {
        None
    }
}
