use crate::{
    Capacity, ChannelError, ChannelMetrics, DeliveryReport, FaultCause, MetricsTimer,
    Result as ChannelErrorResult, Subscriber, SubscriberDeliveryFault, SubscriptionHandle,
    SubscriptionId, subscriber_registration::SubscriberRegistration,
};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use error_location::ErrorLocation;
use fx_config::ChannelConfig;
use fx_core::Message;
use log::{debug, info, warn};
use tracing::info_span;

/// Synchronous fan-out of messages to registered subscribers.
///
/// Publishes are serialized: each fan-out runs to completion, in registration
/// order, before the next one starts. The registration list has its own lock
/// that is never held while a subscriber runs, so subscribers may subscribe or
/// unsubscribe from inside `on_message`. They must not publish to the channel
/// that is delivering to them.
///
/// Clones share the same registrations.
pub struct BroadcastChannel<T> {
    inner: Arc<ChannelInner<T>>,
}

struct ChannelInner<T> {
    config: ChannelConfig,
    metrics: ChannelMetrics,
    publish_gate: Mutex<()>,
    registrations: Mutex<Vec<SubscriberRegistration<T>>>,
}

/// One delivery reserved under the registrations lock
struct DeliveryClaim<T> {
    id: SubscriptionId,
    subscriber: Arc<dyn Subscriber<T>>,
    exhausted: bool,
}

impl<T> BroadcastChannel<T> {
    /// Channel with default limits
    #[track_caller]
    pub fn new(name: impl Into<String>) -> ChannelErrorResult<Self> {
        Self::with_config(ChannelConfig::named(name))
    }

    /// Fails if `config` does not pass [`ChannelConfig::validate`]
    #[track_caller]
    pub fn with_config(config: ChannelConfig) -> ChannelErrorResult<Self> {
        config.validate()?;

        info!(
            "Created channel '{}' (max {} subscribers)",
            config.name, config.max_subscribers
        );

        Ok(Self {
            inner: Arc::new(ChannelInner {
                metrics: ChannelMetrics::new(config.name.clone()),
                config,
                publish_gate: Mutex::new(()),
                registrations: Mutex::new(Vec::new()),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.inner.config
    }

    /// Register `subscriber` at the end of the delivery order.
    ///
    /// With `max_messages` of `None` the limit comes from
    /// [`Subscriber::requested`], then from the channel's
    /// `default_max_messages`. If neither is set the subscription is unbounded.
    /// Past messages are not replayed.
    #[track_caller]
    pub fn subscribe(
        &self,
        subscriber: Arc<dyn Subscriber<T>>,
        max_messages: Option<usize>,
    ) -> ChannelErrorResult<SubscriptionHandle> {
        let subscriber_name = subscriber.name().to_string();

        if subscriber_name.trim().is_empty() {
            return Err(ChannelError::invalid_argument(
                "subscriber name must not be blank",
            ));
        }

        let limit = max_messages
            .or_else(|| subscriber.requested())
            .or(self.inner.config.default_max_messages);

        if limit == Some(0) {
            return Err(ChannelError::invalid_argument(format!(
                "max_messages for '{}' must be positive",
                subscriber_name
            )));
        }

        let mut registrations = self.registrations();

        if registrations
            .iter()
            .any(|registration| registration.is_same_instance(&subscriber))
        {
            warn!(
                "Subscriber '{}' already subscribed to channel '{}'",
                subscriber_name,
                self.name()
            );
            return Err(ChannelError::DuplicateSubscription {
                subscriber: subscriber_name,
                channel: self.name().to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if registrations.len() >= self.inner.config.max_subscribers {
            warn!(
                "Subscriber limit reached on channel '{}': {}/{}",
                self.name(),
                registrations.len(),
                self.inner.config.max_subscribers
            );
            return Err(ChannelError::SubscriberLimitExceeded {
                channel: self.name().to_string(),
                current: registrations.len(),
                max: self.inner.config.max_subscribers,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let capacity = Capacity::from_limit(limit);
        let registration = SubscriberRegistration::new(subscriber, capacity);
        let id = registration.id;
        registrations.push(registration);
        let total = registrations.len();
        drop(registrations);

        debug!(
            "Subscribed '{}' to channel '{}' ({}, {} total)",
            subscriber_name,
            self.name(),
            capacity,
            total
        );
        self.inner.metrics.subscription_changed("created");
        self.inner.metrics.subscriber_count(total);

        Ok(SubscriptionHandle::new(
            id,
            subscriber_name,
            self.name().to_string(),
        ))
    }

    /// Subscribe with whatever limit the subscriber or the channel default
    /// supplies. Same as `subscribe(subscriber, None)`.
    #[track_caller]
    pub fn subscribe_requested(
        &self,
        subscriber: Arc<dyn Subscriber<T>>,
    ) -> ChannelErrorResult<SubscriptionHandle> {
        self.subscribe(subscriber, None)
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) -> bool {
        let mut registrations = self.registrations();
        let before = registrations.len();
        registrations.retain(|registration| registration.id != handle.id());
        let total = registrations.len();
        drop(registrations);

        if total == before {
            return false;
        }

        debug!(
            "Unsubscribed '{}' from channel '{}' ({} remaining)",
            handle.subscriber_name(),
            self.name(),
            total
        );
        self.inner.metrics.subscription_changed("removed");
        self.inner.metrics.subscriber_count(total);
        true
    }

    /// Deliver `message` to every subscriber that still has capacity.
    ///
    /// Subscribers registered while the fan-out is running are not included.
    /// A subscriber removed while it is running is skipped if not yet reached.
    pub fn publish(&self, message: &Message<T>) -> DeliveryReport {
        let _gate = self
            .inner
            .publish_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let timer = MetricsTimer::new(&self.inner.metrics);

        let snapshot: Vec<SubscriptionId> = self
            .registrations()
            .iter()
            .map(|registration| registration.id)
            .collect();

        let span = info_span!(
            "fx_publish",
            channel = %self.name(),
            message_id = %message.id(),
            subscribers = snapshot.len(),
        );
        let _entered = span.enter();

        let mut report = DeliveryReport::new(self.name(), message.id());

        for id in snapshot {
            if let Some(claim) = self.claim_delivery(id) {
                self.deliver(claim, message, &mut report);
            }
        }

        debug!(
            "Published message {} on channel '{}': {} delivered, {} faults",
            message.id(),
            self.name(),
            report.delivered_count(),
            report.faults().len()
        );
        self.inner
            .metrics
            .message_published(report.delivered_count(), report.faults().len());
        timer.finish();

        report
    }

    /// Wrap `payload` in a header-less message and publish it
    pub fn send(&self, payload: T) -> DeliveryReport {
        self.publish(&Message::new(payload))
    }

    pub fn subscriber_count(&self) -> usize {
        self.registrations().len()
    }

    /// Subscriber names in delivery order
    pub fn subscriber_names(&self) -> Vec<String> {
        self.registrations()
            .iter()
            .map(|registration| registration.subscriber.name().to_string())
            .collect()
    }

    pub fn is_subscribed(&self, handle: &SubscriptionHandle) -> bool {
        self.registrations()
            .iter()
            .any(|registration| registration.id == handle.id())
    }

    /// None once the subscription is gone
    pub fn remaining_capacity(&self, handle: &SubscriptionHandle) -> Option<Capacity> {
        self.registrations()
            .iter()
            .find(|registration| registration.id == handle.id())
            .map(|registration| registration.capacity)
    }

    fn registrations(&self) -> MutexGuard<'_, Vec<SubscriberRegistration<T>>> {
        self.inner
            .registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Take one unit of capacity from a still-registered subscription.
    /// The last unit removes the registration before delivery happens.
    fn claim_delivery(&self, id: SubscriptionId) -> Option<DeliveryClaim<T>> {
        let mut registrations = self.registrations();
        let index = registrations
            .iter()
            .position(|registration| registration.id == id)?;

        let registration = &mut registrations[index];
        if registration.capacity.is_exhausted() {
            return None;
        }

        let exhausted = registration.capacity.consume();
        let subscriber = Arc::clone(&registration.subscriber);

        if exhausted {
            registrations.remove(index);
            self.inner.metrics.subscriber_count(registrations.len());
        }

        Some(DeliveryClaim {
            id,
            subscriber,
            exhausted,
        })
    }

    fn deliver(
        &self,
        claim: DeliveryClaim<T>,
        message: &Message<T>,
        report: &mut DeliveryReport,
    ) {
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| claim.subscriber.on_message(message)));

        let cause = match outcome {
            Ok(Ok(())) => None,
            Ok(Err(error)) => Some(FaultCause::Error(error)),
            Err(payload) => Some(FaultCause::Panic(panic_message(payload))),
        };

        match cause {
            None => {
                debug!(
                    "Delivered message {} to '{}'",
                    message.id(),
                    claim.subscriber.name()
                );
                report.record_delivery(claim.id);
            }
            Some(cause) => {
                warn!(
                    "Subscriber '{}' failed on message {} in channel '{}': {}",
                    claim.subscriber.name(),
                    message.id(),
                    self.name(),
                    cause
                );
                report.record_fault(SubscriberDeliveryFault {
                    subscription_id: claim.id,
                    subscriber_name: claim.subscriber.name().to_string(),
                    message_id: message.id(),
                    cause,
                });
            }
        }

        if claim.exhausted {
            info!(
                "Subscriber '{}' reached its limit on channel '{}', unsubscribed",
                claim.subscriber.name(),
                self.name()
            );
            self.inner.metrics.subscription_changed("exhausted");
            report.record_exhausted(claim.id);

            if let Err(payload) =
                panic::catch_unwind(AssertUnwindSafe(|| claim.subscriber.on_complete()))
            {
                warn!(
                    "Subscriber '{}' panicked in on_complete: {}",
                    claim.subscriber.name(),
                    panic_message(payload)
                );
            }
        }
    }
}

impl<T> Clone for BroadcastChannel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for BroadcastChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastChannel")
            .field("name", &self.name())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(any) => match any.downcast::<&str>() {
            Ok(msg) => msg.to_string(),
            Err(_) => "Unknown panic".to_string(),
        },
    }
}
