//! Broadcast channel with per-subscriber demand limits.
//!
//! A [`BroadcastChannel`] hands every published [`Message`] to each registered
//! [`Subscriber`] in registration order, within the `publish` call. A
//! subscription may carry a message limit; once it is used up the channel
//! drops the registration and signals [`Subscriber::on_complete`].
//!
//! ```
//! use std::sync::Arc;
//! use fx_channel::{BoundedSubscriber, BroadcastChannel};
//!
//! let channel = BroadcastChannel::<String>::new("fluxChannel").unwrap();
//! let first = Arc::new(BoundedSubscriber::<String>::new("First subscriber"));
//! let second = Arc::new(BoundedSubscriber::<String>::with_max_messages("Second subscriber", 1));
//!
//! channel.subscribe(first.clone(), None).unwrap();
//! channel.subscribe(second.clone(), None).unwrap();
//!
//! let _ = channel.send("1".to_string());
//! let report = channel.send("2".to_string());
//!
//! assert_eq!(report.delivered_count(), 1);
//! assert_eq!(first.received_payloads(), vec!["1", "2"]);
//! assert_eq!(second.received_payloads(), vec!["1"]);
//! ```

pub mod bounded_subscriber;
pub mod broadcast_channel;
pub mod capacity;
pub mod delivery_fault;
pub mod delivery_report;
pub mod error;
pub mod fn_subscriber;
pub mod metrics;
pub mod metrics_timer;
pub mod subscriber;
pub mod subscription_handle;
pub mod subscription_id;

mod subscriber_registration;

#[cfg(test)]
mod tests;

pub use bounded_subscriber::BoundedSubscriber;
pub use broadcast_channel::BroadcastChannel;
pub use capacity::Capacity;
pub use delivery_fault::{FaultCause, SubscriberDeliveryFault};
pub use delivery_report::DeliveryReport;
pub use error::{ChannelError, Result, SubscriberError};
pub use fn_subscriber::FnSubscriber;
pub use metrics::ChannelMetrics;
pub use metrics_timer::MetricsTimer;
pub use subscriber::Subscriber;
pub use subscription_handle::SubscriptionHandle;
pub use subscription_id::SubscriptionId;

pub use fx_config::ChannelConfig;
pub use fx_core::{HeaderValue, Message, MessageBuilder, MessageHeaders, MessageId};
