use crate::Result as DemoErrorResult;

use std::sync::Arc;

use fx_channel::{BoundedSubscriber, BroadcastChannel, ChannelConfig, Message, Subscriber};
use fx_core::HeaderValue;
use log::{info, warn};
use serde::Serialize;

/// What to run: how many subscribers, whether the last is limited, and what
/// to publish
#[derive(Debug, Clone)]
pub struct ScenarioOptions {
    pub subscribers: usize,
    pub limit: Option<usize>,
    pub headers: Vec<(String, HeaderValue)>,
    pub payloads: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PublishSummary {
    pub payload: String,
    pub message_id: String,
    pub delivered: usize,
    pub faults: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubscriberSummary {
    pub name: String,
    /// Limit the channel applied, from the CLI or the channel default
    pub limit: Option<usize>,
    pub completed: bool,
    pub received: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioSummary {
    pub channel: String,
    pub publishes: Vec<PublishSummary>,
    pub subscribers: Vec<SubscriberSummary>,
}

/// Build a channel, register the subscribers, publish every payload and
/// collect what each subscriber saw
pub fn run(config: ChannelConfig, options: &ScenarioOptions) -> DemoErrorResult<ScenarioSummary> {
    let channel = BroadcastChannel::<String>::with_config(config)?;

    let mut subscribers = Vec::with_capacity(options.subscribers);
    for index in 0..options.subscribers {
        let name = subscriber_name(index);
        let subscriber = match options.limit {
            Some(limit) if index + 1 == options.subscribers => {
                Arc::new(BoundedSubscriber::<String>::with_max_messages(name, limit))
            }
            _ => Arc::new(BoundedSubscriber::<String>::new(name)),
        };
        let handle = channel.subscribe(subscriber.clone(), None)?;
        let applied_limit = channel
            .remaining_capacity(&handle)
            .and_then(|capacity| capacity.remaining());
        subscribers.push((subscriber, applied_limit));
    }

    info!(
        "Registered {} subscriber(s) on '{}'",
        channel.subscriber_count(),
        channel.name()
    );

    let mut publishes = Vec::with_capacity(options.payloads.len());
    for payload in &options.payloads {
        let message = options
            .headers
            .iter()
            .fold(Message::builder(payload.clone()), |builder, (name, value)| {
                builder.set_header(name.clone(), value.clone())
            })
            .build()?;

        let report = channel.publish(&message);
        for fault in report.faults() {
            warn!("{fault}");
        }

        publishes.push(PublishSummary {
            payload: payload.clone(),
            message_id: message.id().to_string(),
            delivered: report.delivered_count(),
            faults: report.faults().iter().map(ToString::to_string).collect(),
        });
    }

    let subscribers = subscribers
        .iter()
        .map(|(subscriber, limit)| SubscriberSummary {
            name: subscriber.name().to_string(),
            limit: *limit,
            completed: subscriber.is_completed(),
            received: subscriber.received_payloads(),
        })
        .collect();

    Ok(ScenarioSummary {
        channel: channel.name().to_string(),
        publishes,
        subscribers,
    })
}

fn subscriber_name(index: usize) -> String {
    const ORDINALS: [&str; 5] = ["First", "Second", "Third", "Fourth", "Fifth"];

    match ORDINALS.get(index) {
        Some(ordinal) => format!("{ordinal} subscriber"),
        None => format!("Subscriber {}", index + 1),
    }
}
