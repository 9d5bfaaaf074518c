use metrics::{counter, gauge, histogram};

/// Metrics collector for one broadcast channel. Every series carries a
/// `channel` label.
#[derive(Debug, Clone)]
pub struct ChannelMetrics {
    prefix: &'static str,
    channel: String,
}

impl ChannelMetrics {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            prefix: "fx_channel",
            channel: channel.into(),
        }
    }

    /// Record a publish and the fan-out it produced
    pub fn message_published(&self, delivered: usize, faults: usize) {
        counter!(format!("{}.published", self.prefix), "channel" => self.channel.clone())
            .increment(1);
        counter!(format!("{}.delivered", self.prefix), "channel" => self.channel.clone())
            .increment(delivered as u64);
        if faults > 0 {
            counter!(format!("{}.faults", self.prefix), "channel" => self.channel.clone())
                .increment(faults as u64);
        }
    }

    /// Record subscription change: created, removed or exhausted
    pub fn subscription_changed(&self, action: &str) {
        counter!(
            format!("{}.subscriptions.{}", self.prefix, action),
            "channel" => self.channel.clone()
        )
        .increment(1);
    }

    pub fn subscriber_count(&self, count: usize) {
        gauge!(format!("{}.subscribers", self.prefix), "channel" => self.channel.clone())
            .set(count as f64);
    }

    /// Record how long a publish took, including all subscriber callbacks
    pub fn publish_latency(&self, duration: std::time::Duration) {
        histogram!(
            format!("{}.publish.latency_us", self.prefix),
            "channel" => self.channel.clone()
        )
        .record(duration.as_micros() as f64);
    }
}
