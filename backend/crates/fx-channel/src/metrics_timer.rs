use crate::ChannelMetrics;

use std::time::Instant;

/// Times one publish
pub struct MetricsTimer<'a> {
    start: Instant,
    metrics: &'a ChannelMetrics,
}

impl<'a> MetricsTimer<'a> {
    pub fn new(metrics: &'a ChannelMetrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn finish(self) {
        self.metrics.publish_latency(self.start.elapsed());
    }
}
