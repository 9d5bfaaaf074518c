#![allow(dead_code)]

use fx_channel::{BoundedSubscriber, Message, Subscriber, SubscriberError};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Recording subscriber and its trait-object view
pub fn recorder(name: &str) -> (Arc<BoundedSubscriber<String>>, Arc<dyn Subscriber<String>>) {
    let subscriber = Arc::new(BoundedSubscriber::new(name));
    let dynamic: Arc<dyn Subscriber<String>> = subscriber.clone();
    (subscriber, dynamic)
}

/// Returns an error for every message and counts how often it was called
pub struct FailingSubscriber {
    name: String,
    calls: AtomicUsize,
}

impl FailingSubscriber {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Subscriber<String> for FailingSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_message(&self, message: &Message<String>) -> Result<(), SubscriberError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SubscriberError::new(format!(
            "rejected payload '{}'",
            message.payload()
        )))
    }
}

/// Panics on every message
pub struct PanickingSubscriber {
    name: String,
}

impl PanickingSubscriber {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

impl Subscriber<String> for PanickingSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_message(&self, message: &Message<String>) -> Result<(), SubscriberError> {
        panic!("cannot process {}", message.payload());
    }
}
