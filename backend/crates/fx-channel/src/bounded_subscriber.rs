use crate::{Subscriber, SubscriberError};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fx_core::Message;
use log::debug;

/// Subscriber that records everything it receives.
///
/// The optional maximum is only reported through [`Subscriber::requested`];
/// the channel enforces it, this type never refuses a message. The log is
/// guarded so one instance can be registered on several channels at once.
#[derive(Debug)]
pub struct BoundedSubscriber<T> {
    name: String,
    max_messages: Option<usize>,
    received: Mutex<Vec<Message<T>>>,
    completed: AtomicBool,
}

impl<T> BoundedSubscriber<T> {
    /// Subscriber with no limit of its own
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_messages: None,
            received: Mutex::new(Vec::new()),
            completed: AtomicBool::new(false),
        }
    }

    /// Subscriber interested in at most `max_messages` messages
    pub fn with_max_messages(name: impl Into<String>, max_messages: usize) -> Self {
        Self {
            max_messages: Some(max_messages),
            ..Self::new(name)
        }
    }

    pub fn max_messages(&self) -> Option<usize> {
        self.max_messages
    }

    /// Snapshot of received messages in receipt order
    pub fn received_messages(&self) -> Vec<Message<T>> {
        self.log().clone()
    }

    pub fn received_count(&self) -> usize {
        self.log().len()
    }

    /// True once a channel signalled that this subscription is exhausted
    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }

    fn log(&self) -> MutexGuard<'_, Vec<Message<T>>> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> BoundedSubscriber<T> {
    /// Payloads of received messages in receipt order
    pub fn received_payloads(&self) -> Vec<T> {
        self.log()
            .iter()
            .map(|message| message.payload().clone())
            .collect()
    }
}

impl<T: Send + Sync> Subscriber<T> for BoundedSubscriber<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_message(&self, message: &Message<T>) -> Result<(), SubscriberError> {
        let mut log = self.log();
        log.push(message.clone());
        debug!(
            "{} received message {} ({} total)",
            self.name,
            message.id(),
            log.len()
        );
        Ok(())
    }

    fn on_complete(&self) {
        self.completed.store(true, Ordering::SeqCst);
        debug!("{} completed", self.name);
    }

    fn requested(&self) -> Option<usize> {
        self.max_messages
    }
}
