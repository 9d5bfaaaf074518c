use crate::{HeaderValue, MessageBuilder, MessageHeaders, MessageId};

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// An immutable message: payload plus headers.
///
/// Cloning is cheap, every clone shares the same payload allocation. This is
/// what lets a broadcast hand the same message to any number of subscribers.
#[derive(Debug)]
pub struct Message<T> {
    inner: Arc<MessageInner<T>>,
}

#[derive(Debug)]
struct MessageInner<T> {
    id: MessageId,
    timestamp: DateTime<Utc>,
    payload: T,
    headers: MessageHeaders,
}

impl<T> Message<T> {
    /// Create a header-less message
    pub fn new(payload: T) -> Self {
        Self::from_parts(payload, MessageHeaders::new())
    }

    /// Start building a message with headers
    pub fn builder(payload: T) -> MessageBuilder<T> {
        MessageBuilder::with_payload(payload)
    }

    pub(crate) fn from_parts(payload: T, headers: MessageHeaders) -> Self {
        Self {
            inner: Arc::new(MessageInner {
                id: MessageId::new(),
                timestamp: Utc::now(),
                payload,
                headers,
            }),
        }
    }

    pub fn id(&self) -> MessageId {
        self.inner.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.inner.timestamp
    }

    pub fn payload(&self) -> &T {
        &self.inner.payload
    }

    pub fn headers(&self) -> &MessageHeaders {
        &self.inner.headers
    }

    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.inner.headers.get(name)
    }

    /// True when both handles point at the same message instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Message<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
