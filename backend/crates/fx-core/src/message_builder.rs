use crate::{CoreError, HeaderValue, Message, MessageHeaders, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Builder for [`Message`].
///
/// Header names are validated in [`build`](Self::build) so that chained
/// `set_header` calls stay infallible.
#[derive(Debug)]
pub struct MessageBuilder<T> {
    payload: T,
    headers: MessageHeaders,
}

impl<T> MessageBuilder<T> {
    pub fn with_payload(payload: T) -> Self {
        Self {
            payload,
            headers: MessageHeaders::new(),
        }
    }

    /// Set a header, replacing any existing value under the same name
    pub fn set_header(mut self, name: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set a header only if no value exists under that name yet
    pub fn set_header_if_absent(
        mut self,
        name: impl Into<String>,
        value: impl Into<HeaderValue>,
    ) -> Self {
        let name = name.into();
        if !self.headers.contains(&name) {
            self.headers.insert(name, value.into());
        }
        self
    }

    /// Copy every header from `headers`, overwriting existing names
    pub fn copy_headers(mut self, headers: &MessageHeaders) -> Self {
        for (name, value) in headers.iter() {
            self.headers.insert(name.to_string(), value.clone());
        }
        self
    }

    #[track_caller]
    pub fn build(self) -> CoreErrorResult<Message<T>> {
        if let Some(name) = self.headers.names().find(|name| name.trim().is_empty()) {
            return Err(CoreError::InvalidHeaderName {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Message::from_parts(self.payload, self.headers))
    }
}

impl<T: Clone> MessageBuilder<T> {
    /// Start from an existing message's payload and headers. The built message
    /// gets a fresh id and timestamp.
    pub fn from_message(message: &Message<T>) -> Self {
        Self {
            payload: message.payload().clone(),
            headers: message.headers().clone(),
        }
    }
}
