pub mod error;
pub mod message;
pub mod message_builder;
pub mod message_headers;
pub mod message_id;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use message::Message;
pub use message_builder::MessageBuilder;
pub use message_headers::{HeaderValue, MessageHeaders};
pub use message_id::MessageId;
