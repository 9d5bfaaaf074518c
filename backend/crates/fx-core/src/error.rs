use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid header name: '{name}' {location}")]
    InvalidHeaderName {
        name: String,
        location: ErrorLocation,
    },

    #[error("Invalid message id: {value}: {source} {location}")]
    InvalidMessageId {
        value: String,
        #[source]
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
