use std::sync::Arc;

use thiserror::Error;

/// Result type used by fallible `dpk` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a deriver or converting a typed event.
///
/// Deriving a key from a [`serde_json::Value`] never fails; these errors only come from the
/// surrounding API.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The configured trivial partition key is empty.
    #[error("trivial partition key must not be empty")]
    EmptyTrivialPartitionKey,

    /// Deriver configuration could not be parsed.
    #[error("invalid deriver configuration")]
    // serde_json::Error is not clonable, so we're wrapping it in an Arc.
    InvalidConfiguration(#[source] Arc<serde_json::Error>),

    /// A typed event could not be represented as JSON.
    #[error("unable to serialize event")]
    EventSerialization(#[source] Arc<serde_json::Error>),
}
