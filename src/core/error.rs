//! Error types for the NameSync protocol.

use thiserror::Error;

/// Errors from constructing or parsing hierarchical names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The name has no components where one is required.
    #[error("name is empty")]
    Empty,

    /// A name component is empty.
    #[error("empty name component")]
    EmptyComponent,

    /// A name component contains an illegal character.
    #[error("invalid name component: {0:?}")]
    InvalidComponent(String),

    /// The name does not fall under the required prefix.
    #[error("name {name} is outside prefix {prefix}")]
    OutsidePrefix {
        /// The offending name.
        name: String,
        /// The required prefix.
        prefix: String,
    },
}

/// Errors from decoding wire payloads.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The response body is not valid JSON or not the expected shape.
    #[error("invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// A name carried in the body failed to parse.
    #[error("bad name in response body: {0}")]
    BadName(#[from] NameError),

    /// A fetch address lacks the trailing session/sequence components.
    #[error("fetch address has no session/sequence suffix")]
    MissingSequence,
}

/// Top-level NameSync errors.
///
/// Steady-state network irregularities (timeouts, evicted entries, malformed
/// payloads) are absorbed and logged by the coordinator, never surfaced here.
/// These variants cover setup-time failures and local announce failures.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Failed to bind as a responder for the local prefix. Fatal.
    #[error("responder registration failed: {0}")]
    Registration(String),

    /// The synchronizer refused to advance the publication counter.
    #[error("sequence advance failed: {0}")]
    Advance(String),

    /// Name error.
    #[error("name error: {0}")]
    Name(#[from] NameError),

    /// Failed to hand a response to the transport.
    #[error("response send failed: {0}")]
    Send(String),

    /// The event channel closed while the coordinator was running.
    #[error("event channel closed")]
    ChannelClosed,
}
