//! Error types for the nimbus-connect crate

use thiserror::Error;

/// Every failure surfaced by this crate.
///
/// The core performs no local recovery: each operation either succeeds or
/// returns one of these three kinds to the caller. Delegation operations on
/// [`crate::SessionAuth`] never fail and therefore have no variant here.
#[derive(Error, Debug)]
pub enum ConnectError {
    /// Required identity fields were missing at construction time.
    ///
    /// Only produced by [`crate::SessionAuth::new`]; once a credential
    /// context exists, this variant is never raised again.
    #[error("invalid client configuration: {0}")]
    InvalidConfiguration(String),

    /// The transport could not construct a proxy for the endpoint.
    #[error("failed to bind RPC proxy to {endpoint}: {reason}")]
    TransportBinding {
        /// The endpoint the proxy was meant to bind to.
        endpoint: String,
        /// The transport's own description of the failure.
        reason: String,
    },

    /// A raw response could not be parsed into the requested shape.
    ///
    /// Carries the original response text rather than the codec's error
    /// message: a caller debugging a malformed response needs to see
    /// exactly what the server sent.
    #[error("failed to deserialize RPC response: {raw}")]
    ResponseDeserialization {
        /// The raw response text as received from the daemon.
        raw: String,
    },
}

pub type Result<T> = std::result::Result<T, ConnectError>;
