use std::time::Duration;

use thiserror::Error;

/// Errors from [`crate::transport::Transport::get`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The connection to the geocoding host could not be established.
    ///
    /// Covers DNS resolution failures and refused or reset sockets.
    #[error("failed to connect to {url}: {message}")]
    Connect {
        /// Fully qualified request URL.
        url: String,
        /// Description supplied by the transport.
        message: String,
    },
    /// The request did not complete before the deadline.
    #[error("request to {url} timed out after {}s", timeout.as_secs_f64())]
    Timeout {
        /// Fully qualified request URL.
        url: String,
        /// Deadline that expired.
        timeout: Duration,
    },
    /// Any other transport failure, such as an unreadable body.
    #[error("request to {url} failed: {message}")]
    Request {
        /// Fully qualified request URL.
        url: String,
        /// Description supplied by the transport.
        message: String,
    },
}
