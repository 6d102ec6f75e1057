use std::error::Error as StdError;

use thiserror::Error;

use crate::TransportError;

/// Errors from [`crate::Lookup`] operations.
///
/// Connection failures and timeouts never appear here: they are logged and
/// reported as "no results". What remains are malformed payloads and
/// transport failures of any other kind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The response body was not valid JSON.
    #[error("failed to decode geocoding response: {source}")]
    Decode {
        /// Parser error.
        source: serde_json::Error,
    },
    /// The response decoded to something other than a list of records.
    #[error("geocoding response was {kind}, expected an array of records")]
    UnexpectedPayload {
        /// JSON type found at the top level.
        kind: &'static str,
    },
    /// The backend could not build a result from a record.
    #[error("failed to read geocoding record {index}: {source}")]
    InvalidRecord {
        /// Position of the record in the response.
        index: usize,
        /// Error reported by the backend.
        source: Box<dyn StdError + Send + Sync>,
    },
    /// The transport failed for a reason other than connection or timeout.
    #[error("geocoding request failed: {source}")]
    Transport {
        /// Underlying transport error.
        source: TransportError,
    },
}
