//! Test doubles for lookups.
//!
//! [`StubTransport`] answers every request with a pre-configured body or
//! error and records what it was asked for. [`StubBackend`] reads records of
//! the form `{"lat": .., "lon": .., "formatted_address": ..}`.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::{Coordinates, GeocodeResult, LookupBackend, Transport, TransportError};

/// A request observed by [`StubTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubRequest {
    /// URL passed to the transport.
    pub url: String,
    /// Timeout passed to the transport.
    pub timeout: Duration,
}

/// Stub `Transport` returning a canned response without network access.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use geolookup_core::Transport;
/// use geolookup_core::test_support::StubTransport;
///
/// let transport = StubTransport::with_body("[]");
/// let body = transport.get("stub://geocode", Duration::from_secs(1))?;
///
/// assert_eq!(body, "[]");
/// assert_eq!(transport.requests().len(), 1);
/// # Ok::<(), geolookup_core::TransportError>(())
/// ```
#[derive(Debug)]
pub struct StubTransport {
    response: StubResponse,
    requests: Mutex<Vec<StubRequest>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Body(String),
    Error(TransportError),
}

impl StubTransport {
    /// Create a transport answering every request with `body`.
    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new(StubResponse::Body(body.into()))
    }

    /// Create a transport failing every request with `error`.
    #[must_use]
    pub fn with_error(error: TransportError) -> Self {
        Self::new(StubResponse::Error(error))
    }

    const fn new(response: StubResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<StubRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(StubRequest {
                url: url.to_owned(),
                timeout,
            });

        match &self.response {
            StubResponse::Body(body) => Ok(body.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// Record shape understood by [`StubBackend`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StubResult {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Formatted address.
    pub formatted_address: String,
}

impl GeocodeResult for StubResult {
    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }

    fn address(&self) -> &str {
        &self.formatted_address
    }
}

/// Backend with a fixed, readable URL scheme.
///
/// URLs take the form `stub://geocode?reverse={reverse}&q={query}` with the
/// query left unencoded so tests can assert on it directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubBackend;

impl LookupBackend for StubBackend {
    type Output = StubResult;
    type Error = serde_json::Error;

    fn query_url(&self, query: &str, reverse: bool) -> String {
        format!("stub://geocode?reverse={reverse}&q={query}")
    }

    fn build_result(&self, record: Value) -> Result<StubResult, serde_json::Error> {
        serde_json::from_value(record)
    }
}
