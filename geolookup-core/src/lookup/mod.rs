//! Forward and reverse geocoding over a pluggable backend and transport.
//!
//! [`Lookup`] owns the control flow shared by every provider:
//!
//! 1. blank queries short-circuit without touching the network;
//! 2. the backend builds the request URL;
//! 3. the transport performs one GET bounded by [`LookupConfig::timeout`];
//! 4. the body is decoded as JSON and each record becomes one result.
//!
//! Connection failures and timeouts are logged as warnings and reported as
//! "no results". Malformed payloads are returned as errors.
//!
//! # Example
//!
//! ```
//! use geolookup_core::Lookup;
//! use geolookup_core::test_support::{StubBackend, StubTransport};
//!
//! let transport = StubTransport::with_body(
//!     r#"[{"lat": 30.4, "lon": -88.9, "formatted_address": "Biloxi, MS, USA"}]"#,
//! );
//! let lookup = Lookup::new(StubBackend, transport);
//!
//! let coords = lookup.coordinates("Biloxi, MS")?.expect("one match");
//! assert_eq!((coords.latitude, coords.longitude), (30.4, -88.9));
//! # Ok::<(), geolookup_core::LookupError>(())
//! ```

mod backend;
mod config;
mod error;
mod outcome;

use log::{debug, warn};
use serde_json::Value;

use crate::{Coordinates, Query, Transport, TransportError};

pub use backend::{GeocodeResult, LookupBackend};
pub use config::{DEFAULT_TIMEOUT, LookupConfig};
pub use error::LookupError;
pub use outcome::{CONNECTION_WARNING, FetchOutcome};

/// Geocoding lookups against one backend.
///
/// Every call is independent: the lookup keeps no state between requests
/// beyond its read-only configuration.
#[derive(Debug, Clone)]
pub struct Lookup<B, T> {
    backend: B,
    transport: T,
    config: LookupConfig,
}

impl<B, T> Lookup<B, T>
where
    B: LookupBackend,
    T: Transport,
{
    /// Create a lookup with the default configuration.
    pub fn new(backend: B, transport: T) -> Self {
        Self::with_config(backend, transport, LookupConfig::default())
    }

    /// Create a lookup with explicit configuration.
    pub const fn with_config(backend: B, transport: T, config: LookupConfig) -> Self {
        Self {
            backend,
            transport,
            config,
        }
    }

    /// Configuration applied to every request.
    pub const fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// The provider-specific backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// The transport performing requests.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Look up `query` and build one result per returned record.
    ///
    /// Returns `Ok(Some(results))` when the service answered, in the order
    /// the service listed them. A blank address yields `Ok(Some(vec![]))`
    /// without a request. `Ok(None)` means no data was obtained: the host was
    /// unreachable, the request timed out (both logged as warnings) or the
    /// service answered `null`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the body is not JSON, is not a list of
    /// records, holds a record the backend rejects, or the transport fails
    /// for a reason other than connection or timeout.
    pub fn search(&self, query: impl Into<Query>) -> Result<Option<Vec<B::Output>>, LookupError> {
        let query = query.into();
        if query.is_blank() {
            return Ok(Some(Vec::new()));
        }

        let Some(records) = self.fetch_parsed_data(&query.to_query_string(), query.is_reverse())?
        else {
            return Ok(None);
        };

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                self.backend
                    .build_result(record)
                    .map_err(|source| LookupError::InvalidRecord {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Coordinates of the best match for `address`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Lookup::search`].
    pub fn coordinates(&self, address: &str) -> Result<Option<Coordinates>, LookupError> {
        let results = self.search(address)?.unwrap_or_default();
        Ok(results.first().map(GeocodeResult::coordinates))
    }

    /// Formatted address of the best match for a coordinate pair.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Lookup::search`].
    pub fn address(&self, latitude: f64, longitude: f64) -> Result<Option<String>, LookupError> {
        let results = self.search((latitude, longitude))?.unwrap_or_default();
        Ok(results.first().map(|result| result.address().to_owned()))
    }

    /// Fetch and decode the records for `query`, logging tolerated failures.
    fn fetch_parsed_data(
        &self,
        query: &str,
        reverse: bool,
    ) -> Result<Option<Vec<Value>>, LookupError> {
        let outcome = self.fetch_raw_data(query, reverse)?;
        if let Some(warning) = outcome.warning() {
            warn!("{warning}");
        }
        match outcome {
            FetchOutcome::Payload(body) => decode_records(&body),
            FetchOutcome::Blank
            | FetchOutcome::ConnectionFailed { .. }
            | FetchOutcome::TimedOut { .. } => Ok(None),
        }
    }

    /// Perform the request for `query` and classify what came back.
    fn fetch_raw_data(&self, query: &str, reverse: bool) -> Result<FetchOutcome, LookupError> {
        if query.trim().is_empty() {
            return Ok(FetchOutcome::Blank);
        }

        let request_url = self.backend.query_url(query, reverse);
        let timeout = self.config.timeout;
        debug!("geocoding request (reverse: {reverse}): {request_url}");

        match self.transport.get(&request_url, timeout) {
            Ok(body) => Ok(FetchOutcome::Payload(body)),
            Err(TransportError::Connect { url, message }) => {
                Ok(FetchOutcome::ConnectionFailed { url, message })
            }
            Err(TransportError::Timeout { url, .. }) => Ok(FetchOutcome::TimedOut { url, timeout }),
            Err(source) => Err(LookupError::Transport { source }),
        }
    }
}

/// Decode a response body into its records.
///
/// A top-level `null` carries no data.
fn decode_records(body: &str) -> Result<Option<Vec<Value>>, LookupError> {
    let value: Value =
        serde_json::from_str(body).map_err(|source| LookupError::Decode { source })?;
    match value {
        Value::Null => Ok(None),
        Value::Array(records) => Ok(Some(records)),
        other => Err(LookupError::UnexpectedPayload {
            kind: json_kind(&other),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
