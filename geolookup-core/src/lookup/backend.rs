//! Contracts concrete geocoding providers implement.

use std::error::Error as StdError;

use serde_json::Value;

use crate::Coordinates;

/// A single candidate location returned by a geocoding service.
pub trait GeocodeResult {
    /// Position of the candidate.
    fn coordinates(&self) -> Coordinates;

    /// Human-readable, formatted address of the candidate.
    fn address(&self) -> &str;
}

/// Provider-specific behaviour plugged into [`crate::Lookup`].
///
/// A backend knows how to address its service and how to read the records
/// the service returns. Everything else (blank-input handling, the request,
/// JSON decoding and failure logging) is shared.
///
/// # Examples
///
/// ```rust
/// use geolookup_core::{Coordinates, GeocodeResult, LookupBackend};
/// use serde::Deserialize;
/// use serde_json::Value;
///
/// #[derive(Deserialize)]
/// struct Place {
///     lat: f64,
///     lon: f64,
///     name: String,
/// }
///
/// impl GeocodeResult for Place {
///     fn coordinates(&self) -> Coordinates {
///         Coordinates::new(self.lat, self.lon)
///     }
///
///     fn address(&self) -> &str {
///         &self.name
///     }
/// }
///
/// struct Example;
///
/// impl LookupBackend for Example {
///     type Output = Place;
///     type Error = serde_json::Error;
///
///     fn query_url(&self, query: &str, reverse: bool) -> String {
///         let path = if reverse { "reverse" } else { "search" };
///         format!("https://geocode.example.com/{path}?q={query}")
///     }
///
///     fn build_result(&self, record: Value) -> Result<Place, serde_json::Error> {
///         serde_json::from_value(record)
///     }
/// }
///
/// let url = Example.query_url("30.4,-88.9", true);
/// assert_eq!(url, "https://geocode.example.com/reverse?q=30.4,-88.9");
/// ```
pub trait LookupBackend {
    /// Result type built from each record.
    type Output: GeocodeResult;
    /// Error raised when a record cannot be read.
    type Error: StdError + Send + Sync + 'static;

    /// Build the request URL for `query`.
    ///
    /// `query` is never blank. When `reverse` is set it holds
    /// `"latitude,longitude"`.
    fn query_url(&self, query: &str, reverse: bool) -> String;

    /// Build one result from one decoded record.
    fn build_result(&self, record: Value) -> Result<Self::Output, Self::Error>;
}
