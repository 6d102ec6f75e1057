//! Fetch raw geocoding payloads over a network.
//!
//! The [`Transport`] trait abstracts the single HTTP GET a lookup performs.
//! Callers supply the fully built URL and the timeout to honour, and receive
//! the response body as text.
//!
//! Failures are classified so the lookup layer can tell connection problems
//! and timeouts apart from everything else.

mod error;

use std::time::Duration;

pub use error::TransportError;

/// Perform a blocking HTTP GET and return the response body.
///
/// Implementations must return the body regardless of the HTTP status code;
/// geocoding services commonly describe failures inside a `200` or `4xx`
/// payload and interpreting it is the backend's concern.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use geolookup_core::{Transport, TransportError};
///
/// struct Canned(&'static str);
///
/// impl Transport for Canned {
///     fn get(&self, _url: &str, _timeout: Duration) -> Result<String, TransportError> {
///         Ok(self.0.to_owned())
///     }
/// }
///
/// let body = Canned("[]").get("http://example.com/search?q=x", Duration::from_secs(3))?;
/// assert_eq!(body, "[]");
/// # Ok::<(), TransportError>(())
/// ```
pub trait Transport {
    /// Fetch `url`, giving up once `timeout` has elapsed.
    ///
    /// Implementations must report an expired deadline as
    /// [`TransportError::Timeout`] and a failure to reach the host as
    /// [`TransportError::Connect`].
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        (**self).get(url, timeout)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        (**self).get(url, timeout)
    }
}
