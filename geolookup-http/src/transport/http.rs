//! `reqwest`-backed [`Transport`] with per-request timeouts.

use std::time::Duration;

use geolookup_core::{Transport, TransportError};
use log::debug;
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Error type for [`HttpTransport`] construction failures.
#[derive(Debug)]
pub enum TransportBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for TransportBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for TransportBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Default user agent for geocoding requests.
pub const DEFAULT_USER_AGENT: &str = "geolookup/0.1";

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// User agent string for requests.
    pub user_agent: String,
    /// Whether to honour proxy settings from the environment.
    pub system_proxy: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            system_proxy: true,
        }
    }
}

impl HttpTransportConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable proxies configured through environment variables.
    #[must_use]
    pub const fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }
}

/// Blocking HTTP GET transport for geocoding services.
///
/// The transport owns a current-thread Tokio runtime that is reused across
/// calls. When called from within a multi-threaded Tokio runtime (detected
/// via [`Handle::try_current()`] and [`RuntimeFlavor::MultiThread`]) it uses
/// that runtime's handle with [`tokio::task::block_in_place`] instead, to
/// avoid nested runtime panics. Inside a `current_thread` runtime it falls
/// back to its own runtime, which blocks the caller's executor for the
/// duration of the request.
///
/// Response bodies are returned whatever the HTTP status.
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, TransportBuildError> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a transport with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpTransportConfig) -> Result<Self, TransportBuildError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(TransportBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(TransportBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Configuration the transport was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// Fetch the response body asynchronously.
    async fn fetch_async(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, url, timeout))?;

        let status = response.status();
        if !status.is_success() {
            debug!("geocoding service answered {status} for {url}");
        }
        response
            .text()
            .await
            .map_err(|err| convert_reqwest_error(&err, url, timeout))
    }
}

impl Transport for HttpTransport {
    /// Fetch `url` within `timeout`.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime should
    /// be multi-threaded (`flavor = "multi_thread"`); see [`HttpTransport`].
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        // block_in_place requires a multi-threaded runtime; for current_thread
        // runtimes we fall back to our own stored runtime.
        let future = self.fetch_async(url, timeout);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

/// Convert a reqwest error to a `TransportError`.
///
/// A deadline that expires while connecting counts as a timeout.
fn convert_reqwest_error(error: &reqwest::Error, url: &str, timeout: Duration) -> TransportError {
    if error.is_timeout() {
        return TransportError::Timeout {
            url: url.to_owned(),
            timeout,
        };
    }

    if error.is_connect() {
        return TransportError::Connect {
            url: url.to_owned(),
            message: error.to_string(),
        };
    }

    TransportError::Request {
        url: url.to_owned(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpListener};
    use std::thread;

    #[fixture]
    fn transport() -> HttpTransport {
        HttpTransport::with_config(HttpTransportConfig::new().with_system_proxy(false))
            .expect("transport should build")
    }

    /// Serve exactly one canned HTTP response on a loopback port.
    fn serve_once(status_line: &'static str, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut request = Vec::new();
            let mut buf = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut buf).expect("read request");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
        });
        addr
    }

    #[rstest]
    fn returns_response_body(transport: HttpTransport) {
        let addr = serve_once("HTTP/1.1 200 OK", r#"[{"lat":30.4}]"#);

        let body = transport
            .get(&format!("http://{addr}/search?q=Biloxi"), Duration::from_secs(5))
            .expect("request should succeed");

        assert_eq!(body, r#"[{"lat":30.4}]"#);
    }

    #[rstest]
    fn error_statuses_still_return_the_body(transport: HttpTransport) {
        let addr = serve_once("HTTP/1.1 503 Service Unavailable", r#"{"error":"busy"}"#);

        let body = transport
            .get(&format!("http://{addr}/search?q=Biloxi"), Duration::from_secs(5))
            .expect("status codes are not transport errors");

        assert_eq!(body, r#"{"error":"busy"}"#);
    }

    #[rstest]
    fn refused_connection_is_a_connect_error(transport: HttpTransport) {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
            listener.local_addr().expect("local addr")
        };

        let err = transport
            .get(&format!("http://{addr}/search"), Duration::from_secs(5))
            .expect_err("nothing is listening");

        assert!(matches!(err, TransportError::Connect { .. }), "got {err:?}");
    }

    #[rstest]
    fn silent_server_times_out(transport: HttpTransport) {
        // Connections complete in the kernel backlog but nobody answers.
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");

        let err = transport
            .get(&format!("http://{addr}/search"), Duration::from_millis(200))
            .expect_err("server never answers");

        assert!(err.to_string().ends_with("timed out after 0.2s"), "got {err}");
        match err {
            TransportError::Timeout { url, timeout } => {
                assert_eq!(url, format!("http://{addr}/search"));
                assert_eq!(timeout, Duration::from_millis(200));
            }
            other => panic!("expected Timeout, got {other:?}"),
        }
        drop(listener);
    }

    #[rstest]
    fn invalid_url_is_a_request_error(transport: HttpTransport) {
        let err = transport
            .get("not a url", Duration::from_secs(1))
            .expect_err("should fail");

        assert!(matches!(err, TransportError::Request { .. }), "got {err:?}");
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpTransportConfig::new()
            .with_user_agent("test-agent/1.0")
            .with_system_proxy(false);

        assert_eq!(config.user_agent, "test-agent/1.0");
        assert!(!config.system_proxy);
        assert_eq!(HttpTransportConfig::default().user_agent, DEFAULT_USER_AGENT);
    }

    #[rstest]
    fn transport_keeps_its_configuration() {
        let transport = HttpTransport::with_config(
            HttpTransportConfig::new()
                .with_user_agent("geolookup-tests/1.0")
                .with_system_proxy(false),
        )
        .expect("transport should build");

        assert_eq!(transport.config().user_agent, "geolookup-tests/1.0");
        assert!(!transport.config().system_proxy);
    }
}
