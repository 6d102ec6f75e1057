//! HTTP transport for geocoding lookups.
//!
//! This module provides [`HttpTransport`], an implementation of
//! [`geolookup_core::Transport`] backed by `reqwest`.
//!
//! # Architecture
//!
//! The [`Transport`](geolookup_core::Transport) trait is synchronous so
//! lookups stay usable from plain threads. The transport bridges the async
//! client to the sync interface by blocking on a Tokio runtime it owns.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use geolookup_core::Transport;
//! use geolookup_http::transport::{HttpTransport, HttpTransportConfig};
//!
//! let config = HttpTransportConfig::new().with_user_agent("my-app/1.0");
//! let transport = HttpTransport::with_config(config)?;
//!
//! let body = transport.get(
//!     "https://geocode.example.com/search?q=Biloxi%2C+MS",
//!     Duration::from_secs(3),
//! )?;
//! println!("{body}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod http;

pub use http::{DEFAULT_USER_AGENT, HttpTransport, HttpTransportConfig, TransportBuildError};
