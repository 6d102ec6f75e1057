//! HTTP adapters for geolookup.
//!
//! Responsibilities:
//! - Provide a [`geolookup_core::Transport`] over `reqwest`.
//! - Provide a template-driven [`geolookup_core::LookupBackend`] for services
//!   answering with flat JSON records.
//!
//! Boundaries:
//! - Do not encode lookup rules (live in `geolookup-core`).
//! - Keep blocking calls off async executors; see [`transport::HttpTransport`].
//!
//! Invariants:
//! - No global mutable state.
//!
//! # Example
//!
//! ```no_run
//! use geolookup_core::Lookup;
//! use geolookup_http::{HttpTransport, TemplateBackend};
//!
//! let backend = TemplateBackend::new(
//!     "https://nominatim.openstreetmap.org/search?format=json&q={query}",
//!     "https://nominatim.openstreetmap.org/search?format=json&q={query}",
//! )?;
//! let lookup = Lookup::new(backend, HttpTransport::new()?);
//!
//! if let Some(coords) = lookup.coordinates("Biloxi, MS")? {
//!     println!("{}, {}", coords.latitude, coords.longitude);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backend;
pub mod transport;

pub use backend::{BackendConfigError, PlaceResult, TemplateBackend};
pub use transport::{DEFAULT_USER_AGENT, HttpTransport, HttpTransportConfig, TransportBuildError};
