//! Facade crate for geolookup.
//!
//! This crate re-exports the core lookup types and, behind the `http` feature,
//! the `reqwest` transport and URL-template backend.

#![forbid(unsafe_code)]

pub use geolookup_core::{
    CONNECTION_WARNING, Coordinates, DEFAULT_TIMEOUT, FetchOutcome, GeocodeResult, Lookup,
    LookupBackend, LookupConfig, LookupError, Query, Transport, TransportError,
};

#[cfg(feature = "http")]
pub use geolookup_http::{
    BackendConfigError, HttpTransport, HttpTransportConfig, PlaceResult, TemplateBackend,
    TransportBuildError,
};
