//! Core geocoding types for geolookup.
//!
//! Responsibilities:
//! - Model forward and reverse queries and the coordinates they exchange.
//! - Define the contracts concrete providers ([`LookupBackend`]) and network
//!   layers ([`Transport`]) implement.
//! - Run the shared lookup flow in [`Lookup`].
//!
//! Boundaries:
//! - No HTTP client lives here; see `geolookup-http`.
//! - No provider-specific URL formats or record layouts.
//!
//! Invariants:
//! - One request per lookup, at most.
//! - No global mutable state; timeouts travel in [`LookupConfig`].

mod coordinates;
pub mod lookup;
mod query;
pub mod transport;

#[doc(hidden)]
pub mod test_support;

pub use coordinates::Coordinates;
pub use lookup::{
    CONNECTION_WARNING, DEFAULT_TIMEOUT, FetchOutcome, GeocodeResult, Lookup, LookupBackend,
    LookupConfig, LookupError,
};
pub use query::Query;
pub use transport::{Transport, TransportError};
