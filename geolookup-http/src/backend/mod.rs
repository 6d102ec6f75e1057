//! A configurable geocoding backend driven by URL templates.
//!
//! [`TemplateBackend`] suits services that take the query as a single URL
//! parameter and answer with a JSON array of flat records, such as
//! Nominatim-style `search`/`reverse` endpoints. Records are read into
//! [`PlaceResult`].
//!
//! # Example
//!
//! ```
//! use geolookup_core::LookupBackend;
//! use geolookup_http::backend::TemplateBackend;
//!
//! let backend = TemplateBackend::new(
//!     "https://geocode.example.com/search?format=json&q={query}",
//!     "https://geocode.example.com/reverse?format=json&q={query}",
//! )?;
//!
//! assert_eq!(
//!     backend.query_url("Biloxi, MS", false),
//!     "https://geocode.example.com/search?format=json&q=Biloxi%2C+MS",
//! );
//! # Ok::<(), geolookup_http::backend::BackendConfigError>(())
//! ```

mod place;
mod template;

pub use place::PlaceResult;
pub use template::{BackendConfigError, QUERY_PLACEHOLDER, TemplateBackend};
