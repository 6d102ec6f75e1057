//! Forward and reverse geocoding queries.

use std::fmt;

use crate::Coordinates;

/// A single geocoding request.
///
/// An address is resolved to coordinates (forward geocoding); a coordinate
/// pair is resolved to an address (reverse geocoding). Queries are built per
/// call from whatever the caller has to hand:
///
/// ```
/// use geolookup_core::{Coordinates, Query};
///
/// let forward = Query::from("Biloxi, MS");
/// assert!(!forward.is_reverse());
///
/// let reverse = Query::from((30.4, -88.9));
/// assert!(reverse.is_reverse());
/// assert_eq!(reverse.to_query_string(), "30.4,-88.9");
/// assert_eq!(reverse, Query::from(Coordinates::new(30.4, -88.9)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// A free-form address.
    Address(String),
    /// A latitude/longitude pair.
    Coordinates(Coordinates),
}

impl Query {
    /// Whether the query asks for an address rather than coordinates.
    #[must_use]
    pub const fn is_reverse(&self) -> bool {
        matches!(self, Self::Coordinates(_))
    }

    /// Whether the query carries nothing to look up.
    ///
    /// Only an address made of whitespace (or nothing) is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Address(address) => address.trim().is_empty(),
            Self::Coordinates(_) => false,
        }
    }

    /// Join the query arguments into the string handed to backends.
    ///
    /// Coordinates are joined with a bare comma, latitude first.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => f.write_str(address),
            Self::Coordinates(coords) => write!(f, "{},{}", coords.latitude, coords.longitude),
        }
    }
}

impl From<&str> for Query {
    fn from(address: &str) -> Self {
        Self::Address(address.to_owned())
    }
}

impl From<String> for Query {
    fn from(address: String) -> Self {
        Self::Address(address)
    }
}

impl From<&String> for Query {
    fn from(address: &String) -> Self {
        Self::Address(address.clone())
    }
}

impl From<(f64, f64)> for Query {
    fn from(pair: (f64, f64)) -> Self {
        Self::Coordinates(pair.into())
    }
}

impl From<Coordinates> for Query {
    fn from(coords: Coordinates) -> Self {
        Self::Coordinates(coords)
    }
}
