//! Latitude/longitude pairs exchanged with geocoding services.

use geo::Point;
use serde::{Deserialize, Serialize};

/// A location expressed in decimal degrees.
///
/// Tuples convert in `(latitude, longitude)` order, the order geocoding
/// services use for reverse queries. [`geo`] types store the longitude on the
/// x axis, so the conversion to [`Point`] swaps the components.
///
/// # Examples
///
/// ```
/// use geolookup_core::Coordinates;
///
/// let biloxi = Coordinates::new(30.4, -88.9);
/// assert_eq!(<(f64, f64)>::from(biloxi), (30.4, -88.9));
///
/// let point = biloxi.to_point();
/// assert_eq!(point.x(), -88.9);
/// assert_eq!(point.y(), 30.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Degrees east of the prime meridian.
    pub longitude: f64,
}

impl Coordinates {
    /// Construct a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Convert to a [`geo::Point`] with `x = longitude` and `y = latitude`.
    #[must_use]
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(value: Coordinates) -> Self {
        (value.latitude, value.longitude)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(value: Coordinates) -> Self {
        value.to_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn point_conversion_swaps_axes() {
        let coords = Coordinates::new(51.5, -0.1);
        let point: Point<f64> = coords.into();
        assert_eq!(point.x(), -0.1);
        assert_eq!(point.y(), 51.5);
        assert_eq!(Coordinates::from(point), coords);
    }

    #[rstest]
    fn serialises_with_named_fields() {
        let json = serde_json::to_value(Coordinates::new(30.4, -88.9)).expect("serialise");
        assert_eq!(
            json,
            serde_json::json!({ "latitude": 30.4, "longitude": -88.9 })
        );
    }
}
