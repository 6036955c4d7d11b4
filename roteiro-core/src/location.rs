//! Geographic positions attached to POIs and restaurants.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A WGS84 position as published by the data providers.
///
/// Converts to [`geo::Coord`] with `x = lng` and `y = lat`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roteiro_core::Location;
///
/// let tower = Location::new(48.8584, 2.2945);
/// let coord: Coord<f64> = tower.into();
/// assert_eq!(coord.x, 2.2945);
/// assert_eq!(coord.y, 48.8584);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Location {
    /// Construct a location from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Return the position as a `geo` coordinate.
    #[must_use]
    pub const fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

impl From<Location> for Coord<f64> {
    fn from(location: Location) -> Self {
        location.to_coord()
    }
}

impl From<Coord<f64>> for Location {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}
