//! Fixture builders shared by unit and behaviour tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use crate::{Location, PointOfInterest, Restaurant};

/// Construct a POI with a generic category.
///
/// # Examples
/// ```rust
/// use roteiro_core::test_support::poi;
///
/// assert_eq!(poi("Torre Eiffel").name, "Torre Eiffel");
/// ```
#[must_use]
pub fn poi(name: &str) -> PointOfInterest {
    PointOfInterest::new(name, "Atração")
}

/// Construct a POI positioned at `lat`/`lng`.
#[must_use]
pub fn poi_at(name: &str, lat: f64, lng: f64) -> PointOfInterest {
    poi(name).with_location(Location::new(lat, lng))
}

/// Construct a restaurant with mid-range defaults.
#[must_use]
pub fn restaurant(name: &str) -> Restaurant {
    Restaurant::new(name, "Local", "€€", 4.0)
}

/// Construct `count` POIs named `POI 1` to `POI {count}`.
#[must_use]
pub fn numbered_pois(count: usize) -> Vec<PointOfInterest> {
    (1..=count).map(|n| poi(&format!("POI {n}"))).collect()
}

/// Construct `count` restaurants named `Restaurante 1` onwards.
#[must_use]
pub fn numbered_restaurants(count: usize) -> Vec<Restaurant> {
    (1..=count)
        .map(|n| restaurant(&format!("Restaurante {n}")))
        .collect()
}
