//! Core domain types for the Roteiro itinerary engine.
//!
//! The records here mirror what the location data providers hand over:
//! points of interest and restaurants for a destination. The
//! [`dates`] module expands a trip's start and end into calendar days, and
//! the [`Planner`] trait is the seam through which an allocator turns a
//! [`PlanRequest`] into an [`Itinerary`].
//!
//! Nothing in this crate fails on bad input. Missing or malformed dates
//! degrade to empty ranges and are logged through the `log` facade.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dates;
mod itinerary;
mod location;
mod planner;
mod poi;
mod restaurant;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dates::{
    DateParseError, DateRange, calculate_days, compute_date_range, generate_dates,
    parse_trip_date,
};
pub use itinerary::{Itinerary, ItineraryDay, PlanDiagnostics, PlanSource};
pub use location::Location;
pub use planner::{PlanRequest, Planner};
pub use poi::PointOfInterest;
pub use restaurant::Restaurant;
