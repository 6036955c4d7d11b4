//! Facade crate for the Roteiro itinerary engine.
//!
//! This crate re-exports the core domain types and, behind the `planner`
//! feature, the default shuffle planner with its destination registry.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "planner")]
//! # {
//! use roteiro::{PlanRequest, Planner, PointOfInterest, ShufflePlanner};
//!
//! let request = PlanRequest::for_trip(
//!     Some("2024-06-01"),
//!     Some("2024-06-02"),
//!     vec![PointOfInterest::new("Museu do Louvre", "Museu")],
//!     Vec::new(),
//! )
//! .with_seed(3);
//! let itinerary = ShufflePlanner::default().plan(&request);
//! assert_eq!(itinerary.len(), 2);
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use roteiro_core::{
    DateParseError, DateRange, Itinerary, ItineraryDay, Location, PlanDiagnostics, PlanRequest,
    PlanSource, Planner, PointOfInterest, Restaurant, calculate_days, compute_date_range, dates,
    generate_dates, parse_trip_date,
};

#[cfg(feature = "test-support")]
pub use roteiro_core::test_support;

#[cfg(feature = "planner")]
pub use roteiro_planner::{
    CuratedDay, CuratedItinerary, DestinationRegistry, DestinationSignature, POIS_PER_PERIOD,
    PoolOverride, ShufflePlanner, generate_itinerary,
};
