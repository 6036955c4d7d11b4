//! The planning seam between callers and itinerary allocators.

use crate::{DateRange, Itinerary, PointOfInterest, Restaurant, compute_date_range};

/// Parameters for a planning request.
///
/// The request carries the candidate pools, the expanded trip dates and an
/// optional seed. Without a seed the allocator shuffles from ambient
/// randomness, so two identical requests may yield different orderings.
///
/// # Examples
/// ```rust
/// use roteiro_core::{PlanRequest, PointOfInterest};
///
/// let request = PlanRequest::for_trip(
///     Some("2024-06-01"),
///     Some("2024-06-02"),
///     vec![PointOfInterest::new("Museu do Louvre", "Museu")],
///     Vec::new(),
/// )
/// .with_seed(7);
/// assert_eq!(request.days(), 2);
/// assert_eq!(request.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanRequest {
    /// Candidate sights for the trip.
    pub pois: Vec<PointOfInterest>,
    /// Candidate restaurants for the trip.
    pub restaurants: Vec<Restaurant>,
    /// Days and date labels to fill.
    pub range: DateRange,
    /// Seed for a reproducible shuffle.
    pub seed: Option<u64>,
}

impl PlanRequest {
    /// Construct an unseeded request over an already expanded range.
    #[must_use]
    pub const fn new(
        pois: Vec<PointOfInterest>,
        restaurants: Vec<Restaurant>,
        range: DateRange,
    ) -> Self {
        Self {
            pois,
            restaurants,
            range,
            seed: None,
        }
    }

    /// Construct a request by expanding a trip's start and end dates.
    #[must_use]
    pub fn for_trip(
        start: Option<&str>,
        end: Option<&str>,
        pois: Vec<PointOfInterest>,
        restaurants: Vec<Restaurant>,
    ) -> Self {
        Self::new(pois, restaurants, compute_date_range(start, end))
    }

    /// Pin the shuffle to `seed`.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of days to plan.
    #[must_use]
    pub const fn days(&self) -> usize {
        self.range.days
    }
}

/// Turn a [`PlanRequest`] into an [`Itinerary`].
///
/// Planning never fails: empty pools, zero-day ranges and mismatched date
/// labels all produce a structurally valid, possibly empty, itinerary.
/// Implementations must be `Send + Sync` and must not mutate shared state;
/// every call works on its own copies of the pools.
pub trait Planner: Send + Sync {
    /// Produce an itinerary for `request`.
    fn plan(&self, request: &PlanRequest) -> Itinerary;
}
