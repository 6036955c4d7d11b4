//! Destination lookups consulted before the general allocator runs.
//!
//! Two kinds of entries exist, each keyed by a [`DestinationSignature`]:
//!
//! - [`CuratedItinerary`] replaces the whole plan with hand-authored days.
//! - [`PoolOverride`] replaces only the candidate pools; the shuffled
//!   allocation still runs over the replacement data.
//!
//! Entries are checked in registration order and the first match wins.

use geo::{Intersects, Rect};
use roteiro_core::{DateRange, ItineraryDay, PointOfInterest, Restaurant};

use crate::curated;

/// Detection predicate evaluated against a request's POI pool.
///
/// A signature matches when every configured constraint holds and at least
/// one POI is recognised, either by a landmark name (case-insensitive,
/// surrounding whitespace ignored) or by lying inside the signature's area.
///
/// # Examples
/// ```
/// use roteiro_core::PointOfInterest;
/// use roteiro_planner::DestinationSignature;
///
/// let paris = DestinationSignature::landmarks(&["Torre Eiffel"]).with_day_count(3);
/// let pool = vec![PointOfInterest::new("torre eiffel ", "Monumento")];
/// assert!(paris.matches(&pool, 3));
/// assert!(!paris.matches(&pool, 4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationSignature {
    landmarks: &'static [&'static str],
    day_count: Option<usize>,
    max_pool_size: Option<usize>,
    area: Option<Rect<f64>>,
}

impl DestinationSignature {
    /// Recognise POIs named after any of `landmarks`.
    #[must_use]
    pub const fn landmarks(landmarks: &'static [&'static str]) -> Self {
        Self {
            landmarks,
            day_count: None,
            max_pool_size: None,
            area: None,
        }
    }

    /// Only match trips of exactly `days` days.
    #[must_use]
    pub const fn with_day_count(mut self, days: usize) -> Self {
        self.day_count = Some(days);
        self
    }

    /// Only match pools holding fewer than `limit` POIs.
    #[must_use]
    pub const fn with_max_pool_size(mut self, limit: usize) -> Self {
        self.max_pool_size = Some(limit);
        self
    }

    /// Also recognise POIs located inside `area` (`x = lng`, `y = lat`).
    #[must_use]
    pub const fn with_area(mut self, area: Rect<f64>) -> Self {
        self.area = Some(area);
        self
    }

    /// Report whether the signature matches a pool planned over `days`.
    #[must_use]
    pub fn matches(&self, pois: &[PointOfInterest], days: usize) -> bool {
        if self.day_count.is_some_and(|expected| expected != days) {
            return false;
        }
        if self.max_pool_size.is_some_and(|limit| pois.len() >= limit) {
            return false;
        }
        pois.iter().any(|poi| self.recognises(poi))
    }

    fn recognises(&self, poi: &PointOfInterest) -> bool {
        let name = poi.name.trim();
        if self
            .landmarks
            .iter()
            .any(|landmark| landmark.eq_ignore_ascii_case(name))
        {
            return true;
        }
        match (self.area, poi.location) {
            // `Intersects` treats boundary points as inside the rectangle.
            (Some(area), Some(location)) => area.intersects(&location.to_coord()),
            _ => false,
        }
    }
}

/// One hand-authored day: exactly two sights per period and both meals.
#[derive(Debug, Clone, PartialEq)]
pub struct CuratedDay {
    /// Label describing the day.
    pub theme: String,
    /// Sights visited before lunch, in authored order.
    pub morning: [PointOfInterest; 2],
    /// Lunch venue.
    pub lunch: Restaurant,
    /// Sights visited after lunch, in authored order.
    pub afternoon: [PointOfInterest; 2],
    /// Dinner venue.
    pub dinner: Restaurant,
}

/// A fixed itinerary substituted for a recognised destination.
#[derive(Debug, Clone)]
pub struct CuratedItinerary {
    name: &'static str,
    signature: DestinationSignature,
    days: fn() -> Vec<CuratedDay>,
}

impl CuratedItinerary {
    /// Register a curated itinerary whose days are built by `days`.
    #[must_use]
    pub const fn new(
        name: &'static str,
        signature: DestinationSignature,
        days: fn() -> Vec<CuratedDay>,
    ) -> Self {
        Self {
            name,
            signature,
            days,
        }
    }

    /// Registry name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Detection predicate.
    #[must_use]
    pub const fn signature(&self) -> &DestinationSignature {
        &self.signature
    }

    /// The authored days, without dates.
    #[must_use]
    pub fn days(&self) -> Vec<CuratedDay> {
        (self.days)()
    }

    /// Assemble the itinerary for `range`, substituting only the dates.
    ///
    /// The authored day count wins; `range` supplies labels by position and
    /// missing labels are left empty.
    #[must_use]
    pub fn assemble(&self, range: &DateRange) -> Vec<ItineraryDay> {
        self.days()
            .into_iter()
            .enumerate()
            .map(|(index, day)| {
                let [first_morning, second_morning] = day.morning;
                let [first_afternoon, second_afternoon] = day.afternoon;
                ItineraryDay {
                    day: index.saturating_add(1),
                    date: range.date(index).to_owned(),
                    morning: vec![first_morning, second_morning],
                    lunch: Some(day.lunch),
                    afternoon: vec![first_afternoon, second_afternoon],
                    dinner: Some(day.dinner),
                    theme: Some(day.theme),
                }
            })
            .collect()
    }
}

/// Replacement pools used when a request's own data is too thin.
#[derive(Debug, Clone)]
pub struct PoolOverride {
    name: &'static str,
    signature: DestinationSignature,
    pois: fn() -> Vec<PointOfInterest>,
    restaurants: fn() -> Vec<Restaurant>,
}

impl PoolOverride {
    /// Register a pool override built by `pois` and `restaurants`.
    #[must_use]
    pub const fn new(
        name: &'static str,
        signature: DestinationSignature,
        pois: fn() -> Vec<PointOfInterest>,
        restaurants: fn() -> Vec<Restaurant>,
    ) -> Self {
        Self {
            name,
            signature,
            pois,
            restaurants,
        }
    }

    /// Registry name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Detection predicate.
    #[must_use]
    pub const fn signature(&self) -> &DestinationSignature {
        &self.signature
    }

    /// The replacement POI pool.
    #[must_use]
    pub fn pois(&self) -> Vec<PointOfInterest> {
        (self.pois)()
    }

    /// The replacement restaurant pool.
    #[must_use]
    pub fn restaurants(&self) -> Vec<Restaurant> {
        (self.restaurants)()
    }
}

/// Ordered collection of curated itineraries and pool overrides.
///
/// [`DestinationRegistry::default`] holds the built-in destinations:
/// a three-day Paris itinerary and the Madrid fallback pools.
///
/// # Examples
/// ```
/// use roteiro_core::PointOfInterest;
/// use roteiro_planner::DestinationRegistry;
///
/// let registry = DestinationRegistry::default();
/// let pool = vec![PointOfInterest::new("Torre Eiffel", "Monumento")];
/// let curated = registry.find_curated(&pool, 3).expect("Paris is registered");
/// assert_eq!(curated.name(), "paris-3-days");
/// assert!(registry.find_curated(&pool, 2).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DestinationRegistry {
    curated: Vec<CuratedItinerary>,
    overrides: Vec<PoolOverride>,
}

impl DestinationRegistry {
    /// Construct a registry with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            curated: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Append a curated itinerary.
    #[must_use]
    pub fn with_curated(mut self, itinerary: CuratedItinerary) -> Self {
        self.curated.push(itinerary);
        self
    }

    /// Append a pool override.
    #[must_use]
    pub fn with_override(mut self, pool_override: PoolOverride) -> Self {
        self.overrides.push(pool_override);
        self
    }

    /// First curated itinerary matching the pool and day count.
    #[must_use]
    pub fn find_curated(
        &self,
        pois: &[PointOfInterest],
        days: usize,
    ) -> Option<&CuratedItinerary> {
        self.curated
            .iter()
            .find(|itinerary| itinerary.signature.matches(pois, days))
    }

    /// First pool override matching the pool and day count.
    #[must_use]
    pub fn find_override(&self, pois: &[PointOfInterest], days: usize) -> Option<&PoolOverride> {
        self.overrides
            .iter()
            .find(|pool_override| pool_override.signature.matches(pois, days))
    }

    /// Registered curated itineraries in lookup order.
    pub fn curated(&self) -> impl Iterator<Item = &CuratedItinerary> {
        self.curated.iter()
    }

    /// Registered pool overrides in lookup order.
    pub fn overrides(&self) -> impl Iterator<Item = &PoolOverride> {
        self.overrides.iter()
    }
}

impl Default for DestinationRegistry {
    fn default() -> Self {
        Self::empty()
            .with_curated(curated::paris::itinerary())
            .with_override(curated::madrid::pool_override())
    }
}
