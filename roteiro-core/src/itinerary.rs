//! Generated day-by-day schedules.
//!
//! An [`Itinerary`] is produced fresh for every planning call and never
//! persisted. Rendering layers read it; nothing mutates it afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PointOfInterest, Restaurant};

/// One day of a trip: two sightseeing periods and two meals.
///
/// `morning` and `afternoon` hold at most two POIs each. A meal is `None`
/// only when no restaurant was available at all.
///
/// # Examples
/// ```
/// use roteiro_core::ItineraryDay;
///
/// let day = ItineraryDay::new(1, "2024-06-01");
/// assert_eq!(day.day, 1);
/// assert!(day.morning.is_empty());
/// assert!(day.lunch.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItineraryDay {
    /// One-based position of the day in the trip.
    pub day: usize,
    /// `YYYY-MM-DD` label, empty when the trip start was unknown.
    pub date: String,
    /// Sights visited before lunch.
    pub morning: Vec<PointOfInterest>,
    /// Lunch venue.
    pub lunch: Option<Restaurant>,
    /// Sights visited after lunch.
    pub afternoon: Vec<PointOfInterest>,
    /// Dinner venue.
    pub dinner: Option<Restaurant>,
    /// Label describing the day; only curated itineraries set it.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub theme: Option<String>,
}

impl ItineraryDay {
    /// Construct an empty day at position `day` labelled `date`.
    #[must_use]
    pub fn new(day: usize, date: impl Into<String>) -> Self {
        Self {
            day,
            date: date.into(),
            ..Self::default()
        }
    }

    /// Iterate over the day's POIs, morning first.
    pub fn pois(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.morning.iter().chain(self.afternoon.iter())
    }

    /// Iterate over the day's restaurants, lunch first.
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.lunch.iter().chain(self.dinner.iter())
    }
}

/// Where an itinerary's content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum PlanSource {
    /// A hand-authored itinerary replaced the request's pools wholesale.
    Curated {
        /// Registry name of the curated itinerary.
        destination: String,
    },
    /// Days were allocated from shuffled pools.
    General {
        /// Registry name of the dataset that replaced the request's pools,
        /// if one matched.
        #[cfg_attr(feature = "serde", serde(rename = "poolOverride"))]
        pool_override: Option<String>,
    },
}

impl Default for PlanSource {
    fn default() -> Self {
        Self::General {
            pool_override: None,
        }
    }
}

/// Counters describing how a general-case itinerary was filled.
///
/// Curated itineraries leave every counter at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlanDiagnostics {
    /// Size of the POI pool the allocator drew from.
    pub pool_pois: usize,
    /// Size of the restaurant pool the allocator drew from.
    pub pool_restaurants: usize,
    /// POI slots filled by reuse after the pool was exhausted.
    pub pois_reused: usize,
    /// Meal slots filled by reuse after the pool was exhausted.
    pub restaurants_reused: usize,
}

/// A complete generated schedule.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Itinerary {
    /// Days in trip order.
    pub days: Vec<ItineraryDay>,
    /// Which path produced the days.
    pub source: PlanSource,
    /// Allocation counters.
    pub diagnostics: PlanDiagnostics,
}

impl Itinerary {
    /// Number of days in the itinerary.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.days.len()
    }

    /// Report whether the itinerary has no days.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Consume the itinerary and return its days.
    #[must_use]
    pub fn into_days(self) -> Vec<ItineraryDay> {
        self.days
    }
}
