//! `ShufflePlanner` implementation.
//!
//! One draining queue per pool is shared across every slot of every day, so
//! a POI placed in the morning of day 1 is not offered again until the pool
//! runs dry.

use std::borrow::Cow;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roteiro_core::{
    DateRange, Itinerary, ItineraryDay, PlanDiagnostics, PlanRequest, PlanSource, Planner,
    PointOfInterest, Restaurant,
};

use crate::queue::DrainingQueue;
use crate::registry::{CuratedItinerary, DestinationRegistry};

/// POIs scheduled in each of the morning and afternoon periods.
pub const POIS_PER_PERIOD: usize = 2;

/// Planner that shuffles the candidate pools and drains them day by day.
///
/// Curated itineraries and pool overrides are looked up in the
/// [`DestinationRegistry`] before allocation.
///
/// # Examples
/// ```
/// use roteiro_core::test_support::{numbered_pois, numbered_restaurants};
/// use roteiro_core::{PlanRequest, Planner};
/// use roteiro_planner::ShufflePlanner;
///
/// let request = PlanRequest::for_trip(
///     Some("2024-06-01"),
///     Some("2024-06-02"),
///     numbered_pois(8),
///     numbered_restaurants(4),
/// )
/// .with_seed(42);
/// let itinerary = ShufflePlanner::default().plan(&request);
///
/// assert_eq!(itinerary.len(), 2);
/// assert_eq!(itinerary.diagnostics.pois_reused, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShufflePlanner {
    registry: DestinationRegistry,
}

impl ShufflePlanner {
    /// Construct a planner consulting `registry`.
    #[must_use]
    pub const fn with_registry(registry: DestinationRegistry) -> Self {
        Self { registry }
    }

    /// The registry consulted before allocation.
    #[must_use]
    pub const fn registry(&self) -> &DestinationRegistry {
        &self.registry
    }

    /// Plan `request` drawing randomness from `rng`; `request.seed` is ignored.
    pub fn plan_with_rng<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Itinerary {
        let days = request.days();
        if request.range.dates.len() != days {
            log::warn!(
                "date range has {} labels for {days} days; missing labels stay empty",
                request.range.dates.len()
            );
        }

        if let Some(curated) = self.registry.find_curated(&request.pois, days) {
            return curated_itinerary(curated, &request.range);
        }

        let (pois, restaurants, pool_override) = self.working_pools(request, days);
        let (itinerary_days, diagnostics) = allocate(&pois, &restaurants, &request.range, rng);
        Itinerary {
            days: itinerary_days,
            source: PlanSource::General { pool_override },
            diagnostics,
        }
    }

    fn working_pools<'req>(
        &self,
        request: &'req PlanRequest,
        days: usize,
    ) -> (
        Cow<'req, [PointOfInterest]>,
        Cow<'req, [Restaurant]>,
        Option<String>,
    ) {
        match self.registry.find_override(&request.pois, days) {
            Some(pool_override) => {
                log::debug!(
                    "replacing a pool of {} POIs with the {} dataset",
                    request.pois.len(),
                    pool_override.name()
                );
                (
                    Cow::Owned(pool_override.pois()),
                    Cow::Owned(pool_override.restaurants()),
                    Some(pool_override.name().to_owned()),
                )
            }
            None => (
                Cow::Borrowed(request.pois.as_slice()),
                Cow::Borrowed(request.restaurants.as_slice()),
                None,
            ),
        }
    }
}

impl Planner for ShufflePlanner {
    fn plan(&self, request: &PlanRequest) -> Itinerary {
        match request.seed {
            Some(seed) => self.plan_with_rng(request, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.plan_with_rng(request, &mut rand::thread_rng()),
        }
    }
}

fn curated_itinerary(curated: &CuratedItinerary, range: &DateRange) -> Itinerary {
    log::debug!("using curated itinerary {}", curated.name());
    Itinerary {
        days: curated.assemble(range),
        source: PlanSource::Curated {
            destination: curated.name().to_owned(),
        },
        diagnostics: PlanDiagnostics::default(),
    }
}

fn allocate<R: Rng + ?Sized>(
    pois: &[PointOfInterest],
    restaurants: &[Restaurant],
    range: &DateRange,
    rng: &mut R,
) -> (Vec<ItineraryDay>, PlanDiagnostics) {
    if range.days > 0 && pois.is_empty() {
        log::warn!("no points of interest available; sightseeing slots stay empty");
    }
    if range.days > 0 && restaurants.is_empty() {
        log::warn!("no restaurants available; meal slots stay empty");
    }

    let mut poi_queue = DrainingQueue::shuffled(pois, rng);
    let mut restaurant_queue = DrainingQueue::shuffled(restaurants, rng);
    let days = (0..range.days)
        .map(|index| {
            let morning = poi_queue.take(POIS_PER_PERIOD, rng);
            let afternoon = poi_queue.take(POIS_PER_PERIOD, rng);
            let lunch = restaurant_queue.next(rng);
            let dinner = restaurant_queue.next(rng);
            ItineraryDay {
                day: index.saturating_add(1),
                date: range.date(index).to_owned(),
                morning,
                lunch,
                afternoon,
                dinner,
                theme: None,
            }
        })
        .collect();

    let diagnostics = PlanDiagnostics {
        pool_pois: pois.len(),
        pool_restaurants: restaurants.len(),
        pois_reused: poi_queue.reused(),
        restaurants_reused: restaurant_queue.reused(),
    };
    if diagnostics.pois_reused > 0 || diagnostics.restaurants_reused > 0 {
        log::debug!(
            "pools exhausted; reused {} POIs and {} restaurants",
            diagnostics.pois_reused,
            diagnostics.restaurants_reused
        );
    }
    (days, diagnostics)
}

/// Generate an itinerary for `days` days labelled by `dates`.
///
/// Convenience wrapper over [`ShufflePlanner`] with the built-in registry
/// and ambient randomness.
///
/// # Examples
/// ```
/// use roteiro_core::test_support::numbered_pois;
/// use roteiro_planner::generate_itinerary;
///
/// let dates = vec!["2024-06-01".to_owned()];
/// let days = generate_itinerary(&numbered_pois(4), &[], 1, &dates);
/// assert_eq!(days.len(), 1);
/// assert_eq!(days[0].morning.len(), 2);
/// assert!(days[0].lunch.is_none());
/// ```
#[must_use]
pub fn generate_itinerary(
    pois: &[PointOfInterest],
    restaurants: &[Restaurant],
    days: usize,
    dates: &[String],
) -> Vec<ItineraryDay> {
    let request = PlanRequest::new(
        pois.to_vec(),
        restaurants.to_vec(),
        DateRange::new(days, dates.to_vec()),
    );
    ShufflePlanner::default().plan(&request).into_days()
}

#[cfg(test)]
mod tests;
