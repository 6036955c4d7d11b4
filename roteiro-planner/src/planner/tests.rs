//! Tests for the `ShufflePlanner`.

use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roteiro_core::test_support::{numbered_pois, numbered_restaurants, poi, poi_at, restaurant};
use rstest::{fixture, rstest};
use std::collections::HashSet;

#[fixture]
fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn trip(pois: Vec<PointOfInterest>, restaurants: Vec<Restaurant>, end: &str) -> PlanRequest {
    PlanRequest::for_trip(Some("2024-06-01"), Some(end), pois, restaurants)
}

fn names(pois: &[PointOfInterest]) -> Vec<&str> {
    pois.iter().map(|poi| poi.name.as_str()).collect()
}

#[rstest]
fn general_plan_numbers_and_dates_days(mut rng: ChaCha8Rng) {
    let request = trip(numbered_pois(12), numbered_restaurants(6), "2024-06-03");
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);

    assert_eq!(itinerary.len(), 3);
    for (index, day) in itinerary.days.iter().enumerate() {
        assert_eq!(day.day, index + 1);
        assert_eq!(day.date, request.range.date(index));
        assert_eq!(day.morning.len(), POIS_PER_PERIOD);
        assert_eq!(day.afternoon.len(), POIS_PER_PERIOD);
        assert!(day.lunch.is_some());
        assert!(day.dinner.is_some());
        assert!(day.theme.is_none());
    }
    assert_eq!(
        itinerary.source,
        PlanSource::General {
            pool_override: None
        }
    );
}

#[rstest]
fn sufficient_pools_never_repeat(mut rng: ChaCha8Rng) {
    let request = trip(numbered_pois(12), numbered_restaurants(6), "2024-06-03");
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);

    let pois: Vec<&str> = itinerary
        .days
        .iter()
        .flat_map(ItineraryDay::pois)
        .map(|poi| poi.name.as_str())
        .collect();
    let unique: HashSet<&str> = pois.iter().copied().collect();
    assert_eq!(pois.len(), 12);
    assert_eq!(unique.len(), 12);

    let meals: HashSet<&str> = itinerary
        .days
        .iter()
        .flat_map(ItineraryDay::restaurants)
        .map(|restaurant| restaurant.name.as_str())
        .collect();
    assert_eq!(meals.len(), 6);
    assert_eq!(itinerary.diagnostics.pois_reused, 0);
    assert_eq!(itinerary.diagnostics.restaurants_reused, 0);
}

#[rstest]
fn thin_pools_are_reused_to_fill_every_slot(mut rng: ChaCha8Rng) {
    let request = trip(numbered_pois(3), numbered_restaurants(1), "2024-06-02");
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);

    for day in &itinerary.days {
        assert_eq!(day.morning.len(), 2);
        assert_eq!(day.afternoon.len(), 2);
        assert_eq!(
            day.lunch.as_ref().map(|r| r.name.as_str()),
            Some("Restaurante 1")
        );
        assert_eq!(
            day.dinner.as_ref().map(|r| r.name.as_str()),
            Some("Restaurante 1")
        );
    }
    assert_eq!(itinerary.diagnostics.pois_reused, 5);
    assert_eq!(itinerary.diagnostics.restaurants_reused, 3);
}

#[rstest]
fn empty_pools_leave_slots_empty(mut rng: ChaCha8Rng) {
    let request = trip(Vec::new(), Vec::new(), "2024-06-02");
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);

    assert_eq!(itinerary.len(), 2);
    for day in &itinerary.days {
        assert!(day.morning.is_empty());
        assert!(day.afternoon.is_empty());
        assert!(day.lunch.is_none());
        assert!(day.dinner.is_none());
    }
}

#[rstest]
#[expect(clippy::expect_used, reason = "tests use expect for readable failures")]
fn restaurants_fill_even_without_pois(mut rng: ChaCha8Rng) {
    let request = trip(Vec::new(), numbered_restaurants(2), "2024-06-01");
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);
    let day = itinerary.days.first().expect("one day planned");
    assert!(day.morning.is_empty());
    assert!(day.lunch.is_some());
    assert!(day.dinner.is_some());
}

#[rstest]
fn zero_day_range_yields_empty_itinerary(mut rng: ChaCha8Rng) {
    let request = PlanRequest::for_trip(None, Some("2024-06-03"), numbered_pois(4), Vec::new());
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);
    assert!(itinerary.is_empty());
}

#[rstest]
fn request_pools_are_not_mutated(mut rng: ChaCha8Rng) {
    let request = trip(numbered_pois(6), numbered_restaurants(3), "2024-06-03");
    let before = request.clone();
    let _ = ShufflePlanner::default().plan_with_rng(&request, &mut rng);
    assert_eq!(request, before);
}

#[rstest]
fn same_seed_reproduces_itinerary() {
    let request = trip(numbered_pois(10), numbered_restaurants(5), "2024-06-04").with_seed(99);
    let planner = ShufflePlanner::default();
    assert_eq!(planner.plan(&request), planner.plan(&request));
}

#[rstest]
fn unseeded_plans_keep_their_shape() {
    let request = trip(numbered_pois(5), numbered_restaurants(2), "2024-06-04");
    let planner = ShufflePlanner::default();
    let first = planner.plan(&request);
    let second = planner.plan(&request);

    assert_eq!(first.len(), second.len());
    for (lhs, rhs) in first.days.iter().zip(&second.days) {
        assert_eq!(lhs.day, rhs.day);
        assert_eq!(lhs.date, rhs.date);
        assert_eq!(lhs.morning.len(), rhs.morning.len());
        assert_eq!(lhs.afternoon.len(), rhs.afternoon.len());
        assert_eq!(lhs.lunch.is_some(), rhs.lunch.is_some());
        assert_eq!(lhs.dinner.is_some(), rhs.dinner.is_some());
    }
}

#[rstest]
fn missing_date_labels_stay_empty(mut rng: ChaCha8Rng) {
    let request = PlanRequest::new(
        numbered_pois(8),
        numbered_restaurants(4),
        DateRange::new(2, vec!["2024-06-01".to_owned()]),
    );
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);
    let dates: Vec<&str> = itinerary.days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, ["2024-06-01", ""]);
}

#[rstest]
#[expect(clippy::expect_used, reason = "tests use expect for readable failures")]
fn paris_landmark_on_three_day_trip_uses_curated_days(mut rng: ChaCha8Rng) {
    let pois = vec![poi("Torre Eiffel"), poi("Qualquer Lugar")];
    let request = PlanRequest::for_trip(
        Some("2024-09-10"),
        Some("2024-09-12"),
        pois,
        vec![restaurant("Ignorado")],
    );
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);

    assert_eq!(
        itinerary.source,
        PlanSource::Curated {
            destination: "paris-3-days".to_owned()
        }
    );
    let first = itinerary.days.first().expect("curated day one");
    assert_eq!(names(&first.morning), ["Torre Eiffel", "Museu do Louvre"]);
    assert_eq!(first.date, "2024-09-10");
    assert!(first.theme.is_some());
    let dates: Vec<&str> = itinerary.days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, ["2024-09-10", "2024-09-11", "2024-09-12"]);
    assert!(
        itinerary
            .days
            .iter()
            .flat_map(ItineraryDay::restaurants)
            .all(|r| r.name != "Ignorado")
    );
    assert_eq!(itinerary.diagnostics, PlanDiagnostics::default());
}

#[rstest]
fn paris_landmark_on_longer_trip_uses_general_path(mut rng: ChaCha8Rng) {
    let request = trip(vec![poi("Torre Eiffel")], Vec::new(), "2024-06-04");
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);
    assert!(matches!(itinerary.source, PlanSource::General { .. }));
    assert!(
        itinerary
            .days
            .iter()
            .flat_map(ItineraryDay::pois)
            .all(|p| p.name == "Torre Eiffel")
    );
}

#[rstest]
#[case::by_landmark(vec![poi("Museo del Prado"), poi("Hostal Central")])]
#[case::by_location(vec![poi_at("Bar da Esquina", 40.4200, -3.7000)])]
fn small_madrid_pool_is_replaced(mut rng: ChaCha8Rng, #[case] pois: Vec<PointOfInterest>) {
    let request = trip(pois, vec![restaurant("Ignorado")], "2024-06-02");
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);

    assert_eq!(
        itinerary.source,
        PlanSource::General {
            pool_override: Some("madrid".to_owned())
        }
    );
    assert_eq!(itinerary.diagnostics.pool_pois, 10);
    assert_eq!(itinerary.diagnostics.pois_reused, 0);
    assert!(
        itinerary
            .days
            .iter()
            .flat_map(ItineraryDay::restaurants)
            .all(|r| r.name != "Ignorado")
    );
}

#[rstest]
fn large_madrid_pool_is_kept(mut rng: ChaCha8Rng) {
    let mut pois = numbered_pois(7);
    pois.push(poi("Museo del Prado"));
    let request = trip(pois, numbered_restaurants(2), "2024-06-02");
    let itinerary = ShufflePlanner::default().plan_with_rng(&request, &mut rng);
    assert_eq!(
        itinerary.source,
        PlanSource::General {
            pool_override: None
        }
    );
    assert_eq!(itinerary.diagnostics.pool_pois, 8);
}

#[rstest]
fn empty_registry_disables_special_cases(mut rng: ChaCha8Rng) {
    let planner = ShufflePlanner::with_registry(DestinationRegistry::empty());
    let request = PlanRequest::for_trip(
        Some("2024-09-10"),
        Some("2024-09-12"),
        vec![poi("Torre Eiffel")],
        Vec::new(),
    );
    let itinerary = planner.plan_with_rng(&request, &mut rng);
    assert_eq!(
        itinerary.source,
        PlanSource::General {
            pool_override: None
        }
    );
}

#[rstest]
fn generate_itinerary_matches_requested_shape() {
    let dates = vec!["2024-06-01".to_owned(), "2024-06-02".to_owned()];
    let days = generate_itinerary(&numbered_pois(8), &numbered_restaurants(4), 2, &dates);
    let labels: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(labels, ["2024-06-01", "2024-06-02"]);
    assert!(days.iter().all(|d| d.morning.len() == 2 && d.afternoon.len() == 2));
}
