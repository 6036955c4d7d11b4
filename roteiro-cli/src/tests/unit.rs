//! Focused unit tests covering plan configuration, catalogue loading and
//! command output.

use super::helpers::{Workspace, numbered_catalogue, write_catalogue, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use roteiro_core::{Itinerary, ItineraryDay, PlanDiagnostics, PlanRequest, PlanSource, Planner};
use roteiro_planner::{DestinationRegistry, ShufflePlanner};
use rstest::rstest;
use serde_json::{Value, json};

struct EchoPlanner;

impl Planner for EchoPlanner {
    fn plan(&self, request: &PlanRequest) -> Itinerary {
        let days = (0..request.days())
            .map(|index| ItineraryDay::new(index + 1, request.range.date(index)))
            .collect();
        Itinerary {
            days,
            source: PlanSource::default(),
            diagnostics: PlanDiagnostics {
                pool_pois: request.pois.len(),
                pool_restaurants: request.restaurants.len(),
                ..PlanDiagnostics::default()
            },
        }
    }
}

fn plan_args(catalogue: Utf8PathBuf) -> PlanArgs {
    PlanArgs {
        catalogue: Some(catalogue),
        start_date: Some("2024-06-01".to_owned()),
        end_date: Some("2024-06-03".to_owned()),
        seed: Some(42),
    }
}

fn run_to_json(args: PlanArgs, planner: &dyn Planner) -> Value {
    let mut buffer = Vec::new();
    run_plan_with(args, planner, &mut buffer).expect("plan should succeed");
    serde_json::from_slice(&buffer).expect("output should be JSON")
}

#[rstest]
fn converting_plan_without_catalogue_errors() {
    let args = PlanArgs {
        catalogue: None,
        ..PlanArgs::default()
    };
    let err = PlanConfig::try_from(args).expect_err("missing catalogue should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_CATALOGUE);
            assert_eq!(env, ENV_PLAN_CATALOGUE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn missing_argument_message_names_positional_and_env() {
    let err = CliError::MissingArgument {
        field: ARG_PLAN_CATALOGUE,
        env: ENV_PLAN_CATALOGUE,
    };
    assert_eq!(
        err.to_string(),
        "missing catalogue (pass the catalogue path or set ROTEIRO_CMDS_PLAN_CATALOGUE)"
    );
}

#[rstest]
fn converting_plan_keeps_optional_dates() {
    let args = PlanArgs {
        catalogue: Some(Utf8PathBuf::from("catalogue.json")),
        ..PlanArgs::default()
    };
    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.catalogue, Utf8PathBuf::from("catalogue.json"));
    assert!(config.start_date.is_none());
    assert!(config.end_date.is_none());
    assert!(config.seed.is_none());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "seed": "not a number" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalogue": "from-file.json",
            "start_date": "2024-01-01",
            "end_date": "2024-01-05",
        }),
        None,
    );
    composer.push_environment(json!({
        "catalogue": "from-env.json",
        "seed": 7,
    }));
    composer.push_cli(json!({
        "end_date": "2024-01-02",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.catalogue, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.start_date.as_deref(), Some("2024-01-01"));
    assert_eq!(config.end_date.as_deref(), Some("2024-01-02"));
    assert_eq!(config.seed, Some(7));
}

#[rstest]
fn load_catalogue_decodes_provider_json() {
    let workspace = Workspace::new();
    let path = workspace.path("catalogue.json");
    write_utf8(
        &path,
        r#"{
            "pointsOfInterest": [
                { "name": "Museu do Louvre", "type": "Museu", "rating": 4.7 }
            ],
            "restaurants": [
                { "name": "Le Procope", "rating": 4.2, "cuisine": "Francesa", "priceLevel": "€€€" }
            ]
        }"#
        .as_bytes(),
    );

    let catalogue = load_catalogue(&path).expect("catalogue should load");
    let poi = catalogue.points_of_interest.first().expect("one POI");
    assert_eq!(poi.name, "Museu do Louvre");
    assert_eq!(poi.kind, "Museu");
    let restaurant = catalogue.restaurants.first().expect("one restaurant");
    assert_eq!(restaurant.price_level, "€€€");
}

#[rstest]
fn load_catalogue_defaults_missing_sections() {
    let workspace = Workspace::new();
    let path = workspace.path("empty.json");
    write_utf8(&path, b"{}");
    assert_eq!(
        load_catalogue(&path).expect("catalogue should load"),
        Catalogue::default()
    );
}

#[rstest]
fn load_catalogue_reports_missing_file() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.json");
    let err = load_catalogue(&path).expect_err("missing catalogue should error");
    match err {
        CliError::OpenCatalogue { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenCatalogue, found {other:?}"),
    }
}

#[rstest]
fn load_catalogue_reports_invalid_json() {
    let workspace = Workspace::new();
    let path = workspace.path("broken.json");
    write_utf8(&path, b"{ not valid json");
    let err = load_catalogue(&path).expect_err("invalid JSON should error");
    match err {
        CliError::ParseCatalogue { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseCatalogue, found {other:?}"),
    }
}

#[rstest]
#[case::nameless_poi(r#"{ "pointsOfInterest": [{ "type": "Museu" }] }"#)]
#[case::unpriced_restaurant(
    r#"{ "restaurants": [{ "name": "Le Procope", "rating": 4.2, "cuisine": "Francesa" }] }"#
)]
fn load_catalogue_rejects_incomplete_records(#[case] contents: &str) {
    let workspace = Workspace::new();
    let path = workspace.path("incomplete.json");
    write_utf8(&path, contents.as_bytes());
    let err = load_catalogue(&path).expect_err("incomplete record should error");
    match err {
        CliError::ParseCatalogue { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseCatalogue, found {other:?}"),
    }
}

#[rstest]
fn run_plan_with_passes_catalogue_and_dates_to_planner() {
    let workspace = Workspace::new();
    let path = workspace.path("catalogue.json");
    write_catalogue(&path, &numbered_catalogue(5, 2));

    let output = run_to_json(plan_args(path), &EchoPlanner);
    let dates: Vec<&str> = output["days"]
        .as_array()
        .expect("days array")
        .iter()
        .filter_map(|day| day["date"].as_str())
        .collect();
    assert_eq!(dates, ["2024-06-01", "2024-06-02", "2024-06-03"]);
    assert_eq!(output["diagnostics"]["poolPois"], 5);
    assert_eq!(output["diagnostics"]["poolRestaurants"], 2);
}

#[rstest]
fn seeded_runs_print_identical_itineraries() {
    let workspace = Workspace::new();
    let path = workspace.path("catalogue.json");
    write_catalogue(&path, &numbered_catalogue(12, 6));

    let planner = ShufflePlanner::default();
    let first = run_to_json(plan_args(path.clone()), &planner);
    let second = run_to_json(plan_args(path), &planner);
    assert_eq!(first, second);
    assert_eq!(first["source"]["kind"], "general");
}

#[rstest]
fn missing_dates_print_an_empty_itinerary() {
    let workspace = Workspace::new();
    let path = workspace.path("catalogue.json");
    write_catalogue(&path, &numbered_catalogue(4, 2));

    let args = PlanArgs {
        start_date: None,
        ..plan_args(path)
    };
    let output = run_to_json(args, &ShufflePlanner::default());
    assert_eq!(output["days"], json!([]));
}

#[rstest]
fn destinations_lists_builtin_entries() {
    let mut buffer = Vec::new();
    destinations::write_destinations(&DestinationRegistry::default(), &mut buffer)
        .expect("listing should succeed");
    let listing = String::from_utf8(buffer).expect("utf-8 listing");
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(
        lines,
        [
            "curated\tparis-3-days\t3 days",
            "pool-override\tmadrid\t10 sights, 6 restaurants",
        ]
    );
}

#[rstest]
fn destinations_on_empty_registry_prints_nothing() {
    let mut buffer = Vec::new();
    destinations::write_destinations(&DestinationRegistry::empty(), &mut buffer)
        .expect("listing should succeed");
    assert!(buffer.is_empty());
}
