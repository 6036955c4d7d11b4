//! Plan command implementation for the Roteiro CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roteiro_core::{Itinerary, PlanRequest, Planner, PointOfInterest, Restaurant};
use roteiro_planner::ShufflePlanner;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_CATALOGUE, ARG_PLAN_END_DATE, ARG_PLAN_SEED, ARG_PLAN_START_DATE, CliError,
    ENV_PLAN_CATALOGUE,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a day-by-day itinerary. The catalogue is a JSON file \
                 holding `pointsOfInterest` and `restaurants` arrays in the \
                 providers' format. Dates are ISO `YYYY-MM-DD`; a missing \
                 or unreadable date yields an empty itinerary.",
    about = "Plan an itinerary from a catalogue"
)]
#[ortho_config(prefix = "ROTEIRO")]
pub(crate) struct PlanArgs {
    /// Path to the JSON catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// First day of the trip.
    #[arg(long = ARG_PLAN_START_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) start_date: Option<String>,
    /// Last day of the trip, inclusive.
    #[arg(long = ARG_PLAN_END_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) end_date: Option<String>,
    /// Seed for a reproducible plan.
    #[arg(long = ARG_PLAN_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) start_date: Option<String>,
    pub(crate) end_date: Option<String>,
    pub(crate) seed: Option<u64>,
}

impl PlanConfig {
    fn request(&self, catalogue: Catalogue) -> PlanRequest {
        let request = PlanRequest::for_trip(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            catalogue.points_of_interest,
            catalogue.restaurants,
        );
        match self.seed {
            Some(seed) => request.with_seed(seed),
            None => request,
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_CATALOGUE,
            env: ENV_PLAN_CATALOGUE,
        })?;
        Ok(Self {
            catalogue,
            start_date: args.start_date,
            end_date: args.end_date,
            seed: args.seed,
        })
    }
}

/// Candidate pools as published by the data providers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Catalogue {
    pub(crate) points_of_interest: Vec<PointOfInterest>,
    pub(crate) restaurants: Vec<Restaurant>,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &ShufflePlanner::default(), &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    planner: &dyn Planner,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalogue = load_catalogue(&config.catalogue)?;
    let request = config.request(catalogue);
    if request.days() == 0 {
        log::warn!(
            "no usable trip dates (start {:?}, end {:?}); the itinerary will be empty",
            config.start_date,
            config.end_date
        );
    }
    log::debug!(
        "planning {} days from {} POIs and {} restaurants",
        request.days(),
        request.pois.len(),
        request.restaurants.len()
    );
    let itinerary = planner.plan(&request);
    write_itinerary(writer, &itinerary)
}

/// Loads a JSON-encoded [`Catalogue`] from disk.
pub(super) fn load_catalogue(path: &Utf8Path) -> Result<Catalogue, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenCatalogue {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalogue {
        path: path.to_path_buf(),
        source,
    })
}

fn write_itinerary(writer: &mut dyn Write, itinerary: &Itinerary) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(itinerary).map_err(CliError::SerialiseItinerary)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
