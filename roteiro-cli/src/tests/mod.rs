//! Shared test harness modules for the Roteiro CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]
#![expect(
    clippy::expect_used,
    reason = "Tests use expect for readable failures"
)]

use super::*;
use plan::{
    Catalogue, PlanConfig, config_from_layers_for_test, load_catalogue, run_plan_with,
};

mod helpers;
mod unit;
