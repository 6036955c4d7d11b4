//! Itinerary allocation for Roteiro.
//!
//! This crate provides [`ShufflePlanner`], the default implementation of the
//! [`Planner`](roteiro_core::Planner) trait. Planning takes one of two paths:
//!
//! - **Curated**: when the request matches a [`CuratedItinerary`] signature
//!   (day count plus landmark names), the hand-authored itinerary is
//!   returned with only its dates filled in.
//! - **General**: the POI and restaurant pools (possibly swapped for a
//!   [`PoolOverride`] dataset) are shuffled and drained day by day, two
//!   POIs per period and one restaurant per meal. Exhausted pools fall back
//!   to random reuse so no slot is left empty while supply exists.
//!
//! Both lookups go through a [`DestinationRegistry`], so new destinations
//! are data rather than branches in the allocator.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod curated;
mod planner;
mod queue;
mod registry;

pub use planner::{POIS_PER_PERIOD, ShufflePlanner, generate_itinerary};
pub use registry::{
    CuratedDay, CuratedItinerary, DestinationRegistry, DestinationSignature, PoolOverride,
};
