//! Expand a trip's start and end into the calendar days it covers.
//!
//! Trip dates arrive as ISO-8601 strings from the persistence layer and
//! may be missing or malformed. None of the functions here fail: absent
//! input yields a zero-day range, an unusable start date yields blank
//! date labels, and the anomaly is logged.
//!
//! # Examples
//! ```
//! use roteiro_core::compute_date_range;
//!
//! let range = compute_date_range(Some("2024-06-01"), Some("2024-06-03"));
//! assert_eq!(range.days, 3);
//! assert_eq!(range.dates, ["2024-06-01", "2024-06-02", "2024-06-03"]);
//! ```

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format used for every date label the engine produces.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: u64 = 86_400;

const NAIVE_TIMESTAMP_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Errors returned by [`parse_trip_date`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The input was empty or whitespace.
    #[error("trip date is empty")]
    Empty,
    /// The input was neither an ISO date nor an ISO timestamp.
    #[error("trip date {input:?} is not an ISO-8601 date or timestamp")]
    Unrecognised {
        /// The offending input, trimmed.
        input: String,
    },
}

/// The calendar days covered by a trip.
///
/// `dates` normally holds exactly `days` entries. Ranges assembled by hand
/// may disagree; [`DateRange::date`] then yields an empty label for the
/// missing positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateRange {
    /// Inclusive number of days in the trip.
    pub days: usize,
    /// `YYYY-MM-DD` label for each day, or empty strings when unknown.
    pub dates: Vec<String>,
}

impl DateRange {
    /// Construct a range from a day count and its date labels.
    #[must_use]
    pub const fn new(days: usize, dates: Vec<String>) -> Self {
        Self { days, dates }
    }

    /// Construct a range covering exactly the supplied date labels.
    #[must_use]
    pub fn from_dates(dates: Vec<String>) -> Self {
        Self {
            days: dates.len(),
            dates,
        }
    }

    /// Return the label for the zero-based `index`, or `""` when absent.
    #[must_use]
    pub fn date(&self, index: usize) -> &str {
        self.dates.get(index).map_or("", String::as_str)
    }

    /// Report whether the range covers no days.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.days == 0
    }
}

/// Parse a trip date into a naive timestamp.
///
/// Accepts `YYYY-MM-DD` (midnight), RFC 3339 timestamps (converted to UTC)
/// and offset-free `YYYY-MM-DDTHH:MM[:SS[.f]]` timestamps.
///
/// # Errors
/// Returns [`DateParseError::Empty`] for blank input and
/// [`DateParseError::Unrecognised`] when no format matches.
///
/// # Examples
/// ```
/// use roteiro_core::parse_trip_date;
///
/// let instant = parse_trip_date("2024-09-10").expect("ISO date");
/// assert_eq!(instant.to_string(), "2024-09-10 00:00:00");
/// assert!(parse_trip_date("10/09/2024").is_err());
/// ```
pub fn parse_trip_date(input: &str) -> Result<NaiveDateTime, DateParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    let unrecognised = || DateParseError::Unrecognised {
        input: trimmed.to_owned(),
    };
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0).ok_or_else(unrecognised);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_utc());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(unrecognised)
}

fn parse_logged(input: &str, role: &str) -> Option<NaiveDateTime> {
    parse_trip_date(input)
        .inspect_err(|err| log::warn!("ignoring {role} date: {err}"))
        .ok()
}

/// Count the days covered by a trip, both endpoints included.
///
/// Returns `0` when either date is missing or unparseable. Otherwise the
/// result is `ceil(|end - start| in days) + 1`; reversed ranges are not
/// rejected and count the same as their ordered counterpart.
///
/// # Examples
/// ```
/// use roteiro_core::calculate_days;
///
/// assert_eq!(calculate_days(Some("2024-06-01"), Some("2024-06-03")), 3);
/// assert_eq!(calculate_days(Some("2024-06-03"), Some("2024-06-01")), 3);
/// assert_eq!(calculate_days(None, Some("2024-06-03")), 0);
/// ```
#[must_use]
pub fn calculate_days(start: Option<&str>, end: Option<&str>) -> usize {
    let (Some(start_raw), Some(end_raw)) = (start, end) else {
        log::debug!("trip date range is incomplete; treating it as zero days");
        return 0;
    };
    let (Some(first), Some(last)) = (
        parse_logged(start_raw, "start"),
        parse_logged(end_raw, "end"),
    ) else {
        return 0;
    };
    if last < first {
        log::warn!("trip ends ({last}) before it starts ({first}); counting the absolute span");
    }
    let seconds = last.signed_duration_since(first).num_seconds().unsigned_abs();
    let span = seconds.div_ceil(SECONDS_PER_DAY);
    usize::try_from(span)
        .unwrap_or(usize::MAX)
        .saturating_add(1)
}

/// Produce `num_days` consecutive `YYYY-MM-DD` labels starting at `start`.
///
/// A missing or unparseable start yields `num_days` empty strings so the
/// itinerary keeps its shape.
///
/// # Examples
/// ```
/// use roteiro_core::generate_dates;
///
/// assert_eq!(
///     generate_dates(Some("2024-06-01"), 3),
///     ["2024-06-01", "2024-06-02", "2024-06-03"],
/// );
/// assert_eq!(generate_dates(None, 2), ["", ""]);
/// ```
#[must_use]
pub fn generate_dates(start: Option<&str>, num_days: usize) -> Vec<String> {
    let Some(first) = start.and_then(|raw| parse_logged(raw, "start")) else {
        return vec![String::new(); num_days];
    };
    let first_day = first.date();
    (0..num_days)
        .map(|offset| {
            u64::try_from(offset)
                .ok()
                .and_then(|days| first_day.checked_add_days(Days::new(days)))
                .map_or_else(String::new, |date| date.format(DATE_FORMAT).to_string())
        })
        .collect()
}

/// Compute the day count and date labels for a trip in one call.
#[must_use]
pub fn compute_date_range(start: Option<&str>, end: Option<&str>) -> DateRange {
    let days = calculate_days(start, end);
    DateRange::new(days, generate_dates(start, days))
}
