//! Prediction window rules for the target date.
//!
//! A target date must be strictly after today and at most [`HORIZON_DAYS`]
//! days ahead. Everything here is pure; "today" is always passed in.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use common::PredictionRequest;
use tracing::debug;

use crate::error::ValidationError;
use crate::format::{format_long_date, month_name};

/// Maximum distance in days between today and the target date.
pub const HORIZON_DAYS: u64 = 30;

/// Distance of the date preselected in the form.
pub const DEFAULT_LEAD_DAYS: u64 = 7;

/// Raw form input. A field is `None` when it was left empty or was not a
/// positive number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSelection {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl DateSelection {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }

    /// Builds a selection from the text values of the three selectors.
    pub fn parse(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: parse_positive(day),
            month: parse_positive(month),
            year: parse_positive(year),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month(), date.year())
    }
}

fn parse_positive<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr + Default + PartialOrd,
{
    value
        .trim()
        .parse::<T>()
        .ok()
        .filter(|parsed| *parsed > T::default())
}

/// A date that passed [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Zero-padded `YYYY-MM-DD`.
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest::new(self.0)
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso())
    }
}

/// Validates a form selection against `today`.
pub fn validate(selection: &DateSelection, today: NaiveDate) -> Result<TargetDate, ValidationError> {
    let (Some(day), Some(month), Some(year)) = (selection.day, selection.month, selection.year)
    else {
        debug!(?selection, "Rejecting selection with missing fields");
        return Err(ValidationError::MissingField);
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ValidationError::InvalidDate { day, month, year })?;

    check_window(date, today)
}

/// Applies the window rule to an already-parsed date.
pub fn check_window(date: NaiveDate, today: NaiveDate) -> Result<TargetDate, ValidationError> {
    if date <= today {
        return Err(ValidationError::NotInFuture { date });
    }

    let latest = latest_target(today);
    if date > latest {
        return Err(ValidationError::HorizonExceeded {
            horizon_days: HORIZON_DAYS,
            latest,
            latest_label: format_long_date(latest),
        });
    }

    Ok(TargetDate(date))
}

/// Last date still inside the window; it is itself accepted.
pub fn latest_target(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(HORIZON_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Initial selection of the form.
pub fn default_selection(today: NaiveDate) -> DateSelection {
    let date = today
        .checked_add_days(Days::new(DEFAULT_LEAD_DAYS))
        .unwrap_or(today);
    DateSelection::from_date(date)
}

pub fn day_options() -> Vec<u32> {
    (1..=31).collect()
}

/// Months with their localized names.
pub fn month_options() -> Vec<(u32, String)> {
    (1..=12)
        .filter_map(|month| month_name(month).map(|name| (month, name)))
        .collect()
}

/// The current year and the next one.
pub fn year_options(today: NaiveDate) -> Vec<i32> {
    vec![today.year(), today.year() + 1]
}
