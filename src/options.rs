//! Distinct option values for choice widgets.
//!
//! The display layer renders multiselects and sliders from the values
//! actually present in the table. These helpers compute the distinct,
//! sorted value sets for each choice widget, plus the observed year bounds
//! for the year-range slider.

use crate::record::Play;
use std::collections::BTreeSet;

/// Fallback year-slider bounds used when no row carries a year.
pub const DEFAULT_YEAR_BOUNDS: (i32, i32) = (1500, 2024);

/// Distinct genre tags across the table, sorted.
///
/// Semicolon-joined cells contribute each of their tags separately.
#[must_use]
pub fn genre_options(plays: &[Play]) -> Vec<String> {
    distinct_tags(plays.iter().flat_map(|play| play.genres.iter()))
}

/// Distinct property tags across the table, sorted.
#[must_use]
pub fn property_options(plays: &[Play]) -> Vec<String> {
    distinct_tags(plays.iter().flat_map(|play| play.properties.iter()))
}

/// Distinct non-empty availability values across the table, sorted.
#[must_use]
pub fn availability_options(plays: &[Play]) -> Vec<String> {
    distinct_tags(plays.iter().map(|play| &play.availability))
}

/// Distinct acts values across the table, ascending.
#[must_use]
pub fn acts_options(plays: &[Play]) -> Vec<f64> {
    let mut values: Vec<f64> = plays.iter().filter_map(|play| play.acts).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    values.dedup();
    values
}

/// Observed `(min, max)` over non-missing first-performance years.
///
/// Falls back to [`DEFAULT_YEAR_BOUNDS`] when the column is entirely empty,
/// matching the year slider's default range.
#[must_use]
pub fn year_bounds(plays: &[Play]) -> (i32, i32) {
    let years: Vec<i32> = plays
        .iter()
        .filter_map(|play| play.first_performance_year)
        .collect();
    match (years.iter().min(), years.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => DEFAULT_YEAR_BOUNDS,
    }
}

fn distinct_tags<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = &'a String>,
{
    let set: BTreeSet<&str> = values
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
