//! Merging partial updates into range filters.
//!
//! Patch fields use `Option<Option<T>>`: `None` leaves the bound alone,
//! `Some(None)` clears it and `Some(Some(v))` sets it.

use contracts::shared::range::{DateRange, NumericRange};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePatch<T> {
    pub min: Option<Option<T>>,
    pub max: Option<Option<T>>,
}

impl<T> Default for RangePatch<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T> RangePatch<T> {
    pub fn min(value: Option<T>) -> Self {
        Self {
            min: Some(value),
            max: None,
        }
    }

    pub fn max(value: Option<T>) -> Self {
        Self {
            min: None,
            max: Some(value),
        }
    }

    pub fn both(min: Option<T>, max: Option<T>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatePatch {
    pub from: Option<Option<chrono::NaiveDate>>,
    pub to: Option<Option<chrono::NaiveDate>>,
}

/// Shallow-merge a patch into a numeric range.
///
/// When the result has `min > max`, the upper bound is dropped so the
/// range stays usable while the user is still typing.
pub fn merge_range<T: PartialOrd + Copy>(range: NumericRange<T>, patch: RangePatch<T>) -> NumericRange<T> {
    let mut merged = range;
    if let Some(min) = patch.min {
        merged.min = min;
    }
    if let Some(max) = patch.max {
        merged.max = max;
    }
    if let (Some(min), Some(max)) = (merged.min, merged.max) {
        if min > max {
            tracing::debug!("range min above max, clearing max");
            merged.max = None;
        }
    }
    merged
}

/// Shallow-merge a patch into a date range. Dates are not reordered.
pub fn merge_date_range(range: DateRange, patch: DatePatch) -> DateRange {
    let mut merged = range;
    if let Some(from) = patch.from {
        merged.from = from;
    }
    if let Some(to) = patch.to {
        merged.to = to;
    }
    merged
}
