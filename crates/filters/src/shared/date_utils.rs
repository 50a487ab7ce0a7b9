/// Utilities for date formatting at the query boundary
///
/// Filter state keeps `NaiveDate`; the backend wants `YYYY-MM-DD` strings.
use crate::error::FilterError;
use chrono::NaiveDate;

const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date for query parameters
/// Example: 2024-03-05 -> "2024-03-05"
pub fn format_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` input value (date pickers, persisted strings)
pub fn parse_date(value: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value.trim(), QUERY_DATE_FORMAT)
        .map_err(|_| FilterError::InvalidDate(value.to_string()))
}
