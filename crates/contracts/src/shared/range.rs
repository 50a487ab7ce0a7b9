use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Числовой диапазон фильтра (год, цена, объём двигателя)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
}

impl<T> Default for NumericRange<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T> NumericRange<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Both bounds unset
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Период по датам. Internal state keeps `NaiveDate`; formatting to
/// `YYYY-MM-DD` happens only when building query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_serializes_to_empty_object() {
        let range: NumericRange<i32> = NumericRange::default();
        assert!(range.is_empty());
        assert_eq!(serde_json::to_string(&range).unwrap(), "{}");
    }

    #[test]
    fn test_date_range_uses_iso_dates() {
        let range = DateRange::new(NaiveDate::from_ymd_opt(2024, 3, 1), None);
        assert_eq!(serde_json::to_string(&range).unwrap(), r#"{"from":"2024-03-01"}"#);
        assert!(!range.is_empty());
    }
}
