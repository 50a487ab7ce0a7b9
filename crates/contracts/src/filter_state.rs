use crate::catalog::FilterOption;
use crate::shared::range::{DateRange, NumericRange};
use serde::{Deserialize, Serialize};

/// Sentinel for "no restriction" in single-select dropdowns
pub const ALL: &str = "All";

fn default_all() -> String {
    ALL.to_string()
}

/// Выбор по параметрам дисков
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSelection {
    pub drives: Vec<String>,
    pub fixing_points: Vec<String>,
    pub spacings: Vec<String>,
    pub center_bores: Vec<String>,
    pub widths: Vec<String>,
    pub heights: Vec<String>,
    pub tread_depths: Vec<String>,
    pub diameters: Vec<String>,
}

impl WheelSelection {
    fn facets(&self) -> [&Vec<String>; 8] {
        [
            &self.drives,
            &self.fixing_points,
            &self.spacings,
            &self.center_bores,
            &self.widths,
            &self.heights,
            &self.tread_depths,
            &self.diameters,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.facets().iter().all(|f| f.is_empty())
    }

    pub fn active_count(&self) -> usize {
        self.facets().iter().filter(|f| !f.is_empty()).count()
    }
}

/// UI-owned filter selection.
///
/// Name-based facets hold display names as picked in the dropdowns; they are
/// translated to backend ids only when a query is built. Categories keep the
/// whole option since the checkbox tree works with ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search: String,
    pub brands: Vec<String>,
    pub models: Vec<String>,
    pub body_types: Vec<String>,
    pub fuel_types: Vec<String>,
    pub categories: Vec<FilterOption>,
    pub qualities: Vec<String>,
    pub positions: Vec<String>,
    pub statuses: Vec<String>,
    pub wheels: WheelSelection,
    pub year: NumericRange<i32>,
    pub price: NumericRange<f64>,
    pub engine_volume: NumericRange<f64>,
    pub date_range: DateRange,
    pub order_status: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            brands: Vec::new(),
            models: Vec::new(),
            body_types: Vec::new(),
            fuel_types: Vec::new(),
            categories: Vec::new(),
            qualities: Vec::new(),
            positions: Vec::new(),
            statuses: Vec::new(),
            wheels: WheelSelection::default(),
            year: NumericRange::default(),
            price: NumericRange::default(),
            engine_volume: NumericRange::default(),
            date_range: DateRange::default(),
            order_status: default_all(),
        }
    }
}

impl FilterState {
    /// Drop every selection
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Order status filter, `None` when the sentinel or blank is selected
    pub fn order_status_filter(&self) -> Option<&str> {
        let status = self.order_status.trim();
        (!status.is_empty() && status != ALL).then_some(status)
    }

    /// Number of facets with a non-default value, for the filter badge
    pub fn active_filter_count(&self) -> usize {
        let lists = [
            &self.brands,
            &self.models,
            &self.body_types,
            &self.fuel_types,
            &self.qualities,
            &self.positions,
            &self.statuses,
        ];
        let mut count = lists.iter().filter(|l| !l.is_empty()).count();
        count += self.wheels.active_count();
        count += usize::from(!self.categories.is_empty());
        count += usize::from(!self.search.trim().is_empty());
        count += usize::from(!self.year.is_empty());
        count += usize::from(!self.price.is_empty());
        count += usize::from(!self.engine_volume.is_empty());
        count += usize::from(!self.date_range.is_empty());
        count += usize::from(self.order_status_filter().is_some());
        count
    }
}
