use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/parts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    // Car
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body_types: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fuel_types: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_volume_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_volume_max: Option<f64>,

    // Part
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub qualities: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,

    // Wheels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wheel_drives: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wheel_fixing_points: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wheel_spacings: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wheel_center_bores: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wheel_widths: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wheel_heights: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wheel_tread_depths: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wheel_diameters: Vec<i64>,
}
