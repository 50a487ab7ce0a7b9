//! Wire shape of the filter catalog endpoint.
//!
//! The backend is not consistent about key names, id types or nesting, so
//! every field here is optional and lists are read leniently: entries that
//! are not objects are skipped instead of failing the whole catalog.

use crate::shared::localized_text::{deserialize_lenient_languages, LocalizedText};
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Array that tolerates `null`, non-array values and malformed entries
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Names occasionally come as numbers (wheel widths, diameters)
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Append the entries sent under an alternate key
fn merge_list<T>(canonical: &mut Vec<T>, alternate: &mut Vec<T>) {
    canonical.append(alternate);
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOption {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub rrr_id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_languages")]
    pub languages: Option<LocalizedText>,
    /// Only present on flat model lists
    #[serde(default)]
    pub brand_id: Option<Value>,
    #[serde(default)]
    car_brand_id: Option<Value>,
}

impl RawOption {
    /// Brand reference under either spelling, `brand_id` first
    pub fn brand_ref(&self) -> Option<&Value> {
        self.brand_id
            .as_ref()
            .filter(|v| !v.is_null())
            .or(self.car_brand_id.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBrand {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub rrr_id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_languages")]
    pub languages: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub models: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    car_models: Vec<RawOption>,
}

impl RawBrand {
    /// Fold alternate keys into the canonical fields
    pub fn canonical(mut self) -> Self {
        merge_list(&mut self.models, &mut self.car_models);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub rrr_id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Value>,
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_lenient_languages")]
    pub languages: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub subcategories: Vec<RawCategory>,
    #[serde(default, deserialize_with = "lenient_list")]
    children: Vec<RawCategory>,
}

impl RawCategory {
    /// Fold `children` into `subcategories` (this level only)
    pub fn canonical(mut self) -> Self {
        merge_list(&mut self.subcategories, &mut self.children);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCarFilters {
    #[serde(default, deserialize_with = "lenient_list")]
    pub brands: Vec<RawBrand>,
    #[serde(default, deserialize_with = "lenient_list")]
    car_brands: Vec<RawBrand>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub models: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    car_models: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub body_types: Vec<RawOption>,
    #[serde(default, rename = "bodyTypes", deserialize_with = "lenient_list")]
    body_types_camel: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    car_body_types: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub fuel_types: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    fuels: Vec<RawOption>,
    #[serde(default, rename = "fuelTypes", deserialize_with = "lenient_list")]
    fuel_types_camel: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    car_fuel_types: Vec<RawOption>,
}

impl RawCarFilters {
    pub fn canonical(mut self) -> Self {
        merge_list(&mut self.brands, &mut self.car_brands);
        merge_list(&mut self.models, &mut self.car_models);
        merge_list(&mut self.body_types, &mut self.body_types_camel);
        merge_list(&mut self.body_types, &mut self.car_body_types);
        merge_list(&mut self.fuel_types, &mut self.fuels);
        merge_list(&mut self.fuel_types, &mut self.fuel_types_camel);
        merge_list(&mut self.fuel_types, &mut self.car_fuel_types);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPartFilters {
    #[serde(default, deserialize_with = "lenient_list")]
    pub qualities: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    quality: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub statuses: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    status: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub positions: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    position: Vec<RawOption>,
}

impl RawPartFilters {
    pub fn canonical(mut self) -> Self {
        merge_list(&mut self.qualities, &mut self.quality);
        merge_list(&mut self.statuses, &mut self.status);
        merge_list(&mut self.positions, &mut self.position);
        self
    }

    fn merge(self, other: Self) -> Self {
        let mut merged = self.canonical();
        let mut other = other.canonical();
        merge_list(&mut merged.qualities, &mut other.qualities);
        merge_list(&mut merged.statuses, &mut other.statuses);
        merge_list(&mut merged.positions, &mut other.positions);
        merged
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWheelFilters {
    #[serde(default, deserialize_with = "lenient_list")]
    pub drives: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    wheels_drive: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub fixing_points: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    wheels_fixing_points: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub spacings: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    wheels_spacing: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub center_bores: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    wheels_central_diameter: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub widths: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    wheels_width: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub heights: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    wheels_height: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub tread_depths: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    wheels_tread_depth: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub diameters: Vec<RawOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    wheels_diameter: Vec<RawOption>,
}

impl RawWheelFilters {
    pub fn canonical(mut self) -> Self {
        merge_list(&mut self.drives, &mut self.wheels_drive);
        merge_list(&mut self.fixing_points, &mut self.wheels_fixing_points);
        merge_list(&mut self.spacings, &mut self.wheels_spacing);
        merge_list(&mut self.center_bores, &mut self.wheels_central_diameter);
        merge_list(&mut self.widths, &mut self.wheels_width);
        merge_list(&mut self.heights, &mut self.wheels_height);
        merge_list(&mut self.tread_depths, &mut self.wheels_tread_depth);
        merge_list(&mut self.diameters, &mut self.wheels_diameter);
        self
    }

    fn merge(self, other: Self) -> Self {
        let mut merged = self.canonical();
        let mut other = other.canonical();
        merge_list(&mut merged.drives, &mut other.drives);
        merge_list(&mut merged.fixing_points, &mut other.fixing_points);
        merge_list(&mut merged.spacings, &mut other.spacings);
        merge_list(&mut merged.center_bores, &mut other.center_bores);
        merge_list(&mut merged.widths, &mut other.widths);
        merge_list(&mut merged.heights, &mut other.heights);
        merge_list(&mut merged.tread_depths, &mut other.tread_depths);
        merge_list(&mut merged.diameters, &mut other.diameters);
        merged
    }
}

/// Ответ эндпоинта фильтров как есть.
///
/// Alternate spellings of a key are separate fields, so a payload carrying
/// both is still accepted; [`RawBackendFilters::canonical`] folds them
/// together with the canonical spelling first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBackendFilters {
    #[serde(default)]
    pub car: Option<RawCarFilters>,
    #[serde(default)]
    pub parts: Option<RawPartFilters>,
    #[serde(default)]
    part: Option<RawPartFilters>,
    #[serde(default)]
    pub wheels: Option<RawWheelFilters>,
    #[serde(default)]
    wheel: Option<RawWheelFilters>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub categories: Vec<RawCategory>,
}

impl RawBackendFilters {
    /// Fold every alternate key of the top level and its nested filter
    /// groups. Brands and categories are folded by their own `canonical`.
    pub fn canonical(self) -> Self {
        let parts = match (self.parts, self.part) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (a, b) => a.or(b).map(RawPartFilters::canonical),
        };
        let wheels = match (self.wheels, self.wheel) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (a, b) => a.or(b).map(RawWheelFilters::canonical),
        };
        Self {
            car: self.car.map(RawCarFilters::canonical),
            parts,
            part: None,
            wheels,
            wheel: None,
            categories: self.categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternate_keys_and_lenient_lists() {
        let json = r#"{
            "car": {
                "brands": [{"id": 1, "name": "Audi", "car_models": [{"id": 10, "name": "A4"}]}],
                "bodyTypes": [{"id": 3, "name": "Sedan"}, "garbage", 5],
                "fuels": null
            },
            "part": {"quality": [{"rrr_id": "7", "name": "New"}]},
            "categories": "oops"
        }"#;
        let raw: RawBackendFilters = serde_json::from_str(json).unwrap();
        let raw = raw.canonical();

        let car = raw.car.unwrap();
        assert_eq!(car.brands.len(), 1);
        assert_eq!(car.brands[0].clone().canonical().models.len(), 1);
        assert_eq!(car.body_types.len(), 1);
        assert!(car.fuel_types.is_empty());

        let parts = raw.parts.unwrap();
        assert_eq!(parts.qualities[0].name.as_deref(), Some("New"));
        assert!(raw.wheels.is_none());
        assert!(raw.categories.is_empty());
    }

    #[test]
    fn test_both_spellings_are_merged() {
        let json = r#"{
            "car": {"models": [], "car_models": [{"id": 1, "name": "A4"}]},
            "parts": {"quality": [{"id": 2, "name": "Used"}], "qualities": [{"id": 1, "name": "New"}]},
            "part": {"statuses": [{"id": 3, "name": "Sold"}]},
            "wheels": {"widths": [{"id": 4, "name": 205}]},
            "wheel": {"wheels_width": [{"id": 5, "name": 225}]}
        }"#;
        let raw: RawBackendFilters = serde_json::from_str(json).unwrap();
        let raw = raw.canonical();

        assert_eq!(raw.car.unwrap().models.len(), 1);
        let parts = raw.parts.unwrap();
        let qualities: Vec<_> = parts.qualities.iter().map(|q| q.name.as_deref()).collect();
        assert_eq!(qualities, vec![Some("New"), Some("Used")]);
        assert_eq!(parts.statuses.len(), 1);
        let widths: Vec<_> = raw.wheels.unwrap().widths.iter().map(|w| w.name.clone()).collect();
        assert_eq!(widths, vec![Some("205".to_string()), Some("225".to_string())]);
    }

    #[test]
    fn test_brand_with_both_model_keys_is_kept() {
        let brand: RawBrand = serde_json::from_str(
            r#"{"id": 1, "name": "Audi", "models": [{"id": 10, "name": "A4"}], "car_models": [{"id": 11, "name": "A6"}]}"#,
        )
        .unwrap();
        assert_eq!(brand.canonical().models.len(), 2);
    }

    #[test]
    fn test_brand_ref_prefers_brand_id() {
        let opt: RawOption = serde_json::from_str(r#"{"id": 1, "brand_id": 3, "car_brand_id": 4}"#).unwrap();
        assert_eq!(opt.brand_ref().and_then(Value::as_i64), Some(3));
        let opt: RawOption = serde_json::from_str(r#"{"id": 1, "car_brand_id": 4}"#).unwrap();
        assert_eq!(opt.brand_ref().and_then(Value::as_i64), Some(4));
    }

    #[test]
    fn test_numeric_names_become_strings() {
        let opt: RawOption = serde_json::from_str(r#"{"id": 4, "name": 205}"#).unwrap();
        assert_eq!(opt.name.as_deref(), Some("205"));
    }

    #[test]
    fn test_category_children_key() {
        let cat: RawCategory = serde_json::from_str(
            r#"{"id": 1, "name": "Body", "subcategories": [{"id": 3}], "children": [{"id": 2, "name": "Doors"}]}"#,
        )
        .unwrap();
        assert_eq!(cat.canonical().subcategories.len(), 2);
    }
}
