//! Name ↔ id resolution against the filter catalog.
//!
//! The UI keeps display names; the backend wants ids. Lookups are linear
//! scans where the first match wins, and a miss is `None` rather than an
//! error so that a stale selection does not block the rest of a query.

use crate::category::{find_category_by_name, flatten_categories};
use crate::shared::localization::localized_text;
use contracts::catalog::raw::{RawBrand, RawCategory, RawOption};
use contracts::catalog::{BackendFilters, Brand, Category, FilterOption, RrrId};
use contracts::shared::localized_text::LocalizedText;
use serde_json::Value;

/// Anything that can appear in a catalog list
pub trait CatalogItem {
    /// Primary numeric id, if the item carries one
    fn item_id(&self) -> Option<i64> {
        None
    }

    fn item_rrr_id(&self) -> Option<RrrId> {
        None
    }

    fn item_name(&self) -> Option<&str> {
        None
    }

    fn item_languages(&self) -> Option<&LocalizedText> {
        None
    }

    /// Scalars render as themselves
    fn item_text(&self) -> Option<String> {
        None
    }
}

impl CatalogItem for FilterOption {
    fn item_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn item_rrr_id(&self) -> Option<RrrId> {
        self.rrr_id.clone()
    }

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_languages(&self) -> Option<&LocalizedText> {
        self.languages.as_ref()
    }
}

impl CatalogItem for Category {
    fn item_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn item_rrr_id(&self) -> Option<RrrId> {
        (!self.rrr_id.is_empty()).then(|| RrrId::Text(self.rrr_id.clone()))
    }

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_languages(&self) -> Option<&LocalizedText> {
        self.languages.as_ref()
    }
}

impl CatalogItem for Brand {
    fn item_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_languages(&self) -> Option<&LocalizedText> {
        self.languages.as_ref()
    }
}

macro_rules! impl_raw_catalog_item {
    ($($ty:ty),*) => {
        $(
            impl CatalogItem for $ty {
                fn item_id(&self) -> Option<i64> {
                    self.id.as_ref().and_then(numeric_value)
                }

                fn item_rrr_id(&self) -> Option<RrrId> {
                    self.rrr_id.as_ref().and_then(rrr_id_from_value)
                }

                fn item_name(&self) -> Option<&str> {
                    self.name.as_deref()
                }

                fn item_languages(&self) -> Option<&LocalizedText> {
                    self.languages.as_ref()
                }
            }
        )*
    };
}

impl_raw_catalog_item!(RawOption, RawBrand, RawCategory);

impl CatalogItem for str {
    fn item_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl CatalogItem for String {
    fn item_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl CatalogItem for i64 {
    fn item_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Integral JSON number, `None` for strings and everything else
pub(crate) fn numeric_value(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().and_then(integral_f64))
}

fn integral_f64(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

pub(crate) fn rrr_id_from_value(value: &Value) -> Option<RrrId> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(RrrId::Number)
            .or_else(|| n.as_f64().map(RrrId::Float)),
        Value::String(s) => Some(RrrId::Text(s.clone())),
        _ => None,
    }
}

/// Secondary id as a number, parsing numeric strings
pub fn parse_rrr_id(rrr_id: &RrrId) -> Option<i64> {
    match rrr_id {
        RrrId::Number(n) => Some(*n),
        RrrId::Float(f) => integral_f64(*f),
        RrrId::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
        }
    }
}

/// Backend id of an item: the numeric `id`, else the parsed `rrr_id`
pub fn extract_id<T: CatalogItem + ?Sized>(item: &T) -> Option<i64> {
    item.item_id()
        .or_else(|| item.item_rrr_id().as_ref().and_then(parse_rrr_id))
}

/// Display name of an item as the filter dropdowns show it
pub fn extract_name<T: CatalogItem + ?Sized>(item: &T) -> String {
    if let Some(text) = item.item_text() {
        return text;
    }
    localized_text(item.item_languages(), item.item_name().unwrap_or_default())
}

/// Id of the first entry whose display name equals `name`
pub fn map_name_to_id<T: CatalogItem>(name: &str, list: &[T]) -> Option<i64> {
    list.iter()
        .find(|entry| extract_name(*entry) == name)
        .and_then(|entry| extract_id(entry))
}

/// Display name of the first entry with the given id
pub fn map_id_to_name<T: CatalogItem>(id: i64, list: &[T]) -> Option<String> {
    list.iter()
        .find(|entry| extract_id(*entry) == Some(id))
        .map(|entry| extract_name(entry))
}

// ============================================================================
// Facet wrappers
// ============================================================================

/// Wheel attribute facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelFacet {
    Drive,
    FixingPoints,
    Spacing,
    CenterBore,
    Width,
    Height,
    TreadDepth,
    Diameter,
}

impl WheelFacet {
    pub const ALL: [WheelFacet; 8] = [
        WheelFacet::Drive,
        WheelFacet::FixingPoints,
        WheelFacet::Spacing,
        WheelFacet::CenterBore,
        WheelFacet::Width,
        WheelFacet::Height,
        WheelFacet::TreadDepth,
        WheelFacet::Diameter,
    ];

    /// Options of this facet in the catalog
    pub fn options(self, catalog: &BackendFilters) -> &[FilterOption] {
        let wheels = &catalog.wheels;
        match self {
            WheelFacet::Drive => &wheels.drives,
            WheelFacet::FixingPoints => &wheels.fixing_points,
            WheelFacet::Spacing => &wheels.spacings,
            WheelFacet::CenterBore => &wheels.center_bores,
            WheelFacet::Width => &wheels.widths,
            WheelFacet::Height => &wheels.heights,
            WheelFacet::TreadDepth => &wheels.tread_depths,
            WheelFacet::Diameter => &wheels.diameters,
        }
    }
}

/// Filterable attribute of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Brand,
    Model,
    BodyType,
    FuelType,
    Quality,
    Position,
    Status,
    Category,
    Wheel(WheelFacet),
}

impl Facet {
    /// Dropdown options of the facet. Models come from every brand,
    /// categories are flattened in pre-order.
    pub fn options(self, catalog: &BackendFilters) -> Vec<FilterOption> {
        match self {
            Facet::Brand => catalog
                .car
                .brands
                .iter()
                .map(|b| FilterOption {
                    id: b.id,
                    rrr_id: None,
                    name: b.name.clone(),
                    languages: b.languages.clone(),
                })
                .collect(),
            Facet::Model => models_for_brands(&[], catalog).into_iter().cloned().collect(),
            Facet::BodyType => catalog.car.body_types.clone(),
            Facet::FuelType => catalog.car.fuel_types.clone(),
            Facet::Quality => catalog.parts.qualities.clone(),
            Facet::Position => catalog.parts.positions.clone(),
            Facet::Status => catalog.parts.statuses.clone(),
            Facet::Category => flatten_categories(&catalog.categories)
                .into_iter()
                .map(|c| FilterOption {
                    id: c.id,
                    rrr_id: None,
                    name: c.name.clone(),
                    languages: c.languages.clone(),
                })
                .collect(),
            Facet::Wheel(wheel) => wheel.options(catalog).to_vec(),
        }
    }
}

pub fn map_brand_name_to_id(name: &str, catalog: &BackendFilters) -> Option<i64> {
    map_name_to_id(name, &catalog.car.brands)
}

/// Models live under their brands; the flat list holds orphans
pub fn map_model_name_to_id(name: &str, catalog: &BackendFilters) -> Option<i64> {
    catalog
        .car
        .brands
        .iter()
        .find_map(|brand| map_name_to_id(name, &brand.models))
        .or_else(|| map_name_to_id(name, &catalog.car.models))
}

pub fn map_body_type_name_to_id(name: &str, catalog: &BackendFilters) -> Option<i64> {
    map_name_to_id(name, &catalog.car.body_types)
}

pub fn map_fuel_type_name_to_id(name: &str, catalog: &BackendFilters) -> Option<i64> {
    map_name_to_id(name, &catalog.car.fuel_types)
}

pub fn map_quality_name_to_id(name: &str, catalog: &BackendFilters) -> Option<i64> {
    map_name_to_id(name, &catalog.parts.qualities)
}

/// Catalog lookup only: how the backend encodes positions on a part
/// record is not known, so no numeric-to-position mapping exists here.
pub fn map_position_name_to_id(name: &str, catalog: &BackendFilters) -> Option<i64> {
    map_name_to_id(name, &catalog.parts.positions)
}

pub fn map_status_name_to_id(name: &str, catalog: &BackendFilters) -> Option<i64> {
    map_name_to_id(name, &catalog.parts.statuses)
}

pub fn map_category_name_to_id(name: &str, catalog: &BackendFilters) -> Option<i64> {
    find_category_by_name(&catalog.categories, name).and_then(extract_id)
}

pub fn map_wheel_name_to_id(facet: WheelFacet, name: &str, catalog: &BackendFilters) -> Option<i64> {
    map_name_to_id(name, facet.options(catalog))
}

/// Resolve a display name within any facet
pub fn map_facet_name_to_id(facet: Facet, name: &str, catalog: &BackendFilters) -> Option<i64> {
    match facet {
        Facet::Brand => map_brand_name_to_id(name, catalog),
        Facet::Model => map_model_name_to_id(name, catalog),
        Facet::BodyType => map_body_type_name_to_id(name, catalog),
        Facet::FuelType => map_fuel_type_name_to_id(name, catalog),
        Facet::Quality => map_quality_name_to_id(name, catalog),
        Facet::Position => map_position_name_to_id(name, catalog),
        Facet::Status => map_status_name_to_id(name, catalog),
        Facet::Category => map_category_name_to_id(name, catalog),
        Facet::Wheel(wheel) => map_wheel_name_to_id(wheel, name, catalog),
    }
}

/// Model options for the dependent dropdown: models of the selected brands,
/// or every model when no brand is selected.
pub fn models_for_brands<'a>(
    selected_brands: &[String],
    catalog: &'a BackendFilters,
) -> Vec<&'a FilterOption> {
    if selected_brands.is_empty() {
        return catalog
            .car
            .brands
            .iter()
            .flat_map(|brand| brand.models.iter())
            .chain(catalog.car.models.iter())
            .collect();
    }

    catalog
        .car
        .brands
        .iter()
        .filter(|brand| {
            let name = extract_name(*brand);
            selected_brands.iter().any(|s| *s == name)
        })
        .flat_map(|brand| brand.models.iter())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::{CarFilters, PartFilters, WheelFilters};

    fn catalog() -> BackendFilters {
        BackendFilters {
            car: CarFilters {
                brands: vec![
                    Brand::new(1, "Audi", vec![FilterOption::new(10, "A4"), FilterOption::new(11, "A6")]),
                    Brand::new(2, "BMW", vec![FilterOption::new(20, "X5")]),
                ],
                models: vec![FilterOption::new(99, "Orphan")],
                body_types: vec![FilterOption::new(3, "Sedan")],
                fuel_types: vec![FilterOption::new(4, "Diesel")],
            },
            parts: PartFilters {
                qualities: vec![FilterOption::new(5, "New"), FilterOption::new(6, "Used")],
                statuses: vec![FilterOption::new(7, "Available")],
                positions: vec![FilterOption::new(8, "Front")
                    .with_languages([("lt", "Priekis"), ("en", "Front")])],
            },
            wheels: WheelFilters {
                widths: vec![FilterOption::new(30, "205")],
                ..Default::default()
            },
            categories: vec![Category::new(100, "Engine")
                .with_children(vec![Category::new(101, "Pistons")])],
        }
    }

    #[test]
    fn test_extract_id_prefers_numeric_id() {
        let opt = FilterOption {
            rrr_id: Some(RrrId::Number(500)),
            ..FilterOption::new(5, "X")
        };
        assert_eq!(extract_id(&opt), Some(5));
    }

    #[test]
    fn test_extract_id_falls_back_to_rrr_id() {
        let raw: RawOption = serde_json::from_str(r#"{"id": "abc", "rrr_id": "42"}"#).unwrap();
        assert_eq!(extract_id(&raw), Some(42));

        let raw: RawOption = serde_json::from_str(r#"{"rrr_id": 7.0}"#).unwrap();
        assert_eq!(extract_id(&raw), Some(7));

        let raw: RawOption = serde_json::from_str(r#"{"rrr_id": "x-1"}"#).unwrap();
        assert_eq!(extract_id(&raw), None);

        assert_eq!(extract_id("plain"), None);
    }

    #[test]
    fn test_extract_name() {
        assert_eq!(extract_name("Sedan"), "Sedan");
        assert_eq!(extract_name(&42_i64), "42");
        let localized = FilterOption::new(1, "Front").with_languages([("lt", "Priekis")]);
        assert_eq!(extract_name(&localized), "Priekis");
        let raw = RawOption::default();
        assert_eq!(extract_name(&raw), "");
    }

    #[test]
    fn test_lookup_symmetry() {
        let list = vec![
            FilterOption::new(1, "New"),
            FilterOption::new(2, "Used").with_languages([("en", "Used (EN)")]),
            FilterOption::new(3, "Refurbished"),
        ];
        for option in &list {
            assert_eq!(map_name_to_id(&extract_name(option), &list), extract_id(option));
        }
    }

    #[test]
    fn test_first_match_wins() {
        let list = vec![FilterOption::new(1, "Dup"), FilterOption::new(2, "Dup")];
        assert_eq!(map_name_to_id("Dup", &list), Some(1));
        assert_eq!(map_id_to_name(2, &list), Some("Dup".to_string()));
    }

    #[test]
    fn test_unknown_name_is_none() {
        let list = vec![FilterOption::new(1, "New")];
        assert_eq!(map_name_to_id("Nonexistent", &list), None);
        assert_eq!(map_name_to_id::<FilterOption>("New", &[]), None);
    }

    #[test]
    fn test_facet_wrappers() {
        let c = catalog();
        assert_eq!(map_brand_name_to_id("BMW", &c), Some(2));
        assert_eq!(map_model_name_to_id("X5", &c), Some(20));
        assert_eq!(map_model_name_to_id("Orphan", &c), Some(99));
        assert_eq!(map_body_type_name_to_id("Sedan", &c), Some(3));
        assert_eq!(map_fuel_type_name_to_id("Diesel", &c), Some(4));
        assert_eq!(map_quality_name_to_id("Used", &c), Some(6));
        assert_eq!(map_status_name_to_id("Available", &c), Some(7));
        assert_eq!(map_position_name_to_id("Priekis", &c), Some(8));
        assert_eq!(map_position_name_to_id("Front", &c), None);
        assert_eq!(map_category_name_to_id("Pistons", &c), Some(101));
        assert_eq!(map_wheel_name_to_id(WheelFacet::Width, "205", &c), Some(30));
        assert_eq!(map_wheel_name_to_id(WheelFacet::Height, "205", &c), None);
        assert_eq!(map_facet_name_to_id(Facet::Model, "A6", &c), Some(11));
    }

    #[test]
    fn test_models_for_brands() {
        let c = catalog();
        let ids: Vec<i64> = models_for_brands(&["Audi".to_string()], &c).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 11]);

        let all: Vec<i64> = models_for_brands(&[], &c).iter().map(|m| m.id).collect();
        assert_eq!(all, vec![10, 11, 20, 99]);
    }

    #[test]
    fn test_facet_options() {
        let c = catalog();
        let names: Vec<String> = Facet::Category.options(&c).into_iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["Engine", "Pistons"]);
        assert_eq!(Facet::Brand.options(&c).len(), 2);
        assert_eq!(Facet::Wheel(WheelFacet::Width).options(&c)[0].id, 30);
    }
}
