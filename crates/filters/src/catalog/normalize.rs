use crate::error::FilterError;
use crate::lookup::{extract_id, extract_name, numeric_value, rrr_id_from_value};
use contracts::catalog::raw::{RawBackendFilters, RawBrand, RawCategory, RawOption};
use contracts::catalog::{
    BackendFilters, Brand, CarFilters, Category, FilterOption, PartFilters, WheelFilters,
};
use serde_json::Value;

/// Parse the catalog endpoint payload into the canonical catalog
pub fn parse_catalog(json: &str) -> Result<BackendFilters, FilterError> {
    let raw: RawBackendFilters = serde_json::from_str(json)?;
    let catalog = normalize_catalog(raw);
    tracing::info!(
        "Filter catalog loaded: {} brands, {} root categories",
        catalog.car.brands.len(),
        catalog.categories.len()
    );
    Ok(catalog)
}

/// Map the heterogeneous wire shape onto the canonical catalog.
///
/// Alternate key spellings are folded in after the canonical ones. Entries
/// without any usable id are dropped, except categories, whose children are
/// lifted one level up. Flat model lists are attached to their brand when
/// `brand_id` matches one, otherwise kept as orphans.
pub fn normalize_catalog(raw: RawBackendFilters) -> BackendFilters {
    let raw = raw.canonical();
    let car = raw.car.unwrap_or_default();
    let parts = raw.parts.unwrap_or_default();
    let wheels = raw.wheels.unwrap_or_default();

    let mut brands: Vec<Brand> = car.brands.into_iter().filter_map(normalize_brand).collect();
    let mut orphan_models = Vec::new();
    for raw_model in car.models {
        let brand_id = raw_model.brand_ref().and_then(numeric_value);
        let Some(model) = normalize_option(raw_model, "model") else {
            continue;
        };
        match brand_id.and_then(|id| brands.iter_mut().find(|b| b.id == id)) {
            Some(brand) => {
                if !brand.models.iter().any(|m| m.id == model.id) {
                    brand.models.push(model);
                }
            }
            None => {
                if !orphan_models.iter().any(|m: &FilterOption| m.id == model.id) {
                    orphan_models.push(model);
                }
            }
        }
    }

    BackendFilters {
        car: CarFilters {
            brands,
            models: orphan_models,
            body_types: normalize_options(car.body_types, "body type"),
            fuel_types: normalize_options(car.fuel_types, "fuel type"),
        },
        parts: PartFilters {
            qualities: normalize_options(parts.qualities, "quality"),
            statuses: normalize_options(parts.statuses, "status"),
            positions: normalize_options(parts.positions, "position"),
        },
        wheels: WheelFilters {
            drives: normalize_options(wheels.drives, "wheel drive"),
            fixing_points: normalize_options(wheels.fixing_points, "wheel fixing points"),
            spacings: normalize_options(wheels.spacings, "wheel spacing"),
            center_bores: normalize_options(wheels.center_bores, "wheel center bore"),
            widths: normalize_options(wheels.widths, "wheel width"),
            heights: normalize_options(wheels.heights, "wheel height"),
            tread_depths: normalize_options(wheels.tread_depths, "wheel tread depth"),
            diameters: normalize_options(wheels.diameters, "wheel diameter"),
        },
        categories: raw
            .categories
            .into_iter()
            .flat_map(|node| normalize_category(node, None, 0))
            .collect(),
    }
}

fn normalize_options(raw: Vec<RawOption>, kind: &str) -> Vec<FilterOption> {
    raw.into_iter()
        .filter_map(|option| normalize_option(option, kind))
        .collect()
}

fn normalize_option(raw: RawOption, kind: &str) -> Option<FilterOption> {
    let Some(id) = extract_id(&raw) else {
        tracing::debug!("{} '{}' has no usable id, skipped", kind, extract_name(&raw));
        return None;
    };
    let name = display_name(&raw, raw.name.as_deref());
    Some(FilterOption {
        id,
        rrr_id: raw.rrr_id.as_ref().and_then(rrr_id_from_value),
        name,
        languages: raw.languages,
    })
}

fn normalize_brand(raw: RawBrand) -> Option<Brand> {
    let raw = raw.canonical();
    let Some(id) = extract_id(&raw) else {
        tracing::debug!("brand '{}' has no usable id, skipped", extract_name(&raw));
        return None;
    };
    let name = display_name(&raw, raw.name.as_deref());
    Some(Brand {
        id,
        name,
        languages: raw.languages,
        models: normalize_options(raw.models, "model"),
    })
}

/// Normalize one node with its subtree.
///
/// A node without a usable id cannot be selected, but its descendants still
/// can: they take its place under `parent` at the same level.
fn normalize_category(raw: RawCategory, parent: Option<i64>, level: u32) -> Vec<Category> {
    let raw = raw.canonical();
    let Some(id) = extract_id(&raw) else {
        tracing::debug!(
            "category '{}' has no usable id, lifting {} subcategories",
            extract_name(&raw),
            raw.subcategories.len()
        );
        return raw
            .subcategories
            .into_iter()
            .flat_map(|child| normalize_category(child, parent, level))
            .collect();
    };
    let name = display_name(&raw, raw.name.as_deref());
    let parent_id = match parent {
        Some(parent) => parent.to_string(),
        None => raw.parent_id.as_ref().map(scalar_string).unwrap_or_default(),
    };
    vec![Category {
        id,
        rrr_id: raw.rrr_id.as_ref().map(scalar_string).unwrap_or_default(),
        name,
        parent_id,
        level,
        languages: raw.languages,
        subcategories: raw
            .subcategories
            .into_iter()
            .flat_map(|child| normalize_category(child, Some(id), level + 1))
            .collect(),
    }]
}

/// Keep the backend `name`; fall back to the localized text when missing
fn display_name<T: crate::lookup::CatalogItem>(raw: &T, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => extract_name(raw),
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
