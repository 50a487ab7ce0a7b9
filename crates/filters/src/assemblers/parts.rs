use super::{category_ids, facet_ids, search_term};
use crate::lookup::{Facet, WheelFacet};
use contracts::catalog::BackendFilters;
use contracts::filter_state::FilterState;
use contracts::queries::{Pagination, PartsQuery};

/// Query parameters for the parts list
pub fn filter_state_to_query_params(
    filters: &FilterState,
    pagination: Option<Pagination>,
    catalog: Option<&BackendFilters>,
) -> PartsQuery {
    let wheels = &filters.wheels;
    let wheel = |facet: WheelFacet, names: &[String]| facet_ids(Facet::Wheel(facet), names, catalog);

    let mut query = PartsQuery {
        search: search_term(&filters.search),

        brands: facet_ids(Facet::Brand, &filters.brands, catalog),
        models: facet_ids(Facet::Model, &filters.models, catalog),
        body_types: facet_ids(Facet::BodyType, &filters.body_types, catalog),
        fuel_types: facet_ids(Facet::FuelType, &filters.fuel_types, catalog),
        year_min: filters.year.min,
        year_max: filters.year.max,
        engine_volume_min: filters.engine_volume.min,
        engine_volume_max: filters.engine_volume.max,

        categories: category_ids(&filters.categories, catalog),
        qualities: facet_ids(Facet::Quality, &filters.qualities, catalog),
        positions: facet_ids(Facet::Position, &filters.positions, catalog),
        statuses: facet_ids(Facet::Status, &filters.statuses, catalog),
        price_min: filters.price.min,
        price_max: filters.price.max,

        wheel_drives: wheel(WheelFacet::Drive, &wheels.drives),
        wheel_fixing_points: wheel(WheelFacet::FixingPoints, &wheels.fixing_points),
        wheel_spacings: wheel(WheelFacet::Spacing, &wheels.spacings),
        wheel_center_bores: wheel(WheelFacet::CenterBore, &wheels.center_bores),
        wheel_widths: wheel(WheelFacet::Width, &wheels.widths),
        wheel_heights: wheel(WheelFacet::Height, &wheels.heights),
        wheel_tread_depths: wheel(WheelFacet::TreadDepth, &wheels.tread_depths),
        wheel_diameters: wheel(WheelFacet::Diameter, &wheels.diameters),

        ..Default::default()
    };

    if let Some(pagination) = pagination {
        query.page = Some(pagination.page);
        query.per_page = Some(pagination.per_page);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{catalog, engine_selected};
    use super::*;
    use contracts::shared::range::NumericRange;

    #[test]
    fn test_default_state_builds_empty_query() {
        let c = catalog();
        let query = filter_state_to_query_params(&FilterState::default(), None, Some(&c));
        assert_eq!(query, PartsQuery::default());
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
    }

    #[test]
    fn test_full_translation() {
        let c = catalog();
        let mut filters = FilterState {
            search: " turbo ".into(),
            brands: vec!["Audi".into()],
            models: vec!["X5".into()],
            body_types: vec!["Sedan".into()],
            fuel_types: vec!["Diesel".into()],
            categories: engine_selected(),
            qualities: vec!["New".into()],
            positions: vec!["Front".into()],
            statuses: vec!["Sold".into()],
            year: NumericRange::new(Some(2008), None),
            price: NumericRange::new(Some(10.0), Some(250.0)),
            ..Default::default()
        };
        filters.wheels.widths = vec!["205".into()];
        filters.wheels.diameters = vec!["16".into()];

        let query = filter_state_to_query_params(&filters, Some(Pagination::new(3, 30)), Some(&c));
        assert_eq!(query.page, Some(3));
        assert_eq!(query.per_page, Some(30));
        assert_eq!(query.search.as_deref(), Some("turbo"));
        assert_eq!(query.brands, vec![1]);
        assert_eq!(query.models, vec![20]);
        assert_eq!(query.body_types, vec![3]);
        assert_eq!(query.fuel_types, vec![4]);
        assert_eq!(query.categories, vec![100]);
        assert_eq!(query.qualities, vec![5]);
        assert_eq!(query.positions, vec![9]);
        assert_eq!(query.statuses, vec![8]);
        assert_eq!(query.year_min, Some(2008));
        assert_eq!(query.year_max, None);
        assert_eq!(query.price_min, Some(10.0));
        assert_eq!(query.price_max, Some(250.0));
        assert_eq!(query.wheel_widths, vec![30]);
        assert_eq!(query.wheel_diameters, vec![31]);
        assert!(query.wheel_heights.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let c = catalog();
        let filters = FilterState {
            brands: vec!["BMW".into()],
            categories: engine_selected(),
            ..Default::default()
        };
        let first = filter_state_to_query_params(&filters, Some(Pagination::new(1, 15)), Some(&c));
        let second = filter_state_to_query_params(&filters, Some(Pagination::new(1, 15)), Some(&c));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_names_are_dropped_not_fatal() {
        let c = catalog();
        let filters = FilterState {
            brands: vec!["BMW".into(), "Nonexistent".into()],
            qualities: vec!["Ghost".into()],
            ..Default::default()
        };
        let query = filter_state_to_query_params(&filters, None, Some(&c));
        assert_eq!(query.brands, vec![2]);

        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("qualities").is_none());
        assert!(json.get("page").is_none());
    }

    #[test]
    fn test_without_catalog_only_ids_and_ranges_survive() {
        let filters = FilterState {
            brands: vec!["BMW".into()],
            categories: engine_selected(),
            engine_volume: NumericRange::new(None, Some(2.0)),
            ..Default::default()
        };
        let query = filter_state_to_query_params(&filters, None, None);
        assert!(query.brands.is_empty());
        assert_eq!(query.categories, vec![100, 101, 102]);
        assert_eq!(query.engine_volume_max, Some(2.0));
    }
}
