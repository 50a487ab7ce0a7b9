use super::{category_ids, date_bounds, facet_ids, search_term};
use crate::lookup::Facet;
use contracts::catalog::BackendFilters;
use contracts::filter_state::FilterState;
use contracts::queries::{Pagination, ReturnsQuery};

/// Query parameters for the returns list
pub fn returns_query_params(
    filters: &FilterState,
    pagination: Option<Pagination>,
    catalog: Option<&BackendFilters>,
) -> ReturnsQuery {
    let (date_from, date_to) = date_bounds(&filters.date_range);

    let mut query = ReturnsQuery {
        search: search_term(&filters.search),
        date_from,
        date_to,
        brands: facet_ids(Facet::Brand, &filters.brands, catalog),
        models: facet_ids(Facet::Model, &filters.models, catalog),
        categories: category_ids(&filters.categories, catalog),
        statuses: facet_ids(Facet::Status, &filters.statuses, catalog),
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
    use chrono::NaiveDate;
    use contracts::shared::range::DateRange;

    #[test]
    fn test_dates_are_formatted() {
        let c = catalog();
        let filters = FilterState {
            date_range: DateRange::new(NaiveDate::from_ymd_opt(2024, 2, 1), NaiveDate::from_ymd_opt(2024, 2, 29)),
            ..Default::default()
        };
        let query = returns_query_params(&filters, None, Some(&c));
        assert_eq!(query.date_from.as_deref(), Some("2024-02-01"));
        assert_eq!(query.date_to.as_deref(), Some("2024-02-29"));
    }

    #[test]
    fn test_facets_and_pagination() {
        let c = catalog();
        let filters = FilterState {
            brands: vec!["Audi".into()],
            models: vec!["A4".into(), "Gone".into()],
            statuses: vec!["Available".into()],
            categories: engine_selected()[1..].to_vec(),
            // not part of the returns query
            qualities: vec!["New".into()],
            ..Default::default()
        };
        let query = returns_query_params(&filters, Some(Pagination::new(2, 50)), Some(&c));
        assert_eq!(
            query,
            ReturnsQuery {
                page: Some(2),
                per_page: Some(50),
                brands: vec![1],
                models: vec![10],
                categories: vec![101, 102],
                statuses: vec![7],
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_state_omits_everything() {
        let query = returns_query_params(&FilterState::default(), None, None);
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
    }
}
