use super::{category_ids, date_bounds, facet_ids};
use crate::lookup::Facet;
use contracts::catalog::BackendFilters;
use contracts::filter_state::FilterState;
use contracts::queries::{Pagination, StatisticsQuery};

/// Query parameters for sales statistics
pub fn statistics_query_params(
    filters: &FilterState,
    pagination: Option<Pagination>,
    catalog: Option<&BackendFilters>,
) -> StatisticsQuery {
    let (date_from, date_to) = date_bounds(&filters.date_range);

    let mut query = StatisticsQuery {
        date_from,
        date_to,
        brands: facet_ids(Facet::Brand, &filters.brands, catalog),
        models: facet_ids(Facet::Model, &filters.models, catalog),
        categories: category_ids(&filters.categories, catalog),
        qualities: facet_ids(Facet::Quality, &filters.qualities, catalog),
        ..Default::default()
    };

    if let Some(pagination) = pagination {
        query.page = Some(pagination.page);
        query.per_page = Some(pagination.per_page);
    }
    query
}
