use super::{category_ids, date_bounds, facet_ids, search_term};
use crate::lookup::Facet;
use contracts::catalog::BackendFilters;
use contracts::filter_state::FilterState;
use contracts::queries::{OrdersQuery, Pagination};

/// Query parameters for the orders list
pub fn orders_query_params(
    filters: &FilterState,
    pagination: Option<Pagination>,
    catalog: Option<&BackendFilters>,
) -> OrdersQuery {
    let (date_from, date_to) = date_bounds(&filters.date_range);

    let mut query = OrdersQuery {
        search: search_term(&filters.search),
        status: filters.order_status_filter().map(str::to_string),
        date_from,
        date_to,
        price_min: filters.price.min,
        price_max: filters.price.max,
        brands: facet_ids(Facet::Brand, &filters.brands, catalog),
        categories: category_ids(&filters.categories, catalog),
        ..Default::default()
    };

    if let Some(pagination) = pagination {
        query.page = Some(pagination.page);
        query.per_page = Some(pagination.per_page);
    }
    query
}
