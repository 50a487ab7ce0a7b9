//! Query parameter DTOs, one per backend resource.
//!
//! Every optional field is skipped when `None` and every id list when empty,
//! so a serialized query never carries `null` or `[]`.

pub mod orders;
pub mod parts;
pub mod returns;
pub mod statistics;

use serde::{Deserialize, Serialize};

pub use orders::OrdersQuery;
pub use parts::PartsQuery;
pub use returns::ReturnsQuery;
pub use statistics::StatisticsQuery;

/// Пагинация списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}
