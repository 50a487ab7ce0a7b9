//! Shared DTOs of the auto-parts inventory dashboard.
//!
//! Everything here is plain serde data: the filter catalog as the backend
//! sends it, its canonical form, the UI-owned filter state and the query
//! parameter objects for each backend resource.

pub mod catalog;
pub mod filter_state;
pub mod queries;
pub mod shared;
