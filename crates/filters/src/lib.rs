//! Filter translation core of the auto-parts inventory dashboard.
//!
//! Turns the UI filter selection into backend query parameters using the
//! once-per-session filter catalog as lookup table. Everything here is
//! synchronous and side-effect free except [`storage`], which talks to a
//! key-value store supplied by the caller.

pub mod assemblers;
pub mod catalog;
pub mod category;
pub mod error;
pub mod lookup;
pub mod range;
pub mod shared;
pub mod storage;

pub use assemblers::{
    filter_state_to_query_params, orders_query_params, returns_query_params,
    statistics_query_params, to_query_string,
};
pub use error::FilterError;
