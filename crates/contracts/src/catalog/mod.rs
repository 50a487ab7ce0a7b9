//! Filter catalog ("backend filters"): the server-provided enumeration of
//! valid filter values and the category tree.

pub mod dto;
pub mod raw;

pub use dto::*;
