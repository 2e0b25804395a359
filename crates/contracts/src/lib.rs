//! Wire contracts shared between the shopcart UI and the shopcart REST API.

pub mod domain;
pub mod shared;
