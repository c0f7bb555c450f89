//! Wire types and shared rules of the restaurant directory admin API.

pub mod domain;
pub mod shared;
