//! HTTP request handlers.

pub mod aggregations;
pub mod movies;
