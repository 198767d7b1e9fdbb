//! Domain-level types shared by the db and api crates.

pub mod error;
