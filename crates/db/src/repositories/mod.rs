//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept the `&Database` handle as the first argument.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
