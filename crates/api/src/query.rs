//! Shared query parameter types for API handlers.
//!
//! Range constraints mirror what the store layer clamps to, so malformed
//! requests are rejected at the handler boundary before any round trip.

use serde::Deserialize;
use validator::Validate;

use mflix_core::error::CoreError;

use crate::error::AppError;

/// Run validator checks and convert failures into a validation envelope.
pub fn validate_params<T: Validate>(params: &T) -> Result<(), AppError> {
    params
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// Query parameters for `GET /movies`.
#[derive(Debug, Deserialize, Validate)]
pub struct ListMoviesParams {
    /// Full-text search query.
    pub q: Option<String>,
    /// Title substring (case-insensitive).
    pub title: Option<String>,
    /// Genre substring (case-insensitive).
    pub genre: Option<String>,
    /// Exact release year.
    pub year: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub skip: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Query parameters for `GET /movies/aggregate/directors`.
#[derive(Debug, Deserialize, Validate)]
pub struct DirectorsParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

/// Query parameters for `GET /movies/aggregate/recent-commented`.
#[derive(Debug, Deserialize, Validate)]
pub struct RecentCommentedParams {
    /// Restrict to one movie. Malformed ids are a client error.
    pub movie_id: Option<String>,
    /// Recent comments kept per movie.
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<i64>,
}
