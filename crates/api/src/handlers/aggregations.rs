//! Handlers for the `/movies/aggregate` endpoints.
//!
//! Each endpoint executes one fixed, parameterized pipeline; no state is
//! held between requests.

use axum::extract::{Query, State};
use axum::Json;
use mongodb::bson::Document;

use mflix_db::repositories::MovieRepo;
use mflix_db::{parse_object_id, pipelines};

use crate::error::AppResult;
use crate::query::{validate_params, DirectorsParams, RecentCommentedParams};
use crate::response::SuccessBody;
use crate::state::AppState;

/// GET /api/v1/movies/aggregate/by-genre
pub async fn by_genre(
    State(state): State<AppState>,
) -> AppResult<Json<SuccessBody<Vec<Document>>>> {
    let stats = MovieRepo::aggregate(&state.db, pipelines::by_genre()).await?;

    let message = format!("Aggregated statistics for {} genres.", stats.len());
    Ok(Json(SuccessBody::new(stats, message)))
}

/// GET /api/v1/movies/aggregate/by-year
pub async fn by_year(
    State(state): State<AppState>,
) -> AppResult<Json<SuccessBody<Vec<Document>>>> {
    let stats = MovieRepo::aggregate(&state.db, pipelines::by_year()).await?;

    let message = format!("Aggregated statistics for {} years.", stats.len());
    Ok(Json(SuccessBody::new(stats, message)))
}

/// GET /api/v1/movies/aggregate/directors
pub async fn directors(
    State(state): State<AppState>,
    Query(params): Query<DirectorsParams>,
) -> AppResult<Json<SuccessBody<Vec<Document>>>> {
    validate_params(&params)?;
    let limit = params.limit.unwrap_or(pipelines::DEFAULT_DIRECTORS_LIMIT);

    let stats = MovieRepo::aggregate(&state.db, pipelines::directors(limit)).await?;

    let message = format!("Aggregated statistics for {} directors.", stats.len());
    Ok(Json(SuccessBody::new(stats, message)))
}

/// GET /api/v1/movies/aggregate/recent-commented
pub async fn recent_commented(
    State(state): State<AppState>,
    Query(params): Query<RecentCommentedParams>,
) -> AppResult<Json<SuccessBody<Vec<Document>>>> {
    validate_params(&params)?;

    let movie_id = params
        .movie_id
        .as_deref()
        .map(parse_object_id)
        .transpose()?;
    let per_movie = params.limit.unwrap_or(pipelines::DEFAULT_RECENT_COMMENTS);

    let movies =
        MovieRepo::aggregate(&state.db, pipelines::recent_commented(movie_id, per_movie)).await?;

    let message = format!("Found {} recently commented movies.", movies.len());
    Ok(Json(SuccessBody::new(movies, message)))
}
