//! Route definitions for the `/movies` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{aggregations, movies};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                             -> list
/// POST   /                             -> create
/// PATCH  /                             -> update_batch
/// DELETE /                             -> delete_batch
/// POST   /batch                        -> create_batch
///
/// GET    /aggregate/by-genre           -> by_genre
/// GET    /aggregate/by-year            -> by_year
/// GET    /aggregate/directors          -> directors
/// GET    /aggregate/recent-commented   -> recent_commented
///
/// GET    /{id}                         -> get_by_id
/// PATCH  /{id}                         -> update
/// DELETE /{id}                         -> delete
/// DELETE /{id}/find-and-delete         -> find_and_delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(movies::list)
                .post(movies::create)
                .patch(movies::update_batch)
                .delete(movies::delete_batch),
        )
        .route("/batch", post(movies::create_batch))
        .route("/aggregate/by-genre", get(aggregations::by_genre))
        .route("/aggregate/by-year", get(aggregations::by_year))
        .route("/aggregate/directors", get(aggregations::directors))
        .route(
            "/aggregate/recent-commented",
            get(aggregations::recent_commented),
        )
        .route(
            "/{id}",
            get(movies::get_by_id)
                .patch(movies::update)
                .delete(movies::delete),
        )
        .route("/{id}/find-and-delete", delete(movies::find_and_delete))
}
