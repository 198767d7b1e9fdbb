//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mongodb::bson::{Bson, Document};
use serde::Deserialize;
use serde_json::json;

use mflix_core::error::CoreError;
use mflix_db::models::movie::{CreateMovieRequest, Movie, UpdateMovieRequest};
use mflix_db::query::MovieFilter;
use mflix_db::repositories::MovieRepo;
use mflix_db::{parse_object_id, query};

use crate::error::{AppError, AppResult};
use crate::query::{validate_params, ListMoviesParams};
use crate::response::{Pagination, SuccessBody};
use crate::state::AppState;

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessBody<Document>>> {
    let id = parse_object_id(&id)?;

    let movie = MovieRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Movie" })?;

    Ok(Json(SuccessBody::new(movie, "Movie retrieved successfully.")))
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> AppResult<Json<SuccessBody<Vec<Document>>>> {
    validate_params(&params)?;

    let filter = MovieFilter {
        q: params.q,
        title: params.title,
        genre: params.genre,
        year: params.year,
        min_rating: params.min_rating,
        max_rating: params.max_rating,
    }
    .into_document();
    let page = query::resolve_page(
        params.sort_by.as_deref(),
        params.sort_order.as_deref(),
        params.skip,
        params.limit,
    );

    let movies = MovieRepo::find(&state.db, filter.clone(), &page).await?;
    let total = MovieRepo::count(&state.db, filter).await?;

    let pagination = Pagination {
        page: page.skip as i64 / page.limit + 1,
        limit: page.limit,
        total,
        pages: total.div_ceil(page.limit as u64),
    };

    let message = format!("Found {} movies.", movies.len());
    Ok(Json(SuccessBody::new(movies, message).with_pagination(pagination)))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateMovieRequest>,
) -> AppResult<(StatusCode, Json<SuccessBody<Document>>)> {
    if request.title.trim().is_empty() {
        return Err(CoreError::validation("Title is required").into());
    }

    let document = Movie::from(request)
        .into_document()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let inserted_id = MovieRepo::insert_one(&state.db, document).await?;
    let id = inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::Internal("inserted id was not an ObjectId".into()))?;

    // Read-after-write so the response carries storage-assigned defaults.
    let movie = MovieRepo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to retrieve created movie".into()))?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(movie, "Movie created successfully.")),
    ))
}

/// POST /api/v1/movies/batch
pub async fn create_batch(
    State(state): State<AppState>,
    Json(requests): Json<Vec<CreateMovieRequest>>,
) -> AppResult<(StatusCode, Json<SuccessBody<serde_json::Value>>)> {
    if requests.is_empty() {
        return Err(
            CoreError::validation("Request body must be a non-empty array of movie objects")
                .into(),
        );
    }
    for (index, request) in requests.iter().enumerate() {
        if request.title.trim().is_empty() {
            return Err(
                CoreError::Validation(format!("Movie at index {index}: Title is required")).into(),
            );
        }
    }

    let documents = requests
        .into_iter()
        .map(|request| Movie::from(request).into_document())
        .collect::<Result<Vec<Document>, _>>()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let result = MovieRepo::insert_many(&state.db, documents).await?;

    // The driver keys inserted ids by insertion index.
    let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
    ids.sort_by_key(|(index, _)| *index);
    let inserted_ids: Vec<String> = ids
        .into_iter()
        .filter_map(|(_, id)| id.as_object_id().map(|oid| oid.to_hex()))
        .collect();

    let message = format!("{} movies created successfully.", inserted_ids.len());
    let data = json!({
        "insertedCount": inserted_ids.len(),
        "insertedIds": inserted_ids,
    });

    Ok((StatusCode::CREATED, Json(SuccessBody::new(data, message))))
}

/// PATCH /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMovieRequest>,
) -> AppResult<Json<SuccessBody<Document>>> {
    let id = parse_object_id(&id)?;

    let fields = request
        .into_set_document()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if fields.is_empty() {
        return Err(CoreError::validation("No update data provided").into());
    }

    let result = MovieRepo::update_one(&state.db, id, fields).await?;
    if result.matched_count == 0 {
        return Err(CoreError::NotFound { entity: "Movie" }.into());
    }

    let movie = MovieRepo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to retrieve updated movie".into()))?;

    Ok(Json(SuccessBody::new(movie, "Movie updated successfully.")))
}

/// Request body for `PATCH /movies`: a filter document plus the fields to
/// set on every matching document. The filter is passed to the store as-is,
/// so dotted paths and range operators (e.g. `{"imdb.rating": {"$lte": 2}}`)
/// work the same as in a native query.
#[derive(Debug, Deserialize)]
pub struct BatchUpdateBody {
    pub filter: Document,
    pub update: UpdateMovieRequest,
}

/// PATCH /api/v1/movies
pub async fn update_batch(
    State(state): State<AppState>,
    Json(body): Json<BatchUpdateBody>,
) -> AppResult<Json<SuccessBody<serde_json::Value>>> {
    let fields = body
        .update
        .into_set_document()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if body.filter.is_empty() {
        return Err(CoreError::validation("Filter object cannot be empty").into());
    }
    if fields.is_empty() {
        return Err(CoreError::validation("Update object cannot be empty").into());
    }

    let result = MovieRepo::update_many(&state.db, body.filter, fields).await?;

    let data = json!({
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
    });
    Ok(Json(SuccessBody::new(data, "Movies updated successfully.")))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessBody<serde_json::Value>>> {
    let id = parse_object_id(&id)?;

    let deleted_count = MovieRepo::delete_one(&state.db, id).await?;
    if deleted_count == 0 {
        return Err(CoreError::NotFound { entity: "Movie" }.into());
    }

    let data = json!({ "deletedCount": deleted_count });
    Ok(Json(SuccessBody::new(data, "Movie deleted successfully.")))
}

/// DELETE /api/v1/movies
///
/// The body is the filter document itself, passed to the store as-is.
pub async fn delete_batch(
    State(state): State<AppState>,
    Json(filter): Json<Document>,
) -> AppResult<Json<SuccessBody<serde_json::Value>>> {
    // An empty filter would match the whole collection.
    if filter.is_empty() {
        return Err(CoreError::validation(
            "Filter object is required and cannot be empty. This prevents accidental deletion of all documents.",
        )
        .into());
    }

    let deleted_count = MovieRepo::delete_many(&state.db, filter).await?;

    let data = json!({ "deletedCount": deleted_count });
    Ok(Json(SuccessBody::new(data, "Movies deleted successfully.")))
}

/// DELETE /api/v1/movies/{id}/find-and-delete
pub async fn find_and_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessBody<Document>>> {
    let id = parse_object_id(&id)?;

    let movie = MovieRepo::find_one_and_delete(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Movie" })?;

    Ok(Json(SuccessBody::new(movie, "Movie deleted successfully.")))
}
