//! Movie entity and request DTOs.
//!
//! Every optional field carries `skip_serializing_if` so that absent fields
//! never reach the store as explicit nulls. Converting a DTO to a BSON
//! document therefore drops unset/null fields, which is what gives update
//! bodies their partial semantics.

use mongodb::bson::{self, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Award counts as stored in the `awards` subdocument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Awards {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominations: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// IMDB metadata as stored in the `imdb` subdocument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Imdb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

/// A movie document. `title` is the only required field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullplot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<bson::DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<Awards>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<Imdb>,
}

impl Movie {
    /// Serialize into a BSON document, dropping all unset fields.
    pub fn into_document(self) -> Result<Document, bson::ser::Error> {
        bson::to_document(&self)
    }
}

/// Request body for creating a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub year: Option<i32>,
    pub plot: Option<String>,
    pub fullplot: Option<String>,
    pub genres: Option<Vec<String>>,
    pub directors: Option<Vec<String>>,
    pub writers: Option<Vec<String>>,
    pub cast: Option<Vec<String>>,
    pub countries: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub rated: Option<String>,
    pub runtime: Option<i32>,
    pub poster: Option<String>,
}

impl From<CreateMovieRequest> for Movie {
    fn from(request: CreateMovieRequest) -> Self {
        Movie {
            id: None,
            title: request.title,
            year: request.year,
            plot: request.plot,
            fullplot: request.fullplot,
            released: None,
            runtime: request.runtime,
            poster: request.poster,
            genres: request.genres,
            directors: request.directors,
            writers: request.writers,
            cast: request.cast,
            countries: request.countries,
            languages: request.languages,
            rated: request.rated,
            awards: None,
            imdb: None,
        }
    }
}

/// Request body for a partial update. All fields optional; fields that are
/// absent or explicitly null in the request are dropped before the `$set`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMovieRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullplot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl UpdateMovieRequest {
    /// The effective `$set` field document. Empty when no field survived
    /// the null/absent strip.
    pub fn into_set_document(self) -> Result<Document, bson::ser::Error> {
        bson::to_document(&self)
    }
}

