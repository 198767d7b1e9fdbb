//! MongoDB access layer for the movies backend.
//!
//! Exposes connection helpers, the movie entity and request DTOs, the
//! filter/sort builders, the read-side document normalizer, the aggregation
//! pipeline builders, and the repository layer that executes them.

pub mod models;
pub mod normalize;
pub mod pipelines;
pub mod query;
pub mod repositories;

use mflix_core::error::CoreError;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Database};

/// Connect to the MongoDB deployment at `uri` and select `db_name`.
///
/// The returned [`Database`] handle is cheaply cloneable and shares one
/// underlying connection pool.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(db_name))
}

/// Round-trip a `ping` command to verify the deployment is reachable.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Parse a client-supplied hex id into an [`ObjectId`].
///
/// A malformed id is a validation fault, never a store round trip.
pub fn parse_object_id(id: &str) -> Result<ObjectId, CoreError> {
    ObjectId::parse_str(id).map_err(|_| CoreError::validation("Invalid movie ID format"))
}
