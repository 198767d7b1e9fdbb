//! Repository for the `movies` collection.

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::results::{InsertManyResult, UpdateResult};
use mongodb::{Collection, Database};

use crate::normalize::normalize_movie;
use crate::query::PageSpec;

const COLLECTION: &str = "movies";

/// Provides CRUD and aggregation operations for movies.
///
/// Every method that returns documents runs them through
/// [`normalize_movie`] so callers never see raw ids or dirty year values.
pub struct MovieRepo;

impl MovieRepo {
    fn collection(db: &Database) -> Collection<Document> {
        db.collection(COLLECTION)
    }

    /// Find movies matching `filter`, sorted and paginated per `page`.
    pub async fn find(
        db: &Database,
        filter: Document,
        page: &PageSpec,
    ) -> Result<Vec<Document>, mongodb::error::Error> {
        let mut cursor = Self::collection(db)
            .find(filter)
            .sort(page.sort.clone())
            .skip(page.skip)
            .limit(page.limit)
            .await?;

        let mut movies = Vec::new();
        while let Some(movie) = cursor.try_next().await? {
            movies.push(normalize_movie(movie));
        }
        Ok(movies)
    }

    /// Find one movie by id.
    pub async fn find_by_id(
        db: &Database,
        id: ObjectId,
    ) -> Result<Option<Document>, mongodb::error::Error> {
        Ok(Self::collection(db)
            .find_one(doc! { "_id": id })
            .await?
            .map(normalize_movie))
    }

    /// Count movies matching `filter`.
    pub async fn count(db: &Database, filter: Document) -> Result<u64, mongodb::error::Error> {
        Self::collection(db).count_documents(filter).await
    }

    /// Insert one movie document, returning the storage-assigned id.
    pub async fn insert_one(
        db: &Database,
        movie: Document,
    ) -> Result<Bson, mongodb::error::Error> {
        Ok(Self::collection(db).insert_one(movie).await?.inserted_id)
    }

    /// Insert many movie documents in one call.
    pub async fn insert_many(
        db: &Database,
        movies: Vec<Document>,
    ) -> Result<InsertManyResult, mongodb::error::Error> {
        Self::collection(db).insert_many(movies).await
    }

    /// Apply `fields` as a `$set` to the movie with the given id.
    pub async fn update_one(
        db: &Database,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateResult, mongodb::error::Error> {
        Self::collection(db)
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await
    }

    /// Apply `fields` as a `$set` to every movie matching `filter`.
    pub async fn update_many(
        db: &Database,
        filter: Document,
        fields: Document,
    ) -> Result<UpdateResult, mongodb::error::Error> {
        Self::collection(db)
            .update_many(filter, doc! { "$set": fields })
            .await
    }

    /// Delete one movie by id. Returns the deleted count (0 or 1).
    pub async fn delete_one(db: &Database, id: ObjectId) -> Result<u64, mongodb::error::Error> {
        let result = Self::collection(db).delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    /// Delete every movie matching `filter`. Returns the deleted count.
    pub async fn delete_many(
        db: &Database,
        filter: Document,
    ) -> Result<u64, mongodb::error::Error> {
        let result = Self::collection(db).delete_many(filter).await?;
        Ok(result.deleted_count)
    }

    /// Atomically fetch and remove the movie with the given id.
    ///
    /// Atomicity is the store's native `findOneAndDelete`; no other
    /// mutation can observe the document between fetch and delete.
    pub async fn find_one_and_delete(
        db: &Database,
        id: ObjectId,
    ) -> Result<Option<Document>, mongodb::error::Error> {
        Ok(Self::collection(db)
            .find_one_and_delete(doc! { "_id": id })
            .await?
            .map(normalize_movie))
    }

    /// Run an aggregation pipeline and collect the full result set.
    pub async fn aggregate(
        db: &Database,
        pipeline: Vec<Document>,
    ) -> Result<Vec<Document>, mongodb::error::Error> {
        tracing::debug!(stages = pipeline.len(), "running aggregation pipeline");
        let cursor = Self::collection(db).aggregate(pipeline).await?;
        cursor.try_collect().await
    }
}
