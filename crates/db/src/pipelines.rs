//! Aggregation pipeline builders.
//!
//! Each builder returns the full stage list for one analytical endpoint.
//! All four run through [`MovieRepo::aggregate`](crate::repositories::MovieRepo::aggregate).
//! Documents with a non-numeric or out-of-range year are dirty legacy data
//! and are excluded up front.

use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

/// Oldest year considered valid.
pub const MIN_VALID_YEAR: i32 = 1800;
/// Newest year considered valid.
pub const MAX_VALID_YEAR: i32 = 2030;

/// Default number of director rows returned.
pub const DEFAULT_DIRECTORS_LIMIT: i64 = 20;
/// Default number of recent comments kept per movie.
pub const DEFAULT_RECENT_COMMENTS: i64 = 10;
/// Ceiling on recent comments kept per movie.
pub const MAX_RECENT_COMMENTS: i64 = 50;

// Result ceilings for the recent-commented pipeline. These cap the number
// of movies returned and are distinct from the per-movie comment trim.
const RECENT_MOVIES_CEILING_FILTERED: i64 = 20;
const RECENT_MOVIES_CEILING: i64 = 50;

fn sane_year_match() -> Document {
    doc! { "$match": {
        "year": { "$type": "number", "$gte": MIN_VALID_YEAR, "$lte": MAX_VALID_YEAR },
    } }
}

/// Per-genre stats: movie count, average rating, year span, total votes.
pub fn by_genre() -> Vec<Document> {
    vec![
        sane_year_match(),
        doc! { "$unwind": "$genres" },
        doc! { "$group": {
            "_id": "$genres",
            "movieCount": { "$sum": 1 },
            "averageRating": { "$avg": "$imdb.rating" },
            "minYear": { "$min": "$year" },
            "maxYear": { "$max": "$year" },
            "totalVotes": { "$sum": "$imdb.votes" },
        } },
        doc! { "$sort": { "movieCount": -1 } },
        doc! { "$project": {
            "_id": 0,
            "genre": "$_id",
            "movieCount": 1,
            "averageRating": { "$round": ["$averageRating", 2] },
            "minYear": 1,
            "maxYear": 1,
            "totalVotes": 1,
        } },
    ]
}

/// Per-year stats. Rating aggregates only consider documents whose rating
/// is actually numeric; absent/empty/non-numeric ratings are mapped to null
/// (which `$avg`/`$max`/`$min` ignore) while `movieCount` still counts the
/// document.
pub fn by_year() -> Vec<Document> {
    let numeric_rating =
        doc! { "$cond": [{ "$isNumber": "$imdb.rating" }, "$imdb.rating", Bson::Null] };

    vec![
        sane_year_match(),
        doc! { "$group": {
            "_id": "$year",
            "movieCount": { "$sum": 1 },
            "averageRating": { "$avg": numeric_rating.clone() },
            "highestRating": { "$max": numeric_rating.clone() },
            "lowestRating": { "$min": numeric_rating },
            "totalVotes": { "$sum": "$imdb.votes" },
        } },
        doc! { "$sort": { "_id": -1 } },
        doc! { "$project": {
            "_id": 0,
            "year": "$_id",
            "movieCount": 1,
            "averageRating": { "$round": ["$averageRating", 2] },
            "highestRating": 1,
            "lowestRating": 1,
            "totalVotes": 1,
        } },
    ]
}

/// Per-director stats over movies with a non-empty `directors` array,
/// capped at `limit` rows (clamped to [1, 100]).
pub fn directors(limit: i64) -> Vec<Document> {
    let limit = limit.clamp(1, 100);

    vec![
        doc! { "$match": { "directors": { "$exists": true, "$type": "array", "$ne": [] } } },
        doc! { "$unwind": "$directors" },
        doc! { "$match": { "directors": { "$nin": [Bson::Null, ""] } } },
        doc! { "$group": {
            "_id": "$directors",
            "movieCount": { "$sum": 1 },
            "averageRating": { "$avg": "$imdb.rating" },
        } },
        doc! { "$sort": { "movieCount": -1 } },
        doc! { "$limit": limit },
        doc! { "$project": {
            "_id": 0,
            "director": "$_id",
            "movieCount": 1,
            "averageRating": { "$round": ["$averageRating", 2] },
        } },
    ]
}

/// Movies joined to their most recent comments.
///
/// Keeps the `per_movie` newest comments per movie (clamped to
/// [1, [`MAX_RECENT_COMMENTS`]]), drops movies without comments, and orders
/// movies by their newest comment. The newest-comment date is only used for
/// ordering and is not part of the output shape. The number of movies
/// returned is capped at 20 when a specific `movie_id` was supplied and 50
/// otherwise.
pub fn recent_commented(movie_id: Option<ObjectId>, per_movie: i64) -> Vec<Document> {
    let per_movie = per_movie.clamp(1, MAX_RECENT_COMMENTS);
    let ceiling = if movie_id.is_some() {
        RECENT_MOVIES_CEILING_FILTERED
    } else {
        RECENT_MOVIES_CEILING
    };

    let mut pipeline = Vec::new();
    if let Some(id) = movie_id {
        pipeline.push(doc! { "$match": { "_id": id } });
    }

    pipeline.extend([
        doc! { "$lookup": {
            "from": "comments",
            "localField": "_id",
            "foreignField": "movie_id",
            "as": "comments",
        } },
        doc! { "$match": { "comments.0": { "$exists": true } } },
        doc! { "$set": {
            "totalComments": { "$size": "$comments" },
            "recentComments": { "$slice": [
                { "$sortArray": { "input": "$comments", "sortBy": { "date": -1 } } },
                per_movie,
            ] },
            "lastCommentDate": { "$max": "$comments.date" },
        } },
        doc! { "$sort": { "lastCommentDate": -1 } },
        doc! { "$limit": ceiling },
        doc! { "$project": {
            "_id": { "$toString": "$_id" },
            "title": 1,
            "totalComments": 1,
            "recentComments": { "$map": {
                "input": "$recentComments",
                "as": "comment",
                "in": {
                    "name": "$$comment.name",
                    "email": "$$comment.email",
                    "text": "$$comment.text",
                    "date": "$$comment.date",
                },
            } },
        } },
    ]);

    pipeline
}
