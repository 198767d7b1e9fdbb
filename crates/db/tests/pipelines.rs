//! Shape tests for the aggregation pipeline builders.

use mflix_db::pipelines;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

/// Find the single stage with the given operator, panicking on 0 or >1.
fn stage<'p>(pipeline: &'p [Document], operator: &str) -> &'p Document {
    let mut matches = pipeline.iter().filter(|s| s.contains_key(operator));
    let found = matches
        .next()
        .unwrap_or_else(|| panic!("no {operator} stage"));
    assert!(matches.next().is_none(), "more than one {operator} stage");
    found.get_document(operator).unwrap()
}

// ---------------------------------------------------------------------------
// by-genre
// ---------------------------------------------------------------------------

#[test]
fn by_genre_excludes_dirty_years_up_front() {
    let pipeline = pipelines::by_genre();

    let first = pipeline[0].get_document("$match").unwrap();
    assert_eq!(
        first.get_document("year").unwrap(),
        &doc! { "$type": "number", "$gte": 1800, "$lte": 2030 }
    );
}

#[test]
fn by_genre_unwinds_groups_and_sorts_by_count() {
    let pipeline = pipelines::by_genre();

    assert_eq!(pipeline[1], doc! { "$unwind": "$genres" });

    let group = stage(&pipeline, "$group");
    assert_eq!(group.get_str("_id").unwrap(), "$genres");
    assert!(group.contains_key("movieCount"));
    assert!(group.contains_key("averageRating"));
    assert!(group.contains_key("minYear"));
    assert!(group.contains_key("maxYear"));
    assert!(group.contains_key("totalVotes"));

    assert_eq!(stage(&pipeline, "$sort"), &doc! { "movieCount": -1 });

    let project = stage(&pipeline, "$project");
    assert_eq!(project.get_str("genre").unwrap(), "$_id");
}

// ---------------------------------------------------------------------------
// by-year
// ---------------------------------------------------------------------------

#[test]
fn by_year_guards_rating_aggregates_with_is_number() {
    let pipeline = pipelines::by_year();
    let group = stage(&pipeline, "$group");

    // A document with a non-numeric rating must still be counted but must
    // not contribute to the rating aggregates.
    let guarded = doc! { "$cond": [{ "$isNumber": "$imdb.rating" }, "$imdb.rating", Bson::Null] };
    assert_eq!(
        group.get_document("averageRating").unwrap(),
        &doc! { "$avg": guarded.clone() }
    );
    assert_eq!(
        group.get_document("highestRating").unwrap(),
        &doc! { "$max": guarded.clone() }
    );
    assert_eq!(
        group.get_document("lowestRating").unwrap(),
        &doc! { "$min": guarded }
    );
    assert_eq!(group.get_document("movieCount").unwrap(), &doc! { "$sum": 1 });
}

#[test]
fn by_year_sorts_years_descending() {
    let pipeline = pipelines::by_year();
    assert_eq!(stage(&pipeline, "$sort"), &doc! { "_id": -1 });
}

// ---------------------------------------------------------------------------
// directors
// ---------------------------------------------------------------------------

#[test]
fn directors_requires_non_empty_array_and_drops_blank_names() {
    let pipeline = pipelines::directors(10);

    let first = pipeline[0].get_document("$match").unwrap();
    assert_eq!(
        first.get_document("directors").unwrap(),
        &doc! { "$exists": true, "$type": "array", "$ne": [] }
    );

    // Post-unwind match drops null and empty names.
    let post_unwind = pipeline[2].get_document("$match").unwrap();
    assert_eq!(
        post_unwind.get_document("directors").unwrap(),
        &doc! { "$nin": [Bson::Null, ""] }
    );
}

#[test]
fn directors_limit_is_applied_and_clamped() {
    let pipeline = pipelines::directors(25);
    assert!(pipeline.contains(&doc! { "$limit": 25_i64 }));

    let clamped = pipelines::directors(1000);
    assert!(clamped.contains(&doc! { "$limit": 100_i64 }));

    let clamped_low = pipelines::directors(0);
    assert!(clamped_low.contains(&doc! { "$limit": 1_i64 }));
}

// ---------------------------------------------------------------------------
// recent-commented
// ---------------------------------------------------------------------------

#[test]
fn recent_commented_joins_comments_and_drops_uncommented_movies() {
    let pipeline = pipelines::recent_commented(None, 10);

    let lookup = stage(&pipeline, "$lookup");
    assert_eq!(lookup.get_str("from").unwrap(), "comments");
    assert_eq!(lookup.get_str("localField").unwrap(), "_id");
    assert_eq!(lookup.get_str("foreignField").unwrap(), "movie_id");

    let keep_commented = stage(&pipeline, "$match");
    assert_eq!(
        keep_commented.get_document("comments.0").unwrap(),
        &doc! { "$exists": true }
    );
}

#[test]
fn recent_commented_trims_comments_per_movie() {
    let pipeline = pipelines::recent_commented(None, 5);
    let set = stage(&pipeline, "$set");

    let slice = set
        .get_document("recentComments")
        .unwrap()
        .get_array("$slice")
        .unwrap();
    assert_eq!(slice[1], Bson::Int64(5));
}

#[test]
fn recent_commented_per_movie_trim_is_clamped_to_fifty() {
    let pipeline = pipelines::recent_commented(None, 500);
    let set = stage(&pipeline, "$set");

    let slice = set
        .get_document("recentComments")
        .unwrap()
        .get_array("$slice")
        .unwrap();
    assert_eq!(slice[1], Bson::Int64(50));
}

#[test]
fn recent_commented_ceiling_depends_on_id_filter() {
    let unfiltered = pipelines::recent_commented(None, 10);
    assert!(unfiltered.contains(&doc! { "$limit": 50_i64 }));

    let filtered = pipelines::recent_commented(Some(ObjectId::new()), 10);
    assert!(filtered.contains(&doc! { "$limit": 20_i64 }));
}

#[test]
fn recent_commented_id_filter_is_the_first_stage() {
    let id = ObjectId::new();
    let pipeline = pipelines::recent_commented(Some(id), 10);

    assert_eq!(pipeline[0], doc! { "$match": { "_id": id } });
}

#[test]
fn recent_commented_projects_a_reduced_comment_shape() {
    let pipeline = pipelines::recent_commented(None, 10);
    let project = stage(&pipeline, "$project");

    assert_eq!(
        project.get_document("_id").unwrap(),
        &doc! { "$toString": "$_id" }
    );
    // The newest-comment date drives the sort but is not part of the output.
    assert!(!project.contains_key("lastCommentDate"));
    assert_eq!(project.len(), 4);

    let mapped = project
        .get_document("recentComments")
        .unwrap()
        .get_document("$map")
        .unwrap();
    let shape = mapped.get_document("in").unwrap();
    assert!(shape.contains_key("name"));
    assert!(shape.contains_key("email"));
    assert!(shape.contains_key("text"));
    assert!(shape.contains_key("date"));
}
