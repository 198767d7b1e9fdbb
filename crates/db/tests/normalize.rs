//! Tests for the read-side document normalizer.

use assert_matches::assert_matches;
use mflix_db::normalize::normalize_movie;
use mongodb::bson::{doc, oid::ObjectId, Bson};

#[test]
fn object_id_is_rendered_as_hex_string() {
    let id = ObjectId::new();
    let doc = normalize_movie(doc! { "_id": id, "title": "A" });

    assert_eq!(doc.get_str("_id").unwrap(), id.to_hex());
}

#[test]
fn integer_year_is_left_untouched() {
    let doc = normalize_movie(doc! { "title": "A", "year": 1995 });
    assert_eq!(doc.get("year"), Some(&Bson::Int32(1995)));

    let doc = normalize_movie(doc! { "title": "A", "year": 1995_i64 });
    assert_eq!(doc.get("year"), Some(&Bson::Int64(1995)));
}

#[test]
fn dirty_string_year_is_repaired_to_its_digits() {
    // Real legacy value from the dataset.
    let doc = normalize_movie(doc! { "title": "A", "year": "1995è" });
    assert_eq!(doc.get("year"), Some(&Bson::Int32(1995)));
}

#[test]
fn digitless_year_becomes_null() {
    let doc = normalize_movie(doc! { "title": "A", "year": "unknown" });
    assert_matches!(doc.get("year"), Some(Bson::Null));
}

#[test]
fn overflowing_digit_string_becomes_null() {
    let doc = normalize_movie(doc! { "title": "A", "year": "99999999999999" });
    assert_matches!(doc.get("year"), Some(Bson::Null));
}

#[test]
fn double_year_is_coerced_to_integer() {
    let doc = normalize_movie(doc! { "title": "A", "year": 1995.0 });
    assert_eq!(doc.get("year"), Some(&Bson::Int32(1995)));
}

#[test]
fn missing_year_stays_missing() {
    let doc = normalize_movie(doc! { "title": "A" });
    assert!(doc.get("year").is_none());
}

#[test]
fn null_year_normalizes_to_null() {
    let doc = normalize_movie(doc! { "title": "A", "year": Bson::Null });
    assert_matches!(doc.get("year"), Some(Bson::Null));
}
