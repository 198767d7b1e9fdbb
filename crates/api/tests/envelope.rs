//! Tests for the success envelope shape.

use mflix_api::response::{utc_timestamp, Pagination, SuccessBody};

#[test]
fn success_envelope_wraps_data_with_flag_and_timestamp() {
    let body = SuccessBody::new(vec![1, 2, 3], "Found 3 movies.");
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Found 3 movies.");
    assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn pagination_is_omitted_unless_set() {
    let body = SuccessBody::new((), "ok");
    let json = serde_json::to_value(&body).unwrap();

    assert!(json.get("pagination").is_none());
}

#[test]
fn pagination_is_serialized_when_present() {
    let body = SuccessBody::new((), "ok").with_pagination(Pagination {
        page: 2,
        limit: 20,
        total: 45,
        pages: 3,
    });
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["limit"], 20);
    assert_eq!(json["pagination"]["total"], 45);
    assert_eq!(json["pagination"]["pages"], 3);
}

#[test]
fn timestamp_is_strict_utc_with_single_z() {
    let timestamp = utc_timestamp();

    assert!(timestamp.ends_with('Z'));
    assert!(!timestamp.ends_with("ZZ"));
    assert!(!timestamp.contains("+00:00"));
}
