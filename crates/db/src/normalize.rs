//! Best-effort repair of documents coming back from the store.

use mongodb::bson::{Bson, Document};

/// Make a raw movie document client-safe.
///
/// - `_id` is rendered as its hex string form.
/// - A `year` that is not already an integer is repaired by stripping all
///   non-digit characters from its string form and parsing; if nothing
///   parseable remains, `year` becomes null. Legacy data contains values
///   like `"1995è"`, so this must never fail.
pub fn normalize_movie(mut doc: Document) -> Document {
    if let Some(oid) = doc.get("_id").and_then(Bson::as_object_id) {
        doc.insert("_id", oid.to_hex());
    }
    if let Some(repaired) = repaired_year(doc.get("year")) {
        doc.insert("year", repaired);
    }
    doc
}

/// `Some(replacement)` when the stored year needs repairing, `None` when it
/// is absent or already an integer.
fn repaired_year(year: Option<&Bson>) -> Option<Bson> {
    let raw = match year {
        None | Some(Bson::Int32(_)) | Some(Bson::Int64(_)) => return None,
        Some(Bson::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    Some(digits.parse::<i32>().map(Bson::from).unwrap_or(Bson::Null))
}
