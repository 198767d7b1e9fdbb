//! Filter and pagination/sort construction for the list endpoint.
//!
//! Both builders are pure: they turn loosely-typed query parameters into
//! immutable BSON values and never talk to the store.

use mongodb::bson::{doc, Document};

/// Default sort field when none is supplied.
pub const DEFAULT_SORT_FIELD: &str = "title";
/// Default page size.
pub const DEFAULT_LIMIT: i64 = 20;
/// Hard page-size ceiling.
pub const MAX_LIMIT: i64 = 100;

/// Optional list-endpoint filter parameters.
///
/// Each supplied parameter contributes at most one key to the filter
/// document; an empty `MovieFilter` matches every document.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Full-text search over the indexed text fields (title/plot/fullplot).
    pub q: Option<String>,
    /// Case-insensitive substring match on `title`.
    pub title: Option<String>,
    /// Case-insensitive substring match on `genres`.
    pub genre: Option<String>,
    /// Exact match on `year`.
    pub year: Option<i32>,
    /// Lower bound on `imdb.rating`.
    pub min_rating: Option<f64>,
    /// Upper bound on `imdb.rating`.
    pub max_rating: Option<f64>,
}

impl MovieFilter {
    /// Build the filter document. Blank (whitespace-only) text parameters
    /// are treated as absent; min/max rating merge into a single range.
    pub fn into_document(self) -> Document {
        let mut filter = Document::new();

        if let Some(q) = non_blank(self.q.as_deref()) {
            filter.insert("$text", doc! { "$search": q });
        }
        if let Some(title) = non_blank(self.title.as_deref()) {
            filter.insert("title", doc! { "$regex": title, "$options": "i" });
        }
        if let Some(genre) = non_blank(self.genre.as_deref()) {
            filter.insert("genres", doc! { "$regex": genre, "$options": "i" });
        }
        if let Some(year) = self.year {
            filter.insert("year", year);
        }
        if self.min_rating.is_some() || self.max_rating.is_some() {
            let mut range = Document::new();
            if let Some(min) = self.min_rating {
                range.insert("$gte", min);
            }
            if let Some(max) = self.max_rating {
                range.insert("$lte", max);
            }
            filter.insert("imdb.rating", range);
        }

        filter
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolved sort and cursor bounds for one page of results.
#[derive(Debug, Clone)]
pub struct PageSpec {
    pub sort: Document,
    pub skip: u64,
    pub limit: i64,
}

/// Resolve sort/skip/limit parameters into a [`PageSpec`].
///
/// "desc" (any case) sorts descending; every other token, including absence,
/// falls through to ascending. Limit is clamped to [1, 100], skip to >= 0.
pub fn resolve_page(
    sort_by: Option<&str>,
    sort_order: Option<&str>,
    skip: Option<i64>,
    limit: Option<i64>,
) -> PageSpec {
    let field = non_blank(sort_by).unwrap_or(DEFAULT_SORT_FIELD);
    let order = if sort_order.is_some_and(|o| o.eq_ignore_ascii_case("desc")) {
        -1
    } else {
        1
    };

    let mut sort = Document::new();
    sort.insert(field, order);

    PageSpec {
        sort,
        skip: skip.unwrap_or(0).max(0) as u64,
        limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
    }
}
