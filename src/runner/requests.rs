//! Filters, projections, sorts and pipelines for every query archetype.

use mongodb::bson::{Document, doc};

use crate::error::{Error, Result};

/// Direction of the price sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn direction(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

pub fn genre_filter(genre: &str) -> Document {
    doc! { "genre": genre }
}

pub fn author_filter(author: &str) -> Document {
    doc! { "author": author }
}

pub fn title_filter(title: &str) -> Document {
    doc! { "title": title }
}

pub fn author_year_filter(author: &str, year: i32) -> Document {
    doc! { "author": author, "published_year": year }
}

/// In stock and published strictly after `after_year`.
pub fn recent_in_stock_filter(after_year: i32) -> Document {
    doc! { "in_stock": true, "published_year": { "$gt": after_year } }
}

pub fn title_author_price_projection() -> Document {
    doc! { "title": 1, "author": 1, "price": 1, "_id": 0 }
}

pub fn title_price_projection() -> Document {
    doc! { "title": 1, "price": 1, "_id": 0 }
}

/// Equal prices fall back to `title`, then `_id`, in the same direction, so the
/// descending listing is the exact reverse of the ascending one.
pub fn price_sort(order: SortOrder) -> Document {
    let d = order.direction();
    doc! { "price": d, "title": d, "_id": d }
}

/// Stable order for paging; `_id` breaks ties between equal titles.
pub fn page_sort() -> Document {
    doc! { "title": 1, "_id": 1 }
}

/// `(skip, limit)` for a 1-based page number.
pub fn page_window(page: u64, page_size: u64) -> Result<(u64, i64)> {
    if page == 0 {
        return Err(Error::InvalidArgument("page numbers start at 1".into()));
    }
    if page_size == 0 {
        return Err(Error::InvalidArgument("page size must be at least 1".into()));
    }

    let skip = (page - 1)
        .checked_mul(page_size)
        .ok_or_else(|| Error::InvalidArgument(format!("page {page} is out of range")))?;
    let limit = i64::try_from(page_size)
        .map_err(|_| Error::InvalidArgument(format!("page size {page_size} is too large")))?;
    Ok((skip, limit))
}

/// Average price per genre, most expensive genre first.
pub fn average_price_by_genre_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$genre", "avgPrice": { "$avg": "$price" } } },
        doc! { "$sort": { "avgPrice": -1, "_id": 1 } },
    ]
}

/// The single author with the most books; ties go to the alphabetically first name.
pub fn top_author_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$author", "bookCount": { "$sum": 1 } } },
        doc! { "$sort": { "bookCount": -1, "_id": 1 } },
        doc! { "$limit": 1 },
    ]
}

/// Count per decade, where decade = floor(published_year / 10) * 10.
pub fn books_by_decade_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$addFields": {
                "decade": {
                    "$multiply": [ { "$floor": { "$divide": ["$published_year", 10] } }, 10 ]
                }
            }
        },
        doc! { "$group": { "_id": "$decade", "count": { "$sum": 1 } } },
        doc! { "$sort": { "_id": 1 } },
    ]
}

pub fn title_index_keys() -> Document {
    doc! { "title": 1 }
}

pub fn author_year_index_keys() -> Document {
    doc! { "author": 1, "published_year": -1 }
}
