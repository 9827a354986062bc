// Rows produced by the aggregation pipelines

use serde::{Deserialize, Serialize};

/// `$group` by genre with the average price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAverage {
    #[serde(rename = "_id")]
    pub genre: Option<String>,
    #[serde(rename = "avgPrice")]
    pub avg_price: Option<f64>,
}

/// `$group` by author with the number of books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorCount {
    #[serde(rename = "_id")]
    pub author: Option<String>,
    #[serde(rename = "bookCount")]
    pub book_count: i64,
}

/// `$group` by derived decade with the number of books.
///
/// The decade comes back as a double because `$floor` keeps the input's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeCount {
    #[serde(rename = "_id")]
    pub decade: Option<f64>,
    pub count: i64,
}
