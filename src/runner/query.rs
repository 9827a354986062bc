//! The catalogue of operations the runner knows how to issue.

use crate::connection::{BookStore, EXECUTION_STATS_VERBOSITY, FindBooksOptions};
use crate::error::Result;
use crate::models::{AuthorCount, DecadeCount, GenreAverage, PricedTitle, sample_books};
use crate::runner::report::{self, Report};
use crate::runner::requests::{self, SortOrder};

pub const DEFAULT_RECENT_AFTER_YEAR: i32 = 2010;
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// One store request plus the way its result is reported.
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    BooksByGenre { genre: String },
    BooksByAuthor { author: String },
    BookByTitle { title: String },
    RecentInStock { after_year: i32 },
    Projection,
    SortByPrice { order: SortOrder },
    Page { page: u64, page_size: u64 },
    UpdatePrice { title: String, price: f64 },
    DeleteByTitle { title: String },
    AveragePriceByGenre,
    TopAuthor,
    BooksByDecade,
    CreateTitleIndex,
    CreateAuthorYearIndex,
    ListIndexes,
    ExplainTitleSearch { title: String },
    ExplainAuthorYearSearch { author: String, year: i32 },
    Seed { reset: bool },
}

impl Query {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Query::BooksByGenre { .. } => "books-by-genre",
            Query::BooksByAuthor { .. } => "books-by-author",
            Query::BookByTitle { .. } => "book-by-title",
            Query::RecentInStock { .. } => "recent-in-stock",
            Query::Projection => "projection",
            Query::SortByPrice { .. } => "sort-by-price",
            Query::Page { .. } => "page",
            Query::UpdatePrice { .. } => "update-price",
            Query::DeleteByTitle { .. } => "delete-by-title",
            Query::AveragePriceByGenre => "average-price-by-genre",
            Query::TopAuthor => "top-author",
            Query::BooksByDecade => "books-by-decade",
            Query::CreateTitleIndex => "create-title-index",
            Query::CreateAuthorYearIndex => "create-author-year-index",
            Query::ListIndexes => "list-indexes",
            Query::ExplainTitleSearch { .. } => "explain-title-search",
            Query::ExplainAuthorYearSearch { .. } => "explain-author-year-search",
            Query::Seed { .. } => "seed",
        }
    }

    /// Prefix of the error line logged when the operation fails.
    pub fn failure_context(&self) -> &'static str {
        match self {
            Query::BooksByGenre { .. }
            | Query::BooksByAuthor { .. }
            | Query::BookByTitle { .. }
            | Query::Projection
            | Query::SortByPrice { .. }
            | Query::Page { .. } => "Error fetching books",
            Query::RecentInStock { .. } => "Error querying books",
            Query::UpdatePrice { .. } => "Error updating book price",
            Query::DeleteByTitle { .. } => "Error deleting book",
            Query::AveragePriceByGenre | Query::TopAuthor | Query::BooksByDecade => {
                "Error aggregating books"
            }
            Query::CreateTitleIndex | Query::CreateAuthorYearIndex => "Error creating index",
            Query::ListIndexes => "Error listing indexes",
            Query::ExplainTitleSearch { .. } | Query::ExplainAuthorYearSearch { .. } => {
                "Error explaining query"
            }
            Query::Seed { .. } => "Error seeding books",
        }
    }

    /// Issue the request against an open store and build its report.
    pub async fn execute(&self, store: &BookStore) -> Result<Report> {
        let report = match self {
            Query::BooksByGenre { genre } => {
                let opts = FindBooksOptions::filtered(requests::genre_filter(genre));
                report::books_by_genre(genre, &store.find_books(opts).await?)
            }
            Query::BooksByAuthor { author } => {
                let opts = FindBooksOptions::filtered(requests::author_filter(author));
                report::books_by_author(author, &store.find_books(opts).await?)
            }
            Query::BookByTitle { title } => {
                let opts = FindBooksOptions::filtered(requests::title_filter(title));
                report::books_by_title(title, &store.find_books(opts).await?)
            }
            Query::RecentInStock { after_year } => {
                let opts =
                    FindBooksOptions::filtered(requests::recent_in_stock_filter(*after_year));
                report::recent_in_stock(*after_year, &store.find_books(opts).await?)
            }
            Query::Projection => {
                let opts = FindBooksOptions {
                    projection: Some(requests::title_author_price_projection()),
                    ..FindBooksOptions::default()
                };
                report::projection(&store.find_as::<PricedTitle>(opts).await?)
            }
            Query::SortByPrice { order } => {
                let opts = FindBooksOptions {
                    projection: Some(requests::title_price_projection()),
                    sort: Some(requests::price_sort(*order)),
                    ..FindBooksOptions::default()
                };
                report::sorted_by_price(*order, &store.find_as::<PricedTitle>(opts).await?)
            }
            Query::Page { page, page_size } => {
                let (skip, limit) = requests::page_window(*page, *page_size)?;
                let opts = FindBooksOptions {
                    projection: Some(requests::title_author_price_projection()),
                    sort: Some(requests::page_sort()),
                    skip: Some(skip),
                    limit: Some(limit),
                    ..FindBooksOptions::default()
                };
                report::page(*page, &store.find_as::<PricedTitle>(opts).await?)
            }
            Query::UpdatePrice { title, price } => {
                let result = store.update_price(title, *price).await?;
                report::price_update(title, *price, result.matched_count)
            }
            Query::DeleteByTitle { title } => {
                let result = store.delete_by_title(title).await?;
                report::deletion(title, result.deleted_count)
            }
            Query::AveragePriceByGenre => {
                let pipeline = requests::average_price_by_genre_pipeline();
                report::average_price_by_genre(&store.aggregate_as::<GenreAverage>(pipeline).await?)
            }
            Query::TopAuthor => {
                let pipeline = requests::top_author_pipeline();
                report::top_author(&store.aggregate_as::<AuthorCount>(pipeline).await?)
            }
            Query::BooksByDecade => {
                let pipeline = requests::books_by_decade_pipeline();
                report::books_by_decade(&store.aggregate_as::<DecadeCount>(pipeline).await?)
            }
            Query::CreateTitleIndex => {
                let name = store.create_index(requests::title_index_keys()).await?;
                report::index_created(false, &name)
            }
            Query::CreateAuthorYearIndex => {
                let name = store.create_index(requests::author_year_index_keys()).await?;
                report::index_created(true, &name)
            }
            Query::ListIndexes => {
                report::index_list(store.collection_name(), &store.list_indexes().await?)
            }
            Query::ExplainTitleSearch { title } => {
                let explain = store
                    .explain_find(requests::title_filter(title), EXECUTION_STATS_VERBOSITY)
                    .await?;
                report::execution_stats("title search", &explain)
            }
            Query::ExplainAuthorYearSearch { author, year } => {
                let filter = requests::author_year_filter(author, *year);
                let explain = store.explain_find(filter, EXECUTION_STATS_VERBOSITY).await?;
                report::execution_stats("author + year search", &explain)
            }
            Query::Seed { reset } => {
                let inserted = store.insert_books(sample_books(), *reset).await?;
                report::seeded(store.collection_name(), inserted)
            }
        };
        Ok(report)
    }

    /// The full catalogue in its fixed demonstration order.
    ///
    /// Later entries read records that earlier entries update and delete, so the
    /// order must be kept when running them.
    pub fn demo_sequence() -> Vec<Query> {
        vec![
            Query::BooksByGenre { genre: "Dystopian".into() },
            Query::BooksByAuthor { author: "Harper Lee".into() },
            Query::UpdatePrice { title: "The Hobbit".into(), price: 15.99 },
            Query::DeleteByTitle { title: "The Catcher in the Rye".into() },
            Query::RecentInStock { after_year: DEFAULT_RECENT_AFTER_YEAR },
            Query::Projection,
            Query::SortByPrice { order: SortOrder::Ascending },
            Query::SortByPrice { order: SortOrder::Descending },
            Query::Page { page: 1, page_size: DEFAULT_PAGE_SIZE },
            Query::Page { page: 2, page_size: DEFAULT_PAGE_SIZE },
            Query::AveragePriceByGenre,
            Query::TopAuthor,
            Query::BooksByDecade,
            Query::CreateTitleIndex,
            Query::CreateAuthorYearIndex,
            Query::ExplainTitleSearch { title: "The Hobbit".into() },
            Query::ExplainAuthorYearSearch { author: "Harper Lee".into(), year: 1960 },
        ]
    }
}
