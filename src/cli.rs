use clap::{Parser, Subcommand, ValueEnum};

use bookshelf_query::runner::query::{DEFAULT_PAGE_SIZE, DEFAULT_RECENT_AFTER_YEAR};
use bookshelf_query::runner::{Query, SortOrder};

/// Predefined queries over the bookstore collection
#[derive(Parser, Debug)]
#[command(name = "bookshelf-query", version, about = "Run predefined bookstore queries")]
pub struct Cli {
    /// Connection URI (overrides config file and BOOKSHELF_URI)
    #[arg(long, global = true)]
    pub uri: Option<String>,
    /// Database name (overrides config file and BOOKSHELF_DATABASE)
    #[arg(long, global = true)]
    pub database: Option<String>,
    /// Collection name (overrides config file and BOOKSHELF_COLLECTION)
    #[arg(long, global = true)]
    pub collection: Option<String>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Order {
    Asc,
    Desc,
}

impl From<Order> for SortOrder {
    fn from(value: Order) -> Self {
        match value {
            Order::Asc => SortOrder::Ascending,
            Order::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Books in a genre
    Genre { genre: String },
    /// Books by an author
    Author { author: String },
    /// Books with an exact title
    Title { title: String },
    /// In-stock books published after a year
    Recent {
        #[arg(long, default_value_t = DEFAULT_RECENT_AFTER_YEAR)]
        after: i32,
    },
    /// Title, author and price of every book
    Projection,
    /// Books sorted by price
    SortPrice {
        #[arg(long, value_enum, default_value_t = Order::Asc)]
        order: Order,
    },
    /// One page of books ordered by title
    Page {
        #[arg(default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u64,
    },
    /// Set the price of the book with this title
    UpdatePrice { title: String, price: f64 },
    /// Delete the book with this title
    Delete { title: String },
    /// Average price per genre
    AvgPrice,
    /// Author with the most books
    TopAuthor,
    /// Book counts per publication decade
    Decades,
    /// Create the ascending index on title
    IndexTitle,
    /// Create the compound index author asc, published_year desc
    IndexAuthorYear,
    /// List indexes on the collection
    Indexes,
    /// Execution stats for a title search
    ExplainTitle { title: String },
    /// Execution stats for an author + year search
    ExplainAuthorYear { author: String, year: i32 },
    /// Insert the sample catalogue
    Seed {
        /// Drop the collection first
        #[arg(long)]
        reset: bool,
    },
    /// Run the whole catalogue in its fixed order
    Demo,
}

impl Cmd {
    pub fn into_queries(self) -> Vec<Query> {
        let query = match self {
            Cmd::Genre { genre } => Query::BooksByGenre { genre },
            Cmd::Author { author } => Query::BooksByAuthor { author },
            Cmd::Title { title } => Query::BookByTitle { title },
            Cmd::Recent { after } => Query::RecentInStock { after_year: after },
            Cmd::Projection => Query::Projection,
            Cmd::SortPrice { order } => Query::SortByPrice { order: order.into() },
            Cmd::Page { page, size } => Query::Page { page, page_size: size },
            Cmd::UpdatePrice { title, price } => Query::UpdatePrice { title, price },
            Cmd::Delete { title } => Query::DeleteByTitle { title },
            Cmd::AvgPrice => Query::AveragePriceByGenre,
            Cmd::TopAuthor => Query::TopAuthor,
            Cmd::Decades => Query::BooksByDecade,
            Cmd::IndexTitle => Query::CreateTitleIndex,
            Cmd::IndexAuthorYear => Query::CreateAuthorYearIndex,
            Cmd::Indexes => Query::ListIndexes,
            Cmd::ExplainTitle { title } => Query::ExplainTitleSearch { title },
            Cmd::ExplainAuthorYear { author, year } => {
                Query::ExplainAuthorYearSearch { author, year }
            }
            Cmd::Seed { reset } => Query::Seed { reset },
            Cmd::Demo => return Query::demo_sequence(),
        };
        vec![query]
    }
}
