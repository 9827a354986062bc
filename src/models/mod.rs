// Data structures and types

pub mod book;
mod catalogue;
pub mod summary;

pub use book::{Book, PricedTitle};
pub use catalogue::sample_books;
pub use summary::{AuthorCount, DecadeCount, GenreAverage};
