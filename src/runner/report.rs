//! Turn store results into console lines.
//!
//! Every builder follows the same rule: a non-empty result prints a count or
//! header line and one line per record, an empty result prints a single
//! "not found" line and never a count.

use mongodb::IndexModel;
use mongodb::bson::Document;

use crate::helpers::{format_number, format_price};
use crate::models::{AuthorCount, Book, DecadeCount, GenreAverage, PricedTitle};
use crate::runner::explain::{self, ExecutionSummary};
use crate::runner::requests::SortOrder;

/// What the operation found, independent of the wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStatus {
    /// The request matched this many records or groups.
    Matched(usize),
    /// Nothing matched.
    NotFound,
    /// A write or admin request completed.
    Done,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    status: ReportStatus,
    lines: Vec<String>,
}

impl Report {
    fn matched(header: String, details: Vec<String>) -> Self {
        let count = details.len();
        let mut lines = Vec::with_capacity(count + 1);
        lines.push(header);
        lines.extend(details);
        Self { status: ReportStatus::Matched(count), lines }
    }

    fn not_found(message: String) -> Self {
        Self { status: ReportStatus::NotFound, lines: vec![message] }
    }

    fn done(lines: Vec<String>) -> Self {
        Self { status: ReportStatus::Done, lines }
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 { singular.to_string() } else { plural.to_string() }
}

pub fn books_by_genre(genre: &str, books: &[Book]) -> Report {
    if books.is_empty() {
        return Report::not_found(format!("No books found in the genre \"{genre}\"."));
    }
    Report::matched(
        format!("Found {} books in the genre \"{genre}\":", books.len()),
        books.iter().map(|b| format!("- {} by {}", b.title, b.author)).collect(),
    )
}

pub fn books_by_author(author: &str, books: &[Book]) -> Report {
    if books.is_empty() {
        return Report::not_found(format!("No books by \"{author}\"."));
    }
    let word = plural(books.len(), "book", "books");
    Report::matched(
        format!("Found {} {word} by \"{author}\":", books.len()),
        books.iter().map(|b| format!("- \"{}\"  {}", b.title, b.published_year)).collect(),
    )
}

pub fn books_by_title(title: &str, books: &[Book]) -> Report {
    if books.is_empty() {
        return Report::not_found(format!("No book found with title \"{title}\"."));
    }
    let word = plural(books.len(), "book", "books");
    Report::matched(
        format!("Found {} {word} titled \"{title}\":", books.len()),
        books
            .iter()
            .map(|b| {
                format!(
                    "- \"{}\" by {} ({}), {}, ${}, {}",
                    b.title,
                    b.author,
                    b.published_year,
                    b.genre,
                    format_price(b.price),
                    if b.in_stock { "in stock" } else { "out of stock" }
                )
            })
            .collect(),
    )
}

pub fn recent_in_stock(after_year: i32, books: &[Book]) -> Report {
    if books.is_empty() {
        return Report::not_found("No matching books found.".to_string());
    }
    Report::matched(
        format!("Found {} in-stock books published after {after_year}:", books.len()),
        books.iter().map(|b| format!("- \"{}\" ({})", b.title, b.published_year)).collect(),
    )
}

fn title_author_price_line(book: &PricedTitle) -> String {
    format!(
        "{} - {} (${})",
        book.title,
        book.author.as_deref().unwrap_or("Unknown author"),
        format_price(book.price)
    )
}

pub fn projection(books: &[PricedTitle]) -> Report {
    if books.is_empty() {
        return Report::not_found("No books found.".to_string());
    }
    Report::matched(
        "Books (title, author, price):".to_string(),
        books.iter().map(title_author_price_line).collect(),
    )
}

pub fn sorted_by_price(order: SortOrder, books: &[PricedTitle]) -> Report {
    if books.is_empty() {
        return Report::not_found("No books found.".to_string());
    }
    Report::matched(
        format!("Books sorted by price ({}):", order.label()),
        books.iter().map(|b| format!("{} - ${}", b.title, format_price(b.price))).collect(),
    )
}

pub fn page(page: u64, books: &[PricedTitle]) -> Report {
    if books.is_empty() {
        return Report::not_found(format!("No books found on page {page}."));
    }
    Report::matched(
        format!("Page {page} (showing {} book(s)):", books.len()),
        books.iter().map(title_author_price_line).collect(),
    )
}

pub fn price_update(title: &str, price: f64, matched_count: u64) -> Report {
    if matched_count == 0 {
        return Report::not_found(format!("No book found with title \"{title}\"."));
    }
    Report::done(vec![format!("Updated price of \"{title}\" to ${}", format_price(price))])
}

pub fn deletion(title: &str, deleted_count: u64) -> Report {
    if deleted_count == 0 {
        return Report::not_found(format!("No book found with title \"{title}\"."));
    }
    Report::done(vec![format!("Deleted book with title \"{title}\".")])
}

pub fn average_price_by_genre(rows: &[GenreAverage]) -> Report {
    if rows.is_empty() {
        return Report::not_found("No genres found.".to_string());
    }
    Report::matched(
        "Average price by genre:".to_string(),
        rows.iter()
            .map(|row| {
                let genre = row.genre.as_deref().unwrap_or("Unknown genre");
                match row.avg_price {
                    Some(avg) => format!("{genre}: ${}", format_price(avg)),
                    None => format!("{genre}: no prices"),
                }
            })
            .collect(),
    )
}

pub fn top_author(rows: &[AuthorCount]) -> Report {
    let Some(top) = rows.first() else {
        return Report::not_found("No authors found.".to_string());
    };
    let author = top.author.as_deref().unwrap_or("Unknown author");
    let word = if top.book_count == 1 { "book" } else { "books" };
    Report {
        status: ReportStatus::Matched(1),
        lines: vec![format!("Author with most books: {author} ({} {word})", top.book_count)],
    }
}

pub fn books_by_decade(rows: &[DecadeCount]) -> Report {
    if rows.is_empty() {
        return Report::not_found("No books found.".to_string());
    }
    Report::matched(
        "Books grouped by decade:".to_string(),
        rows.iter()
            .map(|row| match row.decade {
                Some(decade) => format!("{decade:.0}s: {} book(s)", row.count),
                None => format!("Unknown decade: {} book(s)", row.count),
            })
            .collect(),
    )
}

pub fn index_created(compound: bool, index_name: &str) -> Report {
    let label = if compound { "Compound index created" } else { "Index created" };
    Report::done(vec![format!("{label}: {index_name}")])
}

pub fn index_list(collection: &str, indexes: &[IndexModel]) -> Report {
    if indexes.is_empty() {
        return Report::not_found(format!("No indexes on \"{collection}\"."));
    }
    Report::matched(
        format!("Indexes on {collection}:"),
        indexes
            .iter()
            .map(|index| {
                let name = index.options.as_ref().and_then(|o| o.name.as_deref()).unwrap_or("?");
                format!("- {name} {}", index.keys)
            })
            .collect(),
    )
}

fn optional_count(value: Option<u64>) -> String {
    value.map(format_number).unwrap_or_else(|| "n/a".to_string())
}

fn summary_lines(summary: &ExecutionSummary) -> Vec<String> {
    let mut lines = vec![match &summary.index_name {
        Some(index) => format!("Stage: {} (index {index})", summary.stage_path()),
        None => format!("Stage: {}", summary.stage_path()),
    }];
    lines.push(format!("Returned: {}", optional_count(summary.n_returned)));
    lines.push(format!("Documents examined: {}", optional_count(summary.docs_examined)));
    lines.push(format!("Keys examined: {}", optional_count(summary.keys_examined)));
    lines.push(format!(
        "Execution time: {}",
        summary.execution_time_ms.map_or_else(|| "n/a".to_string(), |ms| format!("{ms} ms"))
    ));
    lines
}

pub fn execution_stats(label: &str, explain_doc: &Document) -> Report {
    let (Some(summary), Some(stats)) =
        (explain::summarize(explain_doc), explain::execution_stats(explain_doc))
    else {
        return Report::not_found(format!("No execution stats returned for {label}."));
    };

    let mut lines = vec![format!("Execution stats for {label}:")];
    lines.extend(summary_lines(&summary));
    lines.extend(explain::to_pretty_json(stats).lines().map(ToString::to_string));
    Report::done(lines)
}

pub fn seeded(collection: &str, inserted: usize) -> Report {
    Report::done(vec![format!("Inserted {inserted} books into \"{collection}\".")])
}
