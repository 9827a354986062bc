//! Book fixtures for integration tests.

#![allow(dead_code)]

use bookshelf_query::models::Book;

/// Small catalogue with known genres, authors, prices and years.
pub fn small_catalogue() -> Vec<Book> {
    vec![
        Book::new("1984", "George Orwell", "Dystopian", 1949, 10.99, true),
        Book::new("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, false),
        Book::new("Brave New World", "Aldous Huxley", "Dystopian", 1932, 11.50, false),
        Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 14.99, true),
        Book::new("The Martian", "Andy Weir", "Science Fiction", 2011, 15.99, false),
        Book::new("Project Hail Mary", "Andy Weir", "Science Fiction", 2021, 18.99, true),
        Book::new("The Midnight Library", "Matt Haig", "Fiction", 2020, 16.99, true),
    ]
}

/// Books sharing prices, so ordering by price alone is ambiguous.
pub fn tied_prices() -> Vec<Book> {
    vec![
        Book::new("1984", "George Orwell", "Dystopian", 1949, 10.99, true),
        Book::new("The Alchemist", "Paulo Coelho", "Fiction", 1988, 10.99, true),
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Classic", 1925, 9.99, true),
        Book::new("Wuthering Heights", "Emily Bronte", "Classic", 1847, 9.99, false),
        Book::new("Twin A", "Same Author", "Fiction", 2000, 12.00, true),
        Book::new("Twin A", "Same Author", "Fiction", 2000, 12.00, true),
        Book::new("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, false),
    ]
}

/// Books whose years sit on and around decade boundaries.
pub fn decade_boundaries() -> Vec<Book> {
    vec![
        Book::new("Late Nineties", "A", "Fiction", 1995, 10.0, true),
        Book::new("Turn of the Century", "B", "Fiction", 2000, 10.0, true),
        Book::new("Still the Noughties", "C", "Fiction", 2009, 10.0, true),
    ]
}

/// `count` books with distinct prices 1.00, 2.00, ... and zero-padded titles.
pub fn numbered_books(count: usize) -> Vec<Book> {
    (1..=count)
        .map(|i| {
            Book::new(&format!("Book {i:02}"), "Series Author", "Series", 2000, i as f64, true)
        })
        .collect()
}
