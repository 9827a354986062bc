//! Predefined MongoDB queries, aggregations and index operations over a
//! bookstore collection, each run on its own short-lived connection.

pub mod config;
pub mod connection;
pub mod console;
pub mod error;
pub mod helpers;
pub mod models;
pub mod runner;
