//! MongoDB connection handling and store requests.
//!
//! This module provides:
//! - `manager`: the `Connector` seam, `with_connection` and the Mongo-backed `BookStore`
//! - `ops`: one request per method (documents, aggregation, indexes, explain)
//! - `types`: shared request options

pub mod manager;
pub mod ops;
pub mod types;

pub use manager::{BookStore, Connector, MongoConnector, with_connection};
pub use types::{EXECUTION_STATS_VERBOSITY, FindBooksOptions};
