use mongodb::bson::Document;

/// Explain verbosity that includes per-stage execution counters and timing.
pub const EXECUTION_STATS_VERBOSITY: &str = "executionStats";

/// Options for a single `find` against the books collection
#[derive(Clone, Debug, Default)]
pub struct FindBooksOptions {
    pub filter: Option<Document>,
    pub sort: Option<Document>,
    pub projection: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl FindBooksOptions {
    pub fn filtered(filter: Document) -> Self {
        Self { filter: Some(filter), ..Self::default() }
    }
}
