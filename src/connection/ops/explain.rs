//! Explain command for find queries.

use log::debug;
use mongodb::bson::{Document, doc};

use crate::connection::manager::BookStore;
use crate::error::Result;

impl BookStore {
    /// Run explain for a `find` on the books collection using the given verbosity.
    pub async fn explain_find(&self, filter: Document, verbosity: &str) -> Result<Document> {
        let mut find_cmd = doc! { "find": self.collection_name() };
        if !filter.is_empty() {
            find_cmd.insert("filter", filter);
        }

        let command = doc! {
            "explain": find_cmd,
            "verbosity": verbosity,
        };
        debug!("explain {command}");
        let explain = self.database().run_command(command).await?;
        Ok(explain)
    }
}
