//! Connection acquisition and the scoped acquire/run/release helper.

use std::future::Future;

use log::{debug, info, warn};
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};

use crate::config::RunnerConfig;
use crate::error::Result;
use crate::models::Book;

/// Something that hands out a connection handle and takes it back.
pub trait Connector {
    type Handle: Clone;

    /// Open and verify a connection.
    fn acquire(&self) -> impl Future<Output = Result<Self::Handle>>;

    /// Close a handle obtained from [`Connector::acquire`].
    fn release(&self, handle: Self::Handle) -> impl Future<Output = ()>;
}

/// Acquire a handle, run `op` with it, and release the handle exactly once.
///
/// The release happens whether `op` succeeds or fails. When acquisition fails
/// `op` is never called and there is nothing to release.
pub async fn with_connection<C, T, F, Fut>(connector: &C, op: F) -> Result<T>
where
    C: Connector,
    F: FnOnce(C::Handle) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let handle = connector.acquire().await?;
    let result = op(handle.clone()).await;
    connector.release(handle).await;
    result
}

/// Handle to the configured books collection on an open client.
#[derive(Clone)]
pub struct BookStore {
    client: Client,
    books: Collection<Book>,
}

impl BookStore {
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let books = client.database(database).collection::<Book>(collection);
        Self { client, books }
    }

    pub fn books(&self) -> &Collection<Book> {
        &self.books
    }

    /// Same collection without the typed `Book` mapping.
    pub fn documents(&self) -> Collection<Document> {
        self.books.clone_with_type()
    }

    pub fn database(&self) -> Database {
        self.client.database(self.books.namespace().db.as_str())
    }

    pub fn collection_name(&self) -> &str {
        self.books.name()
    }
}

/// Connects to the MongoDB deployment named by a [`RunnerConfig`].
pub struct MongoConnector {
    config: RunnerConfig,
}

impl MongoConnector {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }
}

impl Connector for MongoConnector {
    type Handle = BookStore;

    async fn acquire(&self) -> Result<BookStore> {
        debug!("Connecting to {}", self.config.display_target());
        let client = Client::with_uri_str(&self.config.uri).await?;

        // Ping to verify connection; a client that fails here is still shut down.
        if let Err(err) = client.database("admin").run_command(doc! { "ping": 1 }).await {
            warn!("Ping failed for {}", self.config.display_target());
            client.shutdown().await;
            return Err(err.into());
        }

        info!("Connected to {}", self.config.display_target());
        Ok(BookStore::new(client, &self.config.database, &self.config.collection))
    }

    async fn release(&self, handle: BookStore) {
        handle.client.shutdown().await;
        info!("Connection closed for {}", self.config.display_target());
    }
}
