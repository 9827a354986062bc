//! Find, update, delete and insert requests against the books collection.

use log::debug;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::results::{DeleteResult, UpdateResult};
use serde::de::DeserializeOwned;

use crate::connection::manager::BookStore;
use crate::connection::types::FindBooksOptions;
use crate::error::Result;
use crate::models::Book;

impl BookStore {
    /// Find full book records.
    pub async fn find_books(&self, opts: FindBooksOptions) -> Result<Vec<Book>> {
        self.find_as::<Book>(opts).await
    }

    /// Find and deserialize into `T`; used with projections that return partial records.
    pub async fn find_as<T>(&self, opts: FindBooksOptions) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        use futures::TryStreamExt;

        let filter = opts.filter.unwrap_or_default();
        debug!("find {} filter={filter}", self.collection_name());

        let mut options = FindOptions::default();
        options.skip = opts.skip;
        options.limit = opts.limit;
        options.sort = opts.sort;
        options.projection = opts.projection;

        let coll = self.books().clone_with_type::<T>();
        let cursor = coll.find(filter).with_options(options).await?;
        let documents: Vec<T> = cursor.try_collect().await?;
        Ok(documents)
    }

    /// Set the price of the first book matching `title`.
    pub async fn update_price(&self, title: &str, price: f64) -> Result<UpdateResult> {
        debug!("updateOne {} title={title:?} price={price}", self.collection_name());
        let result = self
            .documents()
            .update_one(doc! { "title": title }, doc! { "$set": { "price": price } })
            .await?;
        Ok(result)
    }

    /// Delete the first book matching `title`.
    pub async fn delete_by_title(&self, title: &str) -> Result<DeleteResult> {
        debug!("deleteOne {} title={title:?}", self.collection_name());
        let result = self.documents().delete_one(doc! { "title": title }).await?;
        Ok(result)
    }

    /// Insert books, optionally dropping the collection first.
    pub async fn insert_books(&self, books: Vec<Book>, reset: bool) -> Result<usize> {
        if reset {
            debug!("drop {}", self.collection_name());
            self.books().drop().await?;
        }
        if books.is_empty() {
            return Ok(0);
        }

        debug!("insertMany {} count={}", self.collection_name(), books.len());
        let result = self.books().insert_many(books).await?;
        Ok(result.inserted_ids.len())
    }
}
