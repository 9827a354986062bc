//! Aggregation pipeline requests.

use log::debug;
use mongodb::bson::Document;
use serde::de::DeserializeOwned;

use crate::connection::manager::BookStore;
use crate::error::Result;

impl BookStore {
    /// Run a pipeline and deserialize each output document into `T`.
    pub async fn aggregate_as<T>(&self, pipeline: Vec<Document>) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        use futures::TryStreamExt;

        debug!("aggregate {} stages={}", self.collection_name(), pipeline.len());
        let cursor = self.documents().aggregate(pipeline).with_type::<T>().await?;
        let rows: Vec<T> = cursor.try_collect().await?;
        Ok(rows)
    }
}
