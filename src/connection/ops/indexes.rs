//! Index operations for the books collection.

use log::debug;
use mongodb::IndexModel;
use mongodb::bson::Document;

use crate::connection::manager::BookStore;
use crate::error::Result;

impl BookStore {
    /// List indexes for the collection
    pub async fn list_indexes(&self) -> Result<Vec<IndexModel>> {
        use futures::TryStreamExt;

        let cursor = self.documents().list_indexes().await?;
        let indexes: Vec<IndexModel> = cursor.try_collect().await?;
        Ok(indexes)
    }

    /// Create an index on `keys` and return the server-assigned name.
    ///
    /// Creating an index that already exists with the same keys is a no-op on the server.
    pub async fn create_index(&self, keys: Document) -> Result<String> {
        debug!("createIndex {} keys={keys}", self.collection_name());
        let model = IndexModel::builder().keys(keys).build();
        let result = self.documents().create_index(model).await?;
        Ok(result.index_name)
    }
}
