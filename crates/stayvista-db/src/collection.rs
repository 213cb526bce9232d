use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::document::{
    DeleteResult, Filter, ID_FIELD, InsertOneResult, Projection, Update, UpdateOptions, UpdateResult,
};
use crate::error::StoreError;
use crate::store::DocumentStore;

/// Typed handle on one named collection.
///
/// Reads deserialize into `T`; writes accept anything serializable so create
/// payloads without an `_id` can be inserted directly. Multi-document reads
/// skip documents that do not decode and log them.
pub struct Collection<T> {
    store: Arc<dyn DocumentStore>,
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            name: self.name,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection").field("name", &self.name).finish()
    }
}

impl<T> Collection<T>
where
    T: DeserializeOwned,
{
    pub fn new(store: Arc<dyn DocumentStore>, name: &'static str) -> Self {
        Self {
            store,
            name,
            _marker: PhantomData,
        }
    }

    pub async fn find(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let documents = self.store.find(self.name, filter, None).await?;
        Ok(decode_all(self.name, documents))
    }

    /// Finds with a projection, decoding into a narrower shape `P`.
    pub async fn find_projected<P: DeserializeOwned>(
        &self,
        filter: &Filter,
        projection: &Projection,
    ) -> Result<Vec<P>, StoreError> {
        let documents = self.store.find(self.name, filter, Some(projection)).await?;
        Ok(decode_all(self.name, documents))
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        match self.store.find_one(self.name, filter).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    pub async fn insert_one<D: Serialize + ?Sized>(
        &self,
        document: &D,
    ) -> Result<InsertOneResult, StoreError> {
        let document = serde_json::to_value(document)?;
        self.store.insert_one(self.name, document).await
    }

    pub async fn update_one(
        &self,
        filter: &Filter,
        update: &Update,
        options: UpdateOptions,
    ) -> Result<UpdateResult, StoreError> {
        self.store
            .update_one(self.name, filter, update, options)
            .await
    }

    pub async fn delete_one(&self, filter: &Filter) -> Result<DeleteResult, StoreError> {
        self.store.delete_one(self.name, filter).await
    }

    pub async fn count_documents(&self, filter: &Filter) -> Result<u64, StoreError> {
        self.store.count_documents(self.name, filter).await
    }
}

fn decode_all<P: DeserializeOwned>(collection: &str, documents: Vec<Value>) -> Vec<P> {
    documents
        .into_iter()
        .filter_map(|document| {
            let id = document.get(ID_FIELD).cloned().unwrap_or(Value::Null);
            match serde_json::from_value(document) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    tracing::warn!(collection, id = %id, error = %e, "Skipping malformed document");
                    None
                }
            }
        })
        .collect()
}
