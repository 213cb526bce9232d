//! In-process document store.
//!
//! Collections are insertion-ordered vectors behind a tokio `RwLock`. Each
//! call takes the lock once, which gives the same single-document atomicity
//! the PostgreSQL backend provides.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::UNIQUE_INDEXES;
use crate::document::{
    DeleteResult, Filter, ID_FIELD, InsertOneResult, Projection, Update, UpdateOptions,
    UpdateResult,
};
use crate::error::StoreError;
use crate::store::{DocumentStore, new_id};

type Document = Map<String, Value>;

#[derive(Debug)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    unique_indexes: Vec<(String, String)>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            unique_indexes: UNIQUE_INDEXES
                .iter()
                .map(|(collection, field)| (collection.to_string(), field.to_string()))
                .collect(),
        }
    }

    fn check_unique(
        &self,
        collection: &str,
        documents: &[Document],
        candidate: &Document,
        skip: Option<usize>,
    ) -> Result<(), StoreError> {
        for (indexed, field) in &self.unique_indexes {
            if indexed != collection {
                continue;
            }
            let Some(value) = candidate.get(field).filter(|v| !v.is_null()) else {
                continue;
            };
            let clash = documents
                .iter()
                .enumerate()
                .any(|(i, doc)| Some(i) != skip && doc.get(field) == Some(value));
            if clash {
                return Err(StoreError::DuplicateKey {
                    collection: collection.to_string(),
                    field: field.clone(),
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| {
                let value = Value::Object(doc.clone());
                match projection {
                    Some(projection) => projection.apply(value),
                    None => value,
                }
            })
            .collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|doc| filter.matches(doc))
                .map(|doc| Value::Object(doc.clone()))
        }))
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<InsertOneResult, StoreError> {
        let Value::Object(mut document) = document else {
            return Err(StoreError::NotAnObject);
        };

        let id = match document.get(ID_FIELD).and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => new_id(),
        };
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if documents
            .iter()
            .any(|doc| doc.get(ID_FIELD).and_then(Value::as_str) == Some(id.as_str()))
        {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                field: ID_FIELD.to_string(),
            });
        }
        self.check_unique(collection, documents, &document, None)?;

        documents.push(document);

        Ok(InsertOneResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        update: &Update,
        options: UpdateOptions,
    ) -> Result<UpdateResult, StoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if let Some(index) = documents.iter().position(|doc| filter.matches(doc)) {
            let mut updated = documents[index].clone();
            let modified = update.apply(&mut updated);
            if modified {
                self.check_unique(collection, documents, &updated, Some(index))?;
                documents[index] = updated;
            }
            return Ok(UpdateResult::matched(modified));
        }

        if !options.upsert {
            return Ok(UpdateResult::unmatched());
        }

        let mut seeded = filter.to_document();
        update.apply(&mut seeded);
        let id = new_id();
        seeded.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        self.check_unique(collection, documents, &seeded, None)?;
        documents.push(seeded);

        Ok(UpdateResult::upserted(id))
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write().await;
        let deleted_count = match collections.get_mut(collection) {
            Some(documents) => match documents.iter().position(|doc| filter.matches(doc)) {
                Some(index) => {
                    documents.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn count_documents(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| documents.iter().filter(|doc| filter.matches(doc)).count() as u64)
            .unwrap_or(0))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
