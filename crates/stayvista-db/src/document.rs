//! Query and update vocabulary shared by every backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::StoreError;

/// Name of the identifier field on every document.
pub const ID_FIELD: &str = "_id";

/// A conjunction of equality predicates over dotted field paths.
///
/// `Filter::new().eq("host.email", "a@x.com")` matches documents whose nested
/// `host.email` equals `"a@x.com"`. The empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    predicates: Map<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new().eq(ID_FIELD, id.into())
    }

    pub fn eq(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicates.insert(path.into(), value.into());
        self
    }

    pub fn matches(&self, document: &Map<String, Value>) -> bool {
        self.predicates
            .iter()
            .all(|(path, expected)| lookup(document, path) == Some(expected))
    }

    /// Nested object equivalent of the filter: `{"host.email": v}` becomes
    /// `{"host": {"email": v}}`. Used for JSONB containment and upsert seeds.
    pub fn to_document(&self) -> Map<String, Value> {
        let mut document = Map::new();
        for (path, value) in &self.predicates {
            insert_path(&mut document, path, value.clone());
        }
        document
    }
}

/// `$set` of top-level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    set: Map<String, Value>,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set.insert(field.into(), value.into());
        self
    }

    /// Sets every field `value` serializes to. `null` fields and `_id` are skipped.
    pub fn set_fields<T: Serialize + ?Sized>(value: &T) -> Result<Self, StoreError> {
        let Value::Object(fields) = serde_json::to_value(value)? else {
            return Err(StoreError::NotAnObject);
        };

        let set = fields
            .into_iter()
            .filter(|(field, value)| field != ID_FIELD && !value.is_null())
            .collect();

        Ok(Self { set })
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.set
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Applies the update in place and reports whether anything changed.
    pub fn apply(&self, document: &mut Map<String, Value>) -> bool {
        let mut changed = false;
        for (field, value) in &self.set {
            if document.get(field) != Some(value) {
                document.insert(field.clone(), value.clone());
                changed = true;
            }
        }
        changed
    }
}

/// Keeps only the named top-level fields (plus `_id`).
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    fields: Vec<String>,
}

impl Projection {
    pub fn include<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn apply(&self, document: Value) -> Value {
        let Value::Object(mut source) = document else {
            return document;
        };

        let mut projected = Map::new();
        if let Some(id) = source.remove(ID_FIELD) {
            projected.insert(ID_FIELD.to_string(), id);
        }
        for field in &self.fields {
            if let Some(value) = source.remove(field) {
                projected.insert(field.clone(), value);
            }
        }
        Value::Object(projected)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    pub upsert: bool,
}

impl UpdateOptions {
    pub fn upsert() -> Self {
        Self { upsert: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

impl UpdateResult {
    pub fn matched(modified: bool) -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
            upserted_id: None,
        }
    }

    pub fn upserted(id: String) -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
        }
    }

    pub fn unmatched() -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

fn lookup<'a>(document: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = document.get(segments.next()?)?;
    segments.try_fold(first, |value, segment| value.get(segment))
}

fn insert_path(target: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            target.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = target
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child) = child {
                insert_path(child, rest, value);
            }
        }
    }
}
