//! PostgreSQL document store.
//!
//! All collections share one `documents` table holding a JSONB `doc` per row.
//! Filters compile to JSONB containment (`doc @> $filter`), `$set` updates to a
//! top-level merge (`doc || $fields`), and insertion order is kept by `seq`.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;

use crate::document::{
    DeleteResult, Filter, ID_FIELD, InsertOneResult, Projection, Update, UpdateOptions,
    UpdateResult,
};
use crate::error::StoreError;
use crate::store::{DocumentStore, new_id};

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Connects a pool and applies the embedded migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Document store migrations applied");

        Ok(Self { pool })
    }

    async fn insert_document(
        &self,
        collection: &str,
        id: &str,
        document: Map<String, Value>,
        ignore_conflicts: bool,
    ) -> Result<bool, StoreError> {
        let sql = if ignore_conflicts {
            "INSERT INTO documents (collection, id, doc) VALUES ($1, $2, $3) ON CONFLICT DO NOTHING"
        } else {
            "INSERT INTO documents (collection, id, doc) VALUES ($1, $2, $3)"
        };

        let result = sqlx::query(sql)
            .bind(collection)
            .bind(id)
            .bind(Json(Value::Object(document)))
            .execute(&self.pool)
            .await
            .map_err(|e| unique_violation(collection, e))?;

        Ok(result.rows_affected() == 1)
    }
}

fn containment(filter: &Filter) -> Json<Value> {
    Json(Value::Object(filter.to_document()))
}

fn unique_violation(collection: &str, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let field = match db.constraint() {
                Some(constraint) if constraint.ends_with("email_key") => "email",
                _ => ID_FIELD,
            };
            return StoreError::DuplicateKey {
                collection: collection.to_string(),
                field: field.to_string(),
            };
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Value>, StoreError> {
        let rows = sqlx::query_scalar::<_, Json<Value>>(
            "SELECT doc FROM documents WHERE collection = $1 AND doc @> $2 ORDER BY seq",
        )
        .bind(collection)
        .bind(containment(filter))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|Json(doc)| match projection {
                Some(projection) => projection.apply(doc),
                None => doc,
            })
            .collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Value>, StoreError> {
        let row = sqlx::query_scalar::<_, Json<Value>>(
            "SELECT doc FROM documents WHERE collection = $1 AND doc @> $2 ORDER BY seq LIMIT 1",
        )
        .bind(collection)
        .bind(containment(filter))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|Json(doc)| doc))
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

        self.insert_document(collection, &id, document, false)
            .await?;

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
        let fields = Json(Value::Object(update.fields().clone()));

        let modified = sqlx::query_scalar::<_, bool>(
            r#"
            WITH target AS (
                SELECT id, doc FROM documents
                WHERE collection = $1 AND doc @> $2
                ORDER BY seq
                LIMIT 1
                FOR UPDATE
            )
            UPDATE documents d
            SET doc = d.doc || $3
            FROM target t
            WHERE d.collection = $1 AND d.id = t.id
            RETURNING (t.doc IS DISTINCT FROM d.doc)
            "#,
        )
        .bind(collection)
        .bind(containment(filter))
        .bind(&fields)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| unique_violation(collection, e))?;

        if let Some(modified) = modified {
            return Ok(UpdateResult::matched(modified));
        }

        if !options.upsert {
            return Ok(UpdateResult::unmatched());
        }

        let mut seeded = filter.to_document();
        update.apply(&mut seeded);
        let id = new_id();
        seeded.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        // A concurrent upsert for the same unique key wins; report no-op.
        if self.insert_document(collection, &id, seeded, true).await? {
            Ok(UpdateResult::upserted(id))
        } else {
            Ok(UpdateResult::unmatched())
        }
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = $1 AND id = (
                SELECT id FROM documents
                WHERE collection = $1 AND doc @> $2
                ORDER BY seq
                LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(containment(filter))
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: result.rows_affected(),
        })
    }

    async fn count_documents(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM documents WHERE collection = $1 AND doc @> $2",
        )
        .bind(collection)
        .bind(containment(filter))
        .fetch_one(&self.pool)
        .await?;

        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
