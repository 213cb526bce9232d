use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate value for unique field `{field}` in `{collection}`")]
    DuplicateKey { collection: String, field: String },

    #[error("document must be a JSON object")]
    NotAnObject,

    #[error("unsupported database url scheme `{0}`")]
    UnsupportedUrl(String),
}

impl StoreError {
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey { .. })
    }
}
