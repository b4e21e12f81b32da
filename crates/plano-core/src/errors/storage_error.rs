/// Storage-layer errors for SQLite plan persistence.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("schema initialization failed: {reason}")]
    SchemaInit { reason: String },

    #[error("plan document could not be (de)serialized: {message}")]
    Serialization { message: String },

    #[error("plan {id} already belongs to another owner")]
    OwnerMismatch { id: String },
}
