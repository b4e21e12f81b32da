//! Schema initialization for the plans database.

use rusqlite::Connection;

use plano_core::errors::StorageError;

/// Create the plans table and its indexes if they don't exist yet.
pub fn init_schema(conn: &Connection) -> Result<(), StorageError> {
    tracing::info!("initializing plans schema");
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS plans (
            id           TEXT PRIMARY KEY,
            owner_id     TEXT NOT NULL,
            title        TEXT NOT NULL,
            last_updated TEXT NOT NULL,
            data         TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_plans_owner ON plans(owner_id, last_updated DESC);",
    )
    .map_err(|e| StorageError::SchemaInit {
        reason: e.to_string(),
    })
}
