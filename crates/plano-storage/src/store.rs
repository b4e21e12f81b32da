//! CRUD operations for teaching plans, scoped by owner.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use plano_core::errors::{PlanoResult, StorageError};
use plano_core::TeachingPlan;

use crate::schema;

fn to_storage_err(message: impl Into<String>) -> StorageError {
    StorageError::Sqlite {
        message: message.into(),
    }
}

/// Row summary for plan listings (load dialogs, dashboards).
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub id: String,
    pub title: String,
    pub last_updated: DateTime<Utc>,
}

/// SQLite-backed plan store. Every operation is scoped to an owner id so
/// one user can never read or delete another user's plans.
pub struct PlanStore {
    conn: Connection,
}

impl PlanStore {
    /// Open (or create) a plan database at the given path.
    pub fn open(path: impl AsRef<Path>) -> PlanoResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests and previews.
    pub fn open_in_memory() -> PlanoResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Insert or update a plan, stamping its `last_updated` to now.
    pub fn save_plan(&self, owner_id: &str, plan: &mut TeachingPlan) -> PlanoResult<()> {
        plan.last_updated = Utc::now();
        let data = serde_json::to_string(&plan.data).map_err(|e| StorageError::Serialization {
            message: e.to_string(),
        })?;

        let affected = self
            .conn
            .execute(
                "INSERT INTO plans (id, owner_id, title, last_updated, data)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     title = excluded.title,
                     last_updated = excluded.last_updated,
                     data = excluded.data
                 WHERE plans.owner_id = excluded.owner_id",
                params![
                    plan.id,
                    owner_id,
                    plan.title,
                    plan.last_updated.to_rfc3339(),
                    data,
                ],
            )
            .map_err(|e| to_storage_err(format!("save_plan: {e}")))?;

        // The guarded upsert touches no row when the id exists under another
        // owner; that must surface as an error, not a silent no-op.
        if affected == 0 {
            return Err(StorageError::OwnerMismatch {
                id: plan.id.clone(),
            }
            .into());
        }

        tracing::debug!(plan_id = %plan.id, owner = %owner_id, "plan saved");
        Ok(())
    }

    /// Fetch one plan by id. Returns `None` when it doesn't exist or belongs
    /// to another owner.
    pub fn get_plan(&self, owner_id: &str, id: &str) -> PlanoResult<Option<TeachingPlan>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, title, last_updated, data FROM plans
                 WHERE id = ?1 AND owner_id = ?2",
                params![id, owner_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()
            .map_err(|e| to_storage_err(format!("get_plan: {e}")))?;

        let Some((id, title, last_updated, data)) = row else {
            return Ok(None);
        };

        let data = serde_json::from_str(&data).map_err(|e| StorageError::Serialization {
            message: e.to_string(),
        })?;
        let last_updated = DateTime::parse_from_rfc3339(&last_updated)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Some(TeachingPlan {
            id,
            title,
            last_updated,
            data,
        }))
    }

    /// List an owner's plans, most recently updated first.
    pub fn list_plans(&self, owner_id: &str) -> PlanoResult<Vec<PlanSummary>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, last_updated FROM plans
                 WHERE owner_id = ?1 ORDER BY last_updated DESC",
            )
            .map_err(|e| to_storage_err(format!("list_plans prepare: {e}")))?;

        let rows = stmt
            .query_map(params![owner_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| to_storage_err(format!("list_plans query: {e}")))?;

        let mut summaries = Vec::new();
        for row in rows {
            let (id, title, last_updated) =
                row.map_err(|e| to_storage_err(format!("list_plans row: {e}")))?;
            summaries.push(PlanSummary {
                id,
                title,
                last_updated: DateTime::parse_from_rfc3339(&last_updated)
                    .map(|t| t.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now()),
            });
        }
        Ok(summaries)
    }

    /// Delete a plan. Returns whether a row was actually removed.
    pub fn delete_plan(&self, owner_id: &str, id: &str) -> PlanoResult<bool> {
        let affected = self
            .conn
            .execute(
                "DELETE FROM plans WHERE id = ?1 AND owner_id = ?2",
                params![id, owner_id],
            )
            .map_err(|e| to_storage_err(format!("delete_plan: {e}")))?;
        if affected > 0 {
            tracing::debug!(plan_id = %id, owner = %owner_id, "plan deleted");
        }
        Ok(affected > 0)
    }
}
