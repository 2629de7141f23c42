//! SQLite persistence for task progress
//!
//! Reference data lives in the built-in [`Catalog`]; the database only holds
//! what the user can change: timeline step completion and progress items.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use relocate_types::{
    Priority, ProgressItem, ProgressStatus, Subtask, TimelineStep, UpdateProgressItemRequest,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use crate::catalog::Catalog;
use crate::error::ApiError;

/// Open a pool. In-memory databases live as long as their connection, so
/// they get exactly one that never expires. File databases run in WAL mode
/// so readers never block the single writer.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    if database_url.contains(":memory:") {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(database_url)
            .await?;
        return Ok(pool);
    }

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    Ok(SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Running database migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS step_progress (
            step_id TEXT PRIMARY KEY,
            is_completed INTEGER NOT NULL DEFAULT 0,
            notes TEXT,
            completed_at TEXT,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS progress_items (
            id TEXT PRIMARY KEY,
            position INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            priority TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'not_started',
            subtasks_json TEXT NOT NULL DEFAULT '[]',
            notes TEXT NOT NULL DEFAULT '',
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_progress_items_status ON progress_items(status)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

/// Insert catalog progress items that are not in the database yet.
/// Existing rows keep their status, notes and subtask state.
pub async fn seed(pool: &SqlitePool, catalog: &Catalog) -> Result<()> {
    let now = Utc::now();
    let mut inserted = 0;

    for (position, seed) in catalog.progress_seeds.iter().enumerate() {
        let subtasks: Vec<Subtask> = seed
            .subtasks
            .iter()
            .map(|task| Subtask {
                task: task.to_string(),
                completed: false,
            })
            .collect();
        let subtasks_json = serde_json::to_string(&subtasks)?;

        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO progress_items
                (id, position, title, description, category, priority, status, subtasks_json, notes, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, 'not_started', ?, '', ?)
            "#,
        )
        .bind(seed.id)
        .bind(position as i64)
        .bind(seed.title)
        .bind(seed.description)
        .bind(seed.category)
        .bind(seed.priority.to_string())
        .bind(&subtasks_json)
        .bind(now)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    tracing::info!("Seeded {} progress items", inserted);
    Ok(())
}

// ============================================================
// Timeline
// ============================================================

#[derive(Debug, Clone, FromRow)]
pub struct DbStepProgress {
    pub step_id: String,
    pub is_completed: bool,
    pub notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Catalog steps overlaid with the stored completion state
pub async fn timeline(pool: &SqlitePool, catalog: &Catalog) -> Result<Vec<TimelineStep>, ApiError> {
    let rows: Vec<DbStepProgress> = sqlx::query_as(
        r#"
        SELECT step_id, is_completed, notes, completed_at
        FROM step_progress
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut progress: HashMap<String, DbStepProgress> = rows
        .into_iter()
        .map(|row| (row.step_id.clone(), row))
        .collect();

    Ok(catalog
        .timeline
        .iter()
        .cloned()
        .map(|mut step| {
            if let Some(row) = progress.remove(&step.id) {
                step.is_completed = row.is_completed;
                step.notes = row.notes;
                step.completed_at = row.completed_at;
            }
            step
        })
        .collect())
}

/// Set a step's completion flag. Notes are only replaced when given, and
/// re-completing a step keeps its original completion time.
pub async fn set_step_completed(
    pool: &SqlitePool,
    step_id: &str,
    completed: bool,
    notes: Option<&str>,
) -> Result<(), ApiError> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO step_progress (step_id, is_completed, notes, completed_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(step_id) DO UPDATE SET
            is_completed = excluded.is_completed,
            notes = COALESCE(excluded.notes, step_progress.notes),
            completed_at = CASE
                WHEN excluded.is_completed AND step_progress.is_completed
                    THEN step_progress.completed_at
                ELSE excluded.completed_at
            END,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(step_id)
    .bind(completed)
    .bind(notes)
    .bind(completed.then_some(now))
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

// ============================================================
// Progress items
// ============================================================

#[derive(Debug, Clone, FromRow)]
pub struct DbProgressItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub subtasks_json: String,
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbProgressItem> for ProgressItem {
    type Error = anyhow::Error;

    fn try_from(row: DbProgressItem) -> Result<Self, Self::Error> {
        let priority: Priority = row.priority.parse().map_err(|e: String| anyhow!(e))?;
        let status: ProgressStatus = row.status.parse().map_err(|e: String| anyhow!(e))?;
        let subtasks: Vec<Subtask> = serde_json::from_str(&row.subtasks_json)?;

        Ok(ProgressItem {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            priority,
            status,
            subtasks,
            notes: row.notes,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_ITEM: &str = r#"
    SELECT id, title, description, category, priority, status, subtasks_json, notes, updated_at
    FROM progress_items
"#;

pub async fn progress_items(pool: &SqlitePool) -> Result<Vec<ProgressItem>, ApiError> {
    let rows: Vec<DbProgressItem> = sqlx::query_as(&format!("{} ORDER BY position", SELECT_ITEM))
        .fetch_all(pool)
        .await?;

    rows.into_iter()
        .map(|row| ProgressItem::try_from(row).map_err(ApiError::Internal))
        .collect()
}

pub async fn progress_item(pool: &SqlitePool, id: &str) -> Result<ProgressItem, ApiError> {
    let row: Option<DbProgressItem> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_ITEM))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let row = row.ok_or_else(|| ApiError::ItemNotFound(id.to_string()))?;
    ProgressItem::try_from(row).map_err(ApiError::Internal)
}

pub async fn count_items_with_status(
    pool: &SqlitePool,
    status: ProgressStatus,
) -> Result<usize, ApiError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM progress_items WHERE status = ?")
        .bind(status.to_string())
        .fetch_one(pool)
        .await?;

    Ok(count as usize)
}

/// Apply the fields present in `update`, leaving the others untouched
pub async fn update_progress_item(
    pool: &SqlitePool,
    id: &str,
    update: &UpdateProgressItemRequest,
) -> Result<ProgressItem, ApiError> {
    let result = sqlx::query(
        r#"
        UPDATE progress_items
        SET status = COALESCE(?, status),
            notes = COALESCE(?, notes),
            priority = COALESCE(?, priority),
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(update.status.map(|s| s.to_string()))
    .bind(update.notes.as_deref())
    .bind(update.priority.map(|p| p.to_string()))
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::ItemNotFound(id.to_string()));
    }

    progress_item(pool, id).await
}

/// Flip one subtask's completion inside a transaction.
///
/// The write lock is taken up front: a deferred transaction that reads
/// first cannot wait for the lock when it upgrades, so overlapping toggles
/// would fail with SQLITE_BUSY instead of queueing.
pub async fn toggle_subtask(
    pool: &SqlitePool,
    id: &str,
    subtask_index: usize,
) -> Result<ProgressItem, ApiError> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let subtasks_json: Option<String> =
        sqlx::query_scalar("SELECT subtasks_json FROM progress_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    let subtasks_json = subtasks_json.ok_or_else(|| ApiError::ItemNotFound(id.to_string()))?;
    let mut subtasks: Vec<Subtask> =
        serde_json::from_str(&subtasks_json).map_err(|e| ApiError::Internal(e.into()))?;

    let count = subtasks.len();
    let subtask = subtasks.get_mut(subtask_index).ok_or_else(|| {
        ApiError::InvalidRequest(format!(
            "Subtask index {} out of range for item {} ({} subtasks)",
            subtask_index, id, count
        ))
    })?;
    subtask.completed = !subtask.completed;

    let subtasks_json =
        serde_json::to_string(&subtasks).map_err(|e| ApiError::Internal(e.into()))?;

    sqlx::query(
        r#"
        UPDATE progress_items
        SET subtasks_json = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&subtasks_json)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    progress_item(pool, id).await
}
