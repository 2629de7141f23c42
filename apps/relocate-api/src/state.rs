//! Application state for the Relocate Me API

use anyhow::Result;
use sqlx::sqlite::SqlitePool;

use crate::catalog::Catalog;
use crate::db;

pub struct AppState {
    pub db: SqlitePool,
    pub catalog: Catalog,
}

impl AppState {
    /// Connect, migrate and seed the database
    pub async fn new(database_url: &str) -> Result<Self> {
        tracing::info!("Connecting to database: {}", database_url);

        let pool = db::connect(database_url).await?;
        let catalog = Catalog::builtin();

        db::run_migrations(&pool).await?;
        db::seed(&pool, &catalog).await?;

        tracing::info!(
            "Catalog loaded: {} timeline steps, {} visa types, {} jobs",
            catalog.timeline.len(),
            catalog.visa_types.len(),
            catalog.jobs.len()
        );

        Ok(Self { db: pool, catalog })
    }

    /// Fresh in-memory state, used by tests
    pub async fn in_memory() -> Result<Self> {
        Self::new("sqlite::memory:").await
    }
}
