//! budgetd Database Layer
//!
//! Persistence for the budget tracker on SQLite.
//!
//! # Architecture
//!
//! - **categories**: name/emoji records
//! - **budgets**: one row per month (`UNIQUE(month)`), allocations as a JSON array
//! - **expenses**: append-only ledger indexed by month and category
//!
//! # Repository Pattern
//!
//! Each collection has its own repository. `SummaryRepo` reads all three and
//! hands them to the pure aggregation in `budgetd_types::summary`.

pub mod config;
pub mod error;
pub mod repos;
pub mod models;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

pub use config::DatabaseConfig;
pub use error::{DbError, DbResult};
pub use repos::*;
pub use models::*;

/// Tables reported by the store probe are capped at this many names
pub const PROBE_MAX_COLLECTIONS: usize = 10;

/// Database connection pool
pub struct Database {
    /// SQLite connection pool
    pub pool: SqlitePool,
    name: String,
}

impl Database {
    /// Connect to SQLite, creating the database file if needed
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        info!(database = %config.database_name(), "Connecting to SQLite");

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DbError::Connection(format!("SQLite: {}", e)))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));

        if config.is_in_memory() {
            // Dropping the last connection drops the database
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection(format!("SQLite: {}", e)))?;

        info!("Connected to SQLite");

        Ok(Self {
            pool,
            name: config.database_name(),
        })
    }

    /// Connect to a fresh, migrated in-memory database
    pub async fn connect_in_memory() -> DbResult<Self> {
        let db = Self::connect(&DatabaseConfig::in_memory()).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> DbResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration(e.to_string()))?;
        info!("Migrations complete");
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Health check
    pub async fn health_check(&self) -> DbResult<HealthStatus> {
        let started = std::time::Instant::now();
        let sqlite_ok = sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok();

        Ok(HealthStatus {
            sqlite: sqlite_ok,
            healthy: sqlite_ok,
            latency_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Names of the user tables in the store, at most `PROBE_MAX_COLLECTIONS`
    pub async fn collections(&self) -> DbResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name FROM sqlite_master
            WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name NOT LIKE '_sqlx_%'
            ORDER BY name
            LIMIT ?
            "#
        )
        .bind(PROBE_MAX_COLLECTIONS as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    /// Create repository instances
    pub fn category_repo(&self) -> CategoryRepo {
        CategoryRepo::new(self.pool.clone())
    }

    pub fn budget_repo(&self) -> BudgetRepo {
        BudgetRepo::new(self.pool.clone())
    }

    pub fn expense_repo(&self) -> ExpenseRepo {
        ExpenseRepo::new(self.pool.clone())
    }

    pub fn summary_repo(&self) -> SummaryRepo {
        SummaryRepo::new(self.pool.clone())
    }
}

/// Health status of the database connection
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub sqlite: bool,
    pub healthy: bool,
    pub latency_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database_is_migrated() {
        let db = Database::connect_in_memory().await.unwrap();

        let health = db.health_check().await.unwrap();
        assert!(health.healthy);
        assert_eq!(db.name(), "memory");

        let collections = db.collections().await.unwrap();
        assert_eq!(collections, vec!["budgets", "categories", "expenses"]);
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let first = Database::connect_in_memory().await.unwrap();
        let second = Database::connect_in_memory().await.unwrap();

        first.category_repo().create("Food", None).await.unwrap();

        assert_eq!(first.category_repo().list().await.unwrap().len(), 1);
        assert!(second.category_repo().list().await.unwrap().is_empty());
    }
}
