//! Budget repository
//!
//! One budget per month. Replacing a month's budget is a single
//! `INSERT ... ON CONFLICT(month) DO UPDATE` under the `UNIQUE(month)`
//! constraint, so readers never see the month without a budget and
//! concurrent writers cannot leave two behind.

use budgetd_types::{generate_id, Budget, Month, NewBudget};
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::{DbBudget, DbError, DbResult};

pub struct BudgetRepo {
    pool: SqlitePool,
}

impl BudgetRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store `budget` as the only budget for its month.
    ///
    /// The stored budget gets a fresh id and exactly the given fields.
    pub async fn upsert(&self, budget: &NewBudget) -> DbResult<Budget> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbBudget>(
            r#"
            INSERT INTO budgets (id, month, income, allocations, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            ON CONFLICT(month) DO UPDATE SET
                id = excluded.id,
                income = excluded.income,
                allocations = excluded.allocations,
                created_at = excluded.created_at,
                updated_at = excluded.updated_at
            RETURNING id, month, income, allocations, created_at, updated_at
            "#
        )
        .bind(generate_id())
        .bind(budget.month.as_str())
        .bind(budget.income)
        .bind(Json(&budget.allocations))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            budget_id = %row.id,
            month = %row.month,
            allocations = row.allocations.0.len(),
            "Budget upserted"
        );
        row.try_into()
    }

    /// Budget for `month`, if one exists
    pub async fn find_by_month(&self, month: &Month) -> DbResult<Option<Budget>> {
        let row = sqlx::query_as::<_, DbBudget>(
            r#"
            SELECT id, month, income, allocations, created_at, updated_at
            FROM budgets
            WHERE month = ?
            "#
        )
        .bind(month.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Budget::try_from).transpose()
    }

    /// Budget for `month`, failing with `NotFound` when there is none
    pub async fn get(&self, month: &Month) -> DbResult<Budget> {
        self.find_by_month(month)
            .await?
            .ok_or_else(|| DbError::NotFound("Budget not found for month".to_string()))
    }

    /// Number of stored budgets for `month` (0 or 1)
    pub async fn count_for_month(&self, month: &Month) -> DbResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM budgets WHERE month = ?")
            .bind(month.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use budgetd_types::{Allocation, Month, NewBudget};

    use crate::{Database, DbError};

    fn month(value: &str) -> Month {
        Month::parse(value).unwrap()
    }

    fn new_budget(m: &str, income: f64, allocations: &[(&str, f64)]) -> NewBudget {
        NewBudget::new(
            month(m),
            income,
            allocations
                .iter()
                .map(|(id, target)| Allocation {
                    category_id: id.to_string(),
                    target: *target,
                })
                .collect(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = db.budget_repo();

        let stored = repo
            .upsert(&new_budget("2024-01", 1000.0, &[("c1", 300.0), ("c2", 200.0)]))
            .await
            .unwrap();

        let fetched = repo.get(&month("2024-01")).await.unwrap();
        assert_eq!(stored, fetched);
        assert_eq!(fetched.income, 1000.0);
        assert_eq!(fetched.allocations[0].category_id, "c1");
        assert_eq!(fetched.allocations[1].target, 200.0);
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_with_second_fields() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = db.budget_repo();

        let first = repo.upsert(&new_budget("2024-01", 1000.0, &[("c1", 300.0)])).await.unwrap();
        let second = repo.upsert(&new_budget("2024-01", 1800.0, &[("c2", 50.0)])).await.unwrap();

        assert_eq!(repo.count_for_month(&month("2024-01")).await.unwrap(), 1);
        assert_ne!(first.id, second.id);

        let fetched = repo.get(&month("2024-01")).await.unwrap();
        assert_eq!(fetched, second);
        assert_eq!(fetched.income, 1800.0);
        assert_eq!(fetched.allocations.len(), 1);
        assert_eq!(fetched.allocations[0].category_id, "c2");
    }

    #[tokio::test]
    async fn test_months_are_independent() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = db.budget_repo();

        repo.upsert(&new_budget("2024-01", 1000.0, &[])).await.unwrap();
        repo.upsert(&new_budget("2024-02", 2000.0, &[])).await.unwrap();

        assert_eq!(repo.get(&month("2024-01")).await.unwrap().income, 1000.0);
        assert_eq!(repo.get(&month("2024-02")).await.unwrap().income, 2000.0);
    }

    #[tokio::test]
    async fn test_get_missing_month_is_not_found() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = db.budget_repo();

        assert!(repo.find_by_month(&month("2030-12")).await.unwrap().is_none());
        match repo.get(&month("2030-12")).await {
            Err(DbError::NotFound(msg)) => assert_eq!(msg, "Budget not found for month"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_allocations_round_trip_in_order() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = db.budget_repo();

        let stored = repo
            .upsert(&new_budget("2024-03", 10.0, &[("c1", 1.0), ("c1", 2.0)]))
            .await
            .unwrap();

        assert_eq!(stored.allocations.len(), 2);
        assert_eq!(stored.allocation_map()["c1"], 2.0);
    }
}
