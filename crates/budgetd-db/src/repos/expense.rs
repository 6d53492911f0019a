//! Expense repository

use std::collections::HashMap;

use budgetd_types::{generate_id, Expense, Month, NewExpense};
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{DbCategorySpend, DbExpense, DbResult};

pub struct ExpenseRepo {
    pool: SqlitePool,
}

impl ExpenseRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an expense to the ledger
    pub async fn add(&self, expense: &NewExpense) -> DbResult<Expense> {
        let row = sqlx::query_as::<_, DbExpense>(
            r#"
            INSERT INTO expenses (id, month, category_id, amount, note, spent_on, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, month, category_id, amount, note, spent_on, created_at
            "#
        )
        .bind(generate_id())
        .bind(expense.month.as_str())
        .bind(&expense.category_id)
        .bind(expense.amount)
        .bind(&expense.note)
        .bind(expense.spent_on)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            expense_id = %row.id,
            month = %row.month,
            category_id = %row.category_id,
            amount = row.amount,
            "Expense added"
        );
        row.try_into()
    }

    /// Expenses recorded for `month`
    pub async fn list_by_month(&self, month: &Month) -> DbResult<Vec<Expense>> {
        let rows = sqlx::query_as::<_, DbExpense>(
            r#"
            SELECT id, month, category_id, amount, note, spent_on, created_at
            FROM expenses
            WHERE month = ?
            ORDER BY rowid
            "#
        )
        .bind(month.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Expense::try_from).collect()
    }

    /// Total spent per category id for `month`.
    ///
    /// Category ids without expenses are absent from the map.
    pub async fn spent_by_category(&self, month: &Month) -> DbResult<HashMap<String, f64>> {
        let rows = sqlx::query_as::<_, DbCategorySpend>(
            r#"
            SELECT category_id, TOTAL(amount) AS spent
            FROM expenses
            WHERE month = ?
            GROUP BY category_id
            "#
        )
        .bind(month.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| (r.category_id, r.spent)).collect())
    }
}
