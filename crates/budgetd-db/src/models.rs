//! Database models - mapped from SQLite tables

use budgetd_types::{Allocation, Budget, Category, Expense, Month};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::{DbError, DbResult};

// ============================================================================
// Category Models
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct DbCategory {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbCategory> for Category {
    fn from(row: DbCategory) -> Self {
        Category {
            id: row.id,
            name: row.name,
            emoji: row.emoji,
        }
    }
}

// ============================================================================
// Budget Models
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct DbBudget {
    pub id: String,
    pub month: String,
    pub income: f64,
    /// Ordered allocation list, stored as a JSON array
    pub allocations: Json<Vec<Allocation>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbBudget> for Budget {
    type Error = DbError;

    fn try_from(row: DbBudget) -> DbResult<Self> {
        Ok(Budget {
            id: row.id,
            month: stored_month(&row.month)?,
            income: row.income,
            allocations: row.allocations.0,
        })
    }
}

// ============================================================================
// Expense Models
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct DbExpense {
    pub id: String,
    pub month: String,
    pub category_id: String,
    pub amount: f64,
    pub note: Option<String>,
    pub spent_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbExpense> for Expense {
    type Error = DbError;

    fn try_from(row: DbExpense) -> DbResult<Self> {
        Ok(Expense {
            id: row.id,
            month: stored_month(&row.month)?,
            category_id: row.category_id,
            amount: row.amount,
            note: row.note,
            spent_on: row.spent_on,
        })
    }
}

/// Aggregated spend for one category id
#[derive(Debug, Clone, FromRow)]
pub struct DbCategorySpend {
    pub category_id: String,
    pub spent: f64,
}

fn stored_month(value: &str) -> DbResult<Month> {
    Month::parse(value).map_err(|e| DbError::Serialization(format!("stored month: {}", e)))
}
