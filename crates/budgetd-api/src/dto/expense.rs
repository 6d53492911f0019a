//! Expense DTOs

use budgetd_types::{Expense, Month};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Add expense request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExpenseRequest {
    #[schema(value_type = String, example = "2024-01")]
    pub month: Month,
    #[validate(length(min = 1, message = "Category id is required"))]
    pub category_id: String,
    #[validate(range(min = 0.0, message = "Amount must be non-negative"))]
    #[schema(example = 12.5)]
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
    /// Calendar day of the purchase (`YYYY-MM-DD`)
    #[serde(default)]
    pub spent_on: Option<NaiveDate>,
}

/// Expense
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExpenseResponse {
    pub id: String,
    #[schema(value_type = String, example = "2024-01")]
    pub month: Month,
    pub category_id: String,
    pub amount: f64,
    pub note: Option<String>,
    pub spent_on: Option<NaiveDate>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            month: expense.month,
            category_id: expense.category_id,
            amount: expense.amount,
            note: expense.note,
            spent_on: expense.spent_on,
        }
    }
}
