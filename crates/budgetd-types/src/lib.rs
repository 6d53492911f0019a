//! budgetd Types - Canonical domain types for personal budget tracking
//!
//! This crate contains the foundational types for budgetd with zero dependencies
//! on other budgetd crates. It defines:
//!
//! - `Month` keys (`YYYY-MM`)
//! - Categories, monthly budgets with their allocations, and expenses
//! - The monthly summary and the pure aggregation that produces it
//!
//! # Summary Flow
//!
//! ```text
//! Budget (income, allocations) ─┐
//! Expenses (grouped by category) ├─► summarize(month) ─► Summary
//! Categories ───────────────────┘
//! ```

pub mod month;
pub mod category;
pub mod budget;
pub mod expense;
pub mod summary;
pub mod error;

pub use month::*;
pub use category::*;
pub use budget::*;
pub use expense::*;
pub use summary::*;
pub use error::*;

/// Generate a fresh public identifier for a stored record
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Reject negative and non-finite money values
pub fn ensure_amount(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BudgetError::NonFiniteAmount { field });
    }
    if value < 0.0 {
        return Err(BudgetError::NegativeAmount { field, value });
    }
    Ok(value)
}
