//! Expense ledger entries
//!
//! Expenses are append-only. Several entries may share a month and category;
//! the summary adds them up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ensure_amount;
use crate::error::Result;
use crate::month::Month;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub month: Month,
    /// Referenced category id (not checked against stored categories)
    pub category_id: String,
    pub amount: f64,
    pub note: Option<String>,
    /// Date the money was spent
    pub spent_on: Option<NaiveDate>,
}

/// Fields of an expense that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub month: Month,
    pub category_id: String,
    pub amount: f64,
    pub note: Option<String>,
    pub spent_on: Option<NaiveDate>,
}

impl NewExpense {
    pub fn new(
        month: Month,
        category_id: impl Into<String>,
        amount: f64,
        note: Option<String>,
        spent_on: Option<NaiveDate>,
    ) -> Result<Self> {
        ensure_amount("amount", amount)?;
        Ok(Self {
            month,
            category_id: category_id.into(),
            amount,
            note,
            spent_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BudgetError;

    #[test]
    fn test_new_expense() {
        let expense = NewExpense::new(
            Month::parse("2024-01").unwrap(),
            "food",
            42.5,
            Some("groceries".to_string()),
            NaiveDate::from_ymd_opt(2024, 1, 3),
        )
        .unwrap();
        assert_eq!(expense.category_id, "food");
        assert_eq!(expense.amount, 42.5);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = NewExpense::new(Month::parse("2024-01").unwrap(), "food", -3.0, None, None)
            .unwrap_err();
        assert_eq!(err, BudgetError::NegativeAmount { field: "amount", value: -3.0 });
    }

    #[test]
    fn test_expense_json_shape() {
        let expense = Expense {
            id: "e1".to_string(),
            month: Month::parse("2024-01").unwrap(),
            category_id: "c1".to_string(),
            amount: 10.0,
            note: None,
            spent_on: NaiveDate::from_ymd_opt(2024, 1, 31),
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], "e1");
        assert_eq!(json["month"], "2024-01");
        assert_eq!(json["spent_on"], "2024-01-31");
        assert!(json["note"].is_null());
    }
}
