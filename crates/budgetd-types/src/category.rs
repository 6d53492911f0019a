//! Spending categories

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};

/// A spending category, e.g. Rent or Food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Display icon, e.g. "🍔"
    pub emoji: Option<String>,
}

/// Fields of a category that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub emoji: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, emoji: Option<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(BudgetError::EmptyField { field: "name" });
        }
        let emoji = emoji.filter(|e| !e.trim().is_empty());
        Ok(Self { name, emoji })
    }
}
