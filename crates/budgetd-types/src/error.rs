//! Error types for budgetd domain values
//!
//! Every invalid value is rejected before it reaches the store.

use thiserror::Error;

/// Result type for budgetd domain operations
pub type Result<T> = std::result::Result<T, BudgetError>;

/// budgetd domain error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    /// Month key is not `YYYY-MM`
    #[error("Invalid month '{0}': expected YYYY-MM")]
    InvalidMonth(String),

    /// Money value below zero
    #[error("{field} must be >= 0, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    /// NaN or infinite money value
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },

    /// Required text field is empty
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BudgetError::InvalidMonth("2024-13".to_string()).to_string(),
            "Invalid month '2024-13': expected YYYY-MM"
        );
        assert_eq!(
            BudgetError::NegativeAmount { field: "amount", value: -5.0 }.to_string(),
            "amount must be >= 0, got -5"
        );
    }
}
