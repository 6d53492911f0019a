//! Monthly budget plans
//!
//! A budget holds the planned income for one month and an ordered list of
//! per-category spending targets. There is at most one budget per month;
//! storing a new one for the same month replaces the old one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ensure_amount;
use crate::error::Result;
use crate::month::Month;

/// Planned spending target for one category within a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Referenced category id (not checked against stored categories)
    pub category_id: String,
    /// Target amount for the month
    pub target: f64,
}

/// Monthly budget plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub month: Month,
    /// Planned monthly income
    pub income: f64,
    pub allocations: Vec<Allocation>,
}

impl Budget {
    /// Targets keyed by category id.
    ///
    /// A category listed twice keeps its last target.
    pub fn allocation_map(&self) -> HashMap<&str, f64> {
        self.allocations
            .iter()
            .map(|a| (a.category_id.as_str(), a.target))
            .collect()
    }
}

/// Fields of a budget that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub month: Month,
    pub income: f64,
    pub allocations: Vec<Allocation>,
}

impl NewBudget {
    pub fn new(month: Month, income: f64, allocations: Vec<Allocation>) -> Result<Self> {
        ensure_amount("income", income)?;
        for allocation in &allocations {
            ensure_amount("target", allocation.target)?;
        }
        Ok(Self {
            month,
            income,
            allocations,
        })
    }

    /// Distinct category ids referenced by the allocations
    pub fn category_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.allocations.iter().map(|a| a.category_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BudgetError;

    fn alloc(category_id: &str, target: f64) -> Allocation {
        Allocation {
            category_id: category_id.to_string(),
            target,
        }
    }

    #[test]
    fn test_allocation_map_last_write_wins() {
        let budget = Budget {
            id: "b1".to_string(),
            month: Month::parse("2024-01").unwrap(),
            income: 1000.0,
            allocations: vec![alloc("food", 100.0), alloc("rent", 500.0), alloc("food", 250.0)],
        };

        let map = budget.allocation_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["food"], 250.0);
        assert_eq!(map["rent"], 500.0);
    }

    #[test]
    fn test_new_budget_validates_amounts() {
        let month = Month::parse("2024-01").unwrap();

        assert!(NewBudget::new(month.clone(), 0.0, vec![]).is_ok());
        assert!(matches!(
            NewBudget::new(month.clone(), -1.0, vec![]),
            Err(BudgetError::NegativeAmount { field: "income", .. })
        ));
        assert!(matches!(
            NewBudget::new(month, 10.0, vec![alloc("food", -0.5)]),
            Err(BudgetError::NegativeAmount { field: "target", .. })
        ));
    }

    #[test]
    fn test_category_ids_are_distinct() {
        let budget = NewBudget::new(
            Month::parse("2024-02").unwrap(),
            100.0,
            vec![alloc("b", 1.0), alloc("a", 2.0), alloc("b", 3.0)],
        )
        .unwrap();
        assert_eq!(budget.category_ids(), vec!["a", "b"]);
    }
}
