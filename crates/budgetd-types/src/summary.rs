//! Monthly summary
//!
//! Joins three independently stored collections into one report:
//!
//! - the month's budget (income and per-category targets), possibly absent
//! - the month's spend, already grouped and summed per category id
//! - every stored category
//!
//! Category ids in the budget or the spend that match no stored category are
//! orphans. They still count towards `total_target` and `total_spent`, get no
//! category row, and are listed separately in `orphans`.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::budget::Budget;
use crate::category::Category;
use crate::month::Month;

/// One category row of a monthly summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category id
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    /// Budgeted target, 0 when the budget has no allocation for the category
    pub target: f64,
    /// Total spent this month, 0 when there are no expenses
    pub spent: f64,
    /// `spent / target * 100`, `None` when the target is 0
    pub progress: Option<f64>,
}

/// Budgeted or spent money whose category id has no stored category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrphanSummary {
    pub category_id: String,
    pub target: f64,
    pub spent: f64,
}

/// Derived per-month report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub month: Month,
    pub income: f64,
    pub total_target: f64,
    pub total_spent: f64,
    /// `max(income - total_spent, 0)`
    pub remaining: f64,
    pub categories: Vec<CategorySummary>,
    pub orphans: Vec<OrphanSummary>,
}

/// Percentage of `target` already spent; undefined for a zero target
pub fn progress(spent: f64, target: f64) -> Option<f64> {
    (target > 0.0).then(|| spent / target * 100.0)
}

/// Build the summary for `month`.
///
/// A missing budget means zero income and no targets. Rows follow the order
/// of `categories`.
pub fn summarize(
    month: Month,
    budget: Option<&Budget>,
    spent_by_category: &HashMap<String, f64>,
    categories: &[Category],
) -> Summary {
    let income = budget.map(|b| b.income).unwrap_or(0.0);
    let allocations = budget.map(Budget::allocation_map).unwrap_or_default();

    let rows: Vec<CategorySummary> = categories
        .iter()
        .map(|category| {
            let target = allocations.get(category.id.as_str()).copied().unwrap_or(0.0);
            let spent = spent_by_category.get(&category.id).copied().unwrap_or(0.0);
            CategorySummary {
                id: category.id.clone(),
                name: category.name.clone(),
                emoji: category.emoji.clone(),
                target,
                spent,
                progress: progress(spent, target),
            }
        })
        .collect();

    let total_target: f64 = allocations.values().sum();
    let total_spent: f64 = spent_by_category.values().sum();

    let known: BTreeSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let orphan_ids: BTreeSet<&str> = allocations
        .keys()
        .copied()
        .chain(spent_by_category.keys().map(String::as_str))
        .filter(|id| !known.contains(id))
        .collect();

    let orphans = orphan_ids
        .into_iter()
        .map(|id| OrphanSummary {
            category_id: id.to_string(),
            target: allocations.get(id).copied().unwrap_or(0.0),
            spent: spent_by_category.get(id).copied().unwrap_or(0.0),
        })
        .collect();

    Summary {
        month,
        income,
        total_target,
        total_spent,
        remaining: (income - total_spent).max(0.0),
        categories: rows,
        orphans,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Allocation;

    fn month() -> Month {
        Month::parse("2024-01").unwrap()
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            emoji: None,
        }
    }

    fn budget(income: f64, allocations: &[(&str, f64)]) -> Budget {
        Budget {
            id: "b1".to_string(),
            month: month(),
            income,
            allocations: allocations
                .iter()
                .map(|(id, target)| Allocation {
                    category_id: id.to_string(),
                    target: *target,
                })
                .collect(),
        }
    }

    fn spent(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(id, v)| (id.to_string(), *v)).collect()
    }

    #[test]
    fn test_food_scenario() {
        let categories = vec![Category {
            id: "c1".to_string(),
            name: "Food".to_string(),
            emoji: Some("🍔".to_string()),
        }];
        let budget = budget(1000.0, &[("c1", 300.0)]);

        let summary = summarize(month(), Some(&budget), &spent(&[("c1", 150.0)]), &categories);

        assert_eq!(summary.income, 1000.0);
        assert_eq!(summary.total_target, 300.0);
        assert_eq!(summary.total_spent, 150.0);
        assert_eq!(summary.remaining, 850.0);
        assert_eq!(summary.categories.len(), 1);
        let row = &summary.categories[0];
        assert_eq!(row.id, "c1");
        assert_eq!(row.name, "Food");
        assert_eq!(row.emoji.as_deref(), Some("🍔"));
        assert_eq!(row.target, 300.0);
        assert_eq!(row.spent, 150.0);
        assert_eq!(row.progress, Some(50.0));
        assert!(summary.orphans.is_empty());
    }

    #[test]
    fn test_missing_budget_defaults_to_zero() {
        let categories = vec![category("c1", "Food"), category("c2", "Rent")];

        let summary = summarize(month(), None, &spent(&[("c1", 20.0)]), &categories);

        assert_eq!(summary.income, 0.0);
        assert_eq!(summary.total_target, 0.0);
        assert_eq!(summary.remaining, 0.0);
        assert!(summary.categories.iter().all(|r| r.target == 0.0 && r.progress.is_none()));
        assert_eq!(summary.categories[0].spent, 20.0);
        assert_eq!(summary.categories[1].spent, 0.0);
    }

    #[test]
    fn test_zero_target_has_no_progress() {
        let categories = vec![category("c1", "Fun")];
        let budget = budget(500.0, &[("c1", 0.0)]);

        let summary = summarize(month(), Some(&budget), &spent(&[("c1", 75.0)]), &categories);

        assert_eq!(summary.categories[0].spent, 75.0);
        assert_eq!(summary.categories[0].progress, None);
    }

    #[test]
    fn test_remaining_never_negative() {
        let categories = vec![category("c1", "Travel")];
        let budget = budget(100.0, &[("c1", 100.0)]);

        let summary = summarize(month(), Some(&budget), &spent(&[("c1", 180.0)]), &categories);

        assert_eq!(summary.remaining, 0.0);
        assert_eq!(summary.categories[0].progress, Some(180.0));
    }

    #[test]
    fn test_every_category_gets_a_row() {
        let categories = vec![category("c1", "Food"), category("c2", "Rent"), category("c3", "Gym")];
        let budget = budget(2000.0, &[("c2", 900.0)]);

        let summary = summarize(month(), Some(&budget), &HashMap::new(), &categories);

        let names: Vec<&str> = summary.categories.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Rent", "Gym"]);
        assert_eq!(summary.categories[1].target, 900.0);
        assert_eq!(summary.categories[1].progress, Some(0.0));
        assert_eq!(summary.remaining, 2000.0);
    }

    #[test]
    fn test_orphans_counted_in_totals_but_not_rows() {
        let categories = vec![category("c1", "Food")];
        let budget = budget(1000.0, &[("c1", 100.0), ("ghost-budget", 50.0)]);
        let spent = spent(&[("c1", 40.0), ("ghost-expense", 60.0)]);

        let summary = summarize(month(), Some(&budget), &spent, &categories);

        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.total_target, 150.0);
        assert_eq!(summary.total_spent, 100.0);
        assert_eq!(summary.remaining, 900.0);
        assert_eq!(
            summary.orphans,
            vec![
                OrphanSummary {
                    category_id: "ghost-budget".to_string(),
                    target: 50.0,
                    spent: 0.0,
                },
                OrphanSummary {
                    category_id: "ghost-expense".to_string(),
                    target: 0.0,
                    spent: 60.0,
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_allocation_last_write_wins() {
        let categories = vec![category("c1", "Food")];
        let budget = budget(1000.0, &[("c1", 100.0), ("c1", 400.0)]);

        let summary = summarize(month(), Some(&budget), &HashMap::new(), &categories);

        assert_eq!(summary.categories[0].target, 400.0);
        assert_eq!(summary.total_target, 400.0);
    }

    #[test]
    fn test_progress_serializes_as_null() {
        let summary = summarize(month(), None, &HashMap::new(), &[category("c1", "Food")]);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["categories"][0]["progress"].is_null());
        assert_eq!(json["month"], "2024-01");
    }
}
