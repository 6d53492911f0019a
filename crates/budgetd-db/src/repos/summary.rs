//! Summary repository
//!
//! Reads the month's budget, the month's spend per category and every
//! category, then joins them with `budgetd_types::summarize`. A missing
//! budget is not an error here.

use budgetd_types::{summarize, Month, Summary};
use sqlx::SqlitePool;

use crate::{BudgetRepo, CategoryRepo, DbResult, ExpenseRepo};

pub struct SummaryRepo {
    budgets: BudgetRepo,
    expenses: ExpenseRepo,
    categories: CategoryRepo,
}

impl SummaryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            budgets: BudgetRepo::new(pool.clone()),
            expenses: ExpenseRepo::new(pool.clone()),
            categories: CategoryRepo::new(pool),
        }
    }

    pub async fn summarize(&self, month: &Month) -> DbResult<Summary> {
        let (budget, spent, categories) = tokio::try_join!(
            self.budgets.find_by_month(month),
            self.expenses.spent_by_category(month),
            self.categories.list(),
        )?;

        let summary = summarize(month.clone(), budget.as_ref(), &spent, &categories);

        tracing::debug!(
            month = %month,
            has_budget = budget.is_some(),
            rows = summary.categories.len(),
            orphans = summary.orphans.len(),
            "Summary computed"
        );
        Ok(summary)
    }
}
