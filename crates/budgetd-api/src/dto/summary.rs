//! Summary DTOs

use budgetd_types::{CategorySummary, Month, OrphanSummary, Summary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One category row of the summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryResponse {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub target: f64,
    pub spent: f64,
    /// Percent of target spent, null when the target is 0
    pub progress: Option<f64>,
}

impl From<CategorySummary> for CategorySummaryResponse {
    fn from(row: CategorySummary) -> Self {
        Self {
            id: row.id,
            name: row.name,
            emoji: row.emoji,
            target: row.target,
            spent: row.spent,
            progress: row.progress,
        }
    }
}

/// Money attached to a category id with no stored category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrphanSummaryResponse {
    pub category_id: String,
    pub target: f64,
    pub spent: f64,
}

impl From<OrphanSummary> for OrphanSummaryResponse {
    fn from(orphan: OrphanSummary) -> Self {
        Self {
            category_id: orphan.category_id,
            target: orphan.target,
            spent: orphan.spent,
        }
    }
}

/// Monthly summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    #[schema(value_type = String, example = "2024-01")]
    pub month: Month,
    pub income: f64,
    pub total_target: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub categories: Vec<CategorySummaryResponse>,
    pub orphans: Vec<OrphanSummaryResponse>,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            month: summary.month,
            income: summary.income,
            total_target: summary.total_target,
            total_spent: summary.total_spent,
            remaining: summary.remaining,
            categories: summary.categories.into_iter().map(Into::into).collect(),
            orphans: summary.orphans.into_iter().map(Into::into).collect(),
        }
    }
}
