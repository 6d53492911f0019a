//! Budget DTOs

use budgetd_types::{Allocation, Budget, Month};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Per-category target inside a budget
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AllocationDto {
    /// Category id, not checked against stored categories unless strict references are on
    pub category_id: String,
    #[validate(range(min = 0.0, message = "Target must be non-negative"))]
    #[schema(example = 300.0)]
    pub target: f64,
}

impl From<AllocationDto> for Allocation {
    fn from(dto: AllocationDto) -> Self {
        Self {
            category_id: dto.category_id,
            target: dto.target,
        }
    }
}

impl From<Allocation> for AllocationDto {
    fn from(allocation: Allocation) -> Self {
        Self {
            category_id: allocation.category_id,
            target: allocation.target,
        }
    }
}

/// Create or replace the budget of a month
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertBudgetRequest {
    #[schema(value_type = String, example = "2024-01")]
    pub month: Month,
    #[validate(range(min = 0.0, message = "Income must be non-negative"))]
    #[schema(example = 1000.0)]
    pub income: f64,
    #[serde(default)]
    #[validate(nested)]
    pub allocations: Vec<AllocationDto>,
}

/// Budget
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetResponse {
    pub id: String,
    #[schema(value_type = String, example = "2024-01")]
    pub month: Month,
    pub income: f64,
    pub allocations: Vec<AllocationDto>,
}

impl From<Budget> for BudgetResponse {
    fn from(budget: Budget) -> Self {
        Self {
            id: budget.id,
            month: budget.month,
            income: budget.income,
            allocations: budget.allocations.into_iter().map(AllocationDto::from).collect(),
        }
    }
}
