//! Budget Handlers
//!
//! A month has at most one budget. Posting a budget for a month that already
//! has one replaces it.

use axum::{extract::State, Json};
use budgetd_types::{Allocation, NewBudget};
use std::sync::Arc;

use crate::dto::{BudgetResponse, UpsertBudgetRequest};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{MonthPath, ValidatedJson};
use crate::state::AppState;

/// Create or replace the budget of a month
#[utoipa::path(
    post,
    path = "/api/budgets",
    tag = "Budgets",
    request_body = UpsertBudgetRequest,
    responses(
        (status = 200, description = "Budget stored", body = BudgetResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_budget(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpsertBudgetRequest>,
) -> ApiResult<Json<BudgetResponse>> {
    let new = NewBudget::new(
        request.month,
        request.income,
        request.allocations.into_iter().map(Allocation::from).collect(),
    )?;

    if state.strict_category_refs {
        let missing = state
            .db
            .category_repo()
            .missing_ids(&new.category_ids())
            .await?;
        if !missing.is_empty() {
            return Err(ApiError::UnknownCategory(missing.join(", ")));
        }
    }

    let budget = state.db.budget_repo().upsert(&new).await?;

    metrics::counter!("budgetd_budgets_upserted_total").increment(1);
    tracing::info!(
        budget_id = %budget.id,
        month = %budget.month,
        income = budget.income,
        "Budget upserted"
    );

    Ok(Json(budget.into()))
}

/// Get the budget of a month
#[utoipa::path(
    get,
    path = "/api/budgets/{month}",
    tag = "Budgets",
    params(
        ("month" = String, Path, description = "Month as YYYY-MM", example = "2024-01")
    ),
    responses(
        (status = 200, description = "Budget", body = BudgetResponse),
        (status = 400, description = "Malformed month", body = crate::error::ErrorResponse),
        (status = 404, description = "Budget not found for month", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    MonthPath(month): MonthPath,
) -> ApiResult<Json<BudgetResponse>> {
    let budget = state.db.budget_repo().get(&month).await?;
    Ok(Json(budget.into()))
}
