//! Expense Handlers

use axum::{extract::State, http::StatusCode, Json};
use budgetd_types::NewExpense;
use std::sync::Arc;

use crate::dto::{CreateExpenseRequest, ExpenseResponse};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{MonthPath, ValidatedJson};
use crate::state::AppState;

/// Record an expense
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 201, description = "Expense recorded", body = ExpenseResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateExpenseRequest>,
) -> ApiResult<(StatusCode, Json<ExpenseResponse>)> {
    let new = NewExpense::new(
        request.month,
        request.category_id,
        request.amount,
        request.note,
        request.spent_on,
    )?;

    if state.strict_category_refs && !state.db.category_repo().exists(&new.category_id).await? {
        return Err(ApiError::UnknownCategory(new.category_id));
    }

    let expense = state.db.expense_repo().add(&new).await?;

    metrics::counter!("budgetd_expenses_added_total").increment(1);
    tracing::info!(
        expense_id = %expense.id,
        month = %expense.month,
        amount = expense.amount,
        "Expense added"
    );

    Ok((StatusCode::CREATED, Json(expense.into())))
}

/// List the expenses of a month
#[utoipa::path(
    get,
    path = "/api/expenses/{month}",
    tag = "Expenses",
    params(
        ("month" = String, Path, description = "Month as YYYY-MM", example = "2024-01")
    ),
    responses(
        (status = 200, description = "Expenses of the month", body = Vec<ExpenseResponse>),
        (status = 400, description = "Malformed month", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    MonthPath(month): MonthPath,
) -> ApiResult<Json<Vec<ExpenseResponse>>> {
    let expenses = state.db.expense_repo().list_by_month(&month).await?;
    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}
