//! Summary Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::dto::SummaryResponse;
use crate::error::ApiResult;
use crate::extractors::MonthPath;
use crate::state::AppState;

/// Targets against actual spend for a month.
///
/// A month without a budget still gets a summary with zero income.
#[utoipa::path(
    get,
    path = "/api/summary/{month}",
    tag = "Summary",
    params(
        ("month" = String, Path, description = "Month as YYYY-MM", example = "2024-01")
    ),
    responses(
        (status = 200, description = "Monthly summary", body = SummaryResponse),
        (status = 400, description = "Malformed month", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    MonthPath(month): MonthPath,
) -> ApiResult<Json<SummaryResponse>> {
    let summary = state.db.summary_repo().summarize(&month).await?;

    metrics::counter!("budgetd_summaries_computed_total").increment(1);

    Ok(Json(summary.into()))
}
