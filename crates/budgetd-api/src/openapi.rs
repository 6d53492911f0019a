//! OpenAPI Documentation
//!
//! OpenAPI 3.0 document for the budgetd API.

use utoipa::OpenApi;

use crate::dto;
use crate::handlers;
use crate::error::ErrorResponse;

/// budgetd API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "budgetd API",
        description = "Personal budget tracker: categories, monthly budgets, expenses and monthly summaries.",
        version = "0.1.0",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local Development")
    ),
    paths(
        // Health
        handlers::health::root,
        handlers::health::probe,
        handlers::health::health_check,
        handlers::health::readiness_check,
        // Categories
        handlers::category::create_category,
        handlers::category::list_categories,
        // Budgets
        handlers::budget::upsert_budget,
        handlers::budget::get_budget,
        // Expenses
        handlers::expense::create_expense,
        handlers::expense::list_expenses,
        // Summary
        handlers::summary::get_summary,
    ),
    components(
        schemas(
            // Common
            ErrorResponse,
            dto::MessageResponse,
            dto::ProbeResponse,
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::ComponentStatus,
            // Categories
            dto::CreateCategoryRequest,
            dto::CategoryResponse,
            // Budgets
            dto::AllocationDto,
            dto::UpsertBudgetRequest,
            dto::BudgetResponse,
            // Expenses
            dto::CreateExpenseRequest,
            dto::ExpenseResponse,
            // Summary
            dto::SummaryResponse,
            dto::CategorySummaryResponse,
            dto::OrphanSummaryResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health and store diagnostics"),
        (name = "Categories", description = "Spending categories"),
        (name = "Budgets", description = "Monthly budget plans"),
        (name = "Expenses", description = "Expense ledger"),
        (name = "Summary", description = "Monthly targets against actual spend")
    )
)]
pub struct ApiDoc;

/// Get the OpenAPI JSON document
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_json()
}
