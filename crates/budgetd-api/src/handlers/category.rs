//! Category Handlers

use axum::{extract::State, http::StatusCode, Json};
use budgetd_types::NewCategory;
use std::sync::Arc;

use crate::dto::{CategoryResponse, CreateCategoryRequest};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<CategoryResponse>)> {
    let new = NewCategory::new(request.name, request.emoji)?;

    let category = state
        .db
        .category_repo()
        .create(&new.name, new.emoji.as_deref())
        .await?;

    metrics::counter!("budgetd_categories_created_total").increment(1);
    tracing::info!(category_id = %category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryResponse>)
    )
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let categories = state.db.category_repo().list().await?;
    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}
