//! Category handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use catalog_service::category::{CreateCategoryInput, UpdateCategoryInput};

use crate::dto::request::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::response::{ApiResponse, CategoryResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::ListParams;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<CategoryResponse>>, ApiError> {
    let output = state
        .category_service
        .list(params.into_list_input())
        .await?;

    let total_pages = output.total_pages();
    Ok(Json(PaginatedResponse {
        total: output.total,
        page: output.page,
        per_page: output.per_page,
        total_pages,
        items: output.items.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CategoryResponse>>, ApiError> {
    let output = state.category_service.get(id).await?;
    Ok(Json(ApiResponse::ok(output.into())))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponse>>), ApiError> {
    let output = state
        .category_service
        .create(CreateCategoryInput {
            name: req.name,
            description: req.description,
            is_active: req.is_active,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(output.into()))))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<CategoryResponse>>, ApiError> {
    let output = state
        .category_service
        .update(UpdateCategoryInput {
            id,
            name: req.name,
            description: req.description,
            is_active: req.is_active,
        })
        .await?;

    Ok(Json(ApiResponse::ok(output.into())))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.category_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
