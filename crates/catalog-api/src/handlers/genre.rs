//! Genre handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use catalog_service::genre::{CreateGenreInput, UpdateGenreInput};

use crate::dto::request::{CreateGenreRequest, UpdateGenreRequest};
use crate::dto::response::{ApiResponse, GenreResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::ListParams;
use crate::state::AppState;

/// GET /api/genres
pub async fn list_genres(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<GenreResponse>>, ApiError> {
    let output = state.genre_service.list(params.into_list_input()).await?;

    let total_pages = output.total_pages();
    Ok(Json(PaginatedResponse {
        total: output.total,
        page: output.page,
        per_page: output.per_page,
        total_pages,
        items: output.items.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/genres/{id}
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<GenreResponse>>, ApiError> {
    let output = state.genre_service.get(id).await?;
    Ok(Json(ApiResponse::ok(output.into())))
}

/// POST /api/genres
pub async fn create_genre(
    State(state): State<AppState>,
    Json(req): Json<CreateGenreRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GenreResponse>>), ApiError> {
    let output = state
        .genre_service
        .create(CreateGenreInput {
            name: req.name,
            is_active: req.is_active,
            categories_ids: req.categories_ids,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(output.into()))))
}

/// PUT /api/genres/{id}
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateGenreRequest>,
) -> Result<Json<ApiResponse<GenreResponse>>, ApiError> {
    let output = state
        .genre_service
        .update(UpdateGenreInput {
            id,
            name: req.name,
            is_active: req.is_active,
            categories_ids: req.categories_ids,
        })
        .await?;

    Ok(Json(ApiResponse::ok(output.into())))
}

/// DELETE /api/genres/{id}
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.genre_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
