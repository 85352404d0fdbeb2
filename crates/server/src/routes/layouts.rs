use crate::{
    app::AppState,
    dtos::layout::{
        DeleteLayoutResponse, ErrorResponse, LayoutResponse, LayoutSummaryResponse,
        SaveLayoutRequest, SaveLayoutResponse,
    },
    error::ApiError,
};
use axum::{
    Json,
    extract::{Path, State},
};
use database::services::layout::{LayoutService, LayoutSummary};
use uuid::Uuid;

/// List saved layouts, newest first
#[utoipa::path(
    get,
    path = "/api/layouts",
    responses(
        (status = 200, description = "Layout metadata", body = Vec<LayoutSummaryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Layouts"
)]
pub async fn list_layouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<LayoutSummaryResponse>>, ApiError> {
    let layouts = LayoutService::list_layouts(&state.db)
        .await
        .map_err(ApiError::ListFailed)?;

    Ok(Json(layouts.into_iter().map(Into::into).collect()))
}

/// Save the board under a name
#[utoipa::path(
    post,
    path = "/api/layouts",
    request_body = SaveLayoutRequest,
    responses(
        (status = 200, description = "Layout saved", body = SaveLayoutResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Layouts"
)]
pub async fn save_layout(
    State(state): State<AppState>,
    Json(request): Json<SaveLayoutRequest>,
) -> Result<Json<SaveLayoutResponse>, ApiError> {
    let layout =
        LayoutService::save_layout(&state.db, request.name, request.saved_by, request.state)
            .await
            .map_err(ApiError::SaveFailed)?;

    Ok(Json(SaveLayoutResponse {
        success: true,
        layout: LayoutSummary::from(layout).into(),
    }))
}

/// Load a layout with its full snapshot
#[utoipa::path(
    get,
    path = "/api/layouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Layout ID")
    ),
    responses(
        (status = 200, description = "Layout found", body = LayoutResponse),
        (status = 404, description = "Layout not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Layouts"
)]
pub async fn get_layout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LayoutResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::LayoutNotFound)?;

    match LayoutService::get_layout(&state.db, id)
        .await
        .map_err(ApiError::LoadFailed)?
    {
        Some(layout) => Ok(Json(layout.into())),
        None => Err(ApiError::LayoutNotFound),
    }
}

/// Delete a layout
#[utoipa::path(
    delete,
    path = "/api/layouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Layout ID")
    ),
    responses(
        (status = 200, description = "Layout deleted or already gone", body = DeleteLayoutResponse),
        (status = 404, description = "Malformed layout ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Layouts"
)]
pub async fn delete_layout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteLayoutResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::LayoutNotFound)?;

    LayoutService::delete_layout(&state.db, id)
        .await
        .map_err(ApiError::DeleteFailed)?;

    Ok(Json(DeleteLayoutResponse { success: true }))
}
