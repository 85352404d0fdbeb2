use crate::{app::AppState, error::ApiError};
use axum::{Json, extract::State};
use planner::CatalogPayload;
use std::path::Path;

/// Reads and validates the catalog file
pub async fn load_catalog(path: &Path) -> Result<CatalogPayload, ApiError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ApiError::CatalogUnavailable(format!("{}: {e}", path.display())))?;

    serde_json::from_str(&contents)
        .map_err(|e| ApiError::CatalogUnavailable(format!("{}: {e}", path.display())))
}

/// Get the reference catalog: courses, professors and IS electives
#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Catalog loaded", content_type = "application/json"),
        (status = 500, description = "Catalog file missing or malformed", body = crate::dtos::layout::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_catalog(State(state): State<AppState>) -> Result<Json<CatalogPayload>, ApiError> {
    // Read on every request so the file can be edited while the server runs
    let catalog = load_catalog(&state.catalog_path).await?;
    Ok(Json(catalog))
}
