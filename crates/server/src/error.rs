use crate::dtos::layout::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced to API clients as `{ "error": message }`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to load catalog data")]
    CatalogUnavailable(String),

    #[error("Layout not found")]
    LayoutNotFound,

    #[error("Failed to load layouts")]
    ListFailed(#[source] DbErr),

    #[error("Failed to save layout")]
    SaveFailed(#[source] DbErr),

    #[error("Failed to load layout")]
    LoadFailed(#[source] DbErr),

    #[error("Failed to delete layout")]
    DeleteFailed(#[source] DbErr),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::LayoutNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::LayoutNotFound => {}
            Self::CatalogUnavailable(reason) => error!("{self}: {reason}"),
            Self::ListFailed(e) | Self::SaveFailed(e) | Self::LoadFailed(e) | Self::DeleteFailed(e) => {
                error!("{self}: {e}")
            }
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
