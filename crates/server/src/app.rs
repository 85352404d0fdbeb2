use crate::{
    doc::ApiDoc,
    routes::{catalog, health, layouts},
};
use axum::{Json, Router, routing::get};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog_path: PathBuf,
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/catalog", get(catalog::get_catalog))
        .route(
            "/layouts",
            get(layouts::list_layouts).post(layouts::save_layout),
        )
        .route(
            "/layouts/{id}",
            get(layouts::get_layout).delete(layouts::delete_layout),
        );

    Router::new()
        .nest("/api", api)
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
