use crate::{
    dtos::layout::{
        DeleteLayoutResponse, ErrorResponse, LayoutResponse, LayoutSummaryResponse,
        SaveLayoutRequest, SaveLayoutResponse,
    },
    routes::{catalog, health, layouts},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        catalog::get_catalog,
        layouts::list_layouts,
        layouts::save_layout,
        layouts::get_layout,
        layouts::delete_layout
    ),
    components(schemas(
        LayoutSummaryResponse,
        LayoutResponse,
        SaveLayoutRequest,
        SaveLayoutResponse,
        DeleteLayoutResponse,
        ErrorResponse
    )),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Catalog", description = "Reference course and staff data"),
        (name = "Layouts", description = "Saved planning boards"),
    ),
    info(
        title = "Curriculum Planner API",
        version = "1.0.0",
        description = "Catalog and saved layouts for the curriculum planning board",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.contains(&&"/api/layouts/{id}".to_string()));
        assert!(paths.contains(&&"/api/catalog".to_string()));
        assert!(paths.contains(&&"/health".to_string()));
    }
}
