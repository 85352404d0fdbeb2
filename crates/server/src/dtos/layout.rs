use chrono::NaiveDateTime;
use database::{entities::layouts, services::layout::LayoutSummary};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LayoutSummaryResponse {
    pub id: Uuid,
    pub name: String,
    pub saved_by: String,
    pub saved_at: NaiveDateTime,
}

impl From<LayoutSummary> for LayoutSummaryResponse {
    fn from(summary: LayoutSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            saved_by: summary.saved_by,
            saved_at: summary.saved_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LayoutResponse {
    pub id: Uuid,
    pub name: String,
    pub saved_by: String,
    pub saved_at: NaiveDateTime,
    /// Snapshot of the board: `{ courses, profs, ISCAT }`
    #[schema(value_type = Object)]
    pub state: Value,
}

impl From<layouts::Model> for LayoutResponse {
    fn from(model: layouts::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            saved_by: model.saved_by,
            saved_at: model.saved_at,
            state: model.state,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveLayoutRequest {
    /// Defaults to "Unnamed Layout" when blank
    pub name: Option<String>,
    /// Defaults to "Anonymous" when blank
    pub saved_by: Option<String>,
    #[schema(value_type = Object)]
    pub state: Value,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveLayoutResponse {
    pub success: bool,
    #[serde(flatten)]
    pub layout: LayoutSummaryResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteLayoutResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
