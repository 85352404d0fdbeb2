use crate::error::GatewayResult;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use planner::{CatalogPayload, Snapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Metadata of a saved layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub id: Uuid,
    pub name: String,
    pub saved_by: String,
    pub saved_at: NaiveDateTime,
}

/// Where the catalog comes from and layouts are kept
#[async_trait]
pub trait LayoutGateway: Send + Sync {
    async fn fetch_catalog(&self) -> GatewayResult<CatalogPayload>;

    /// Saved layouts, newest first
    async fn list_layouts(&self) -> GatewayResult<Vec<LayoutSummary>>;

    async fn save_layout(
        &self,
        name: &str,
        saved_by: &str,
        snapshot: &Snapshot,
    ) -> GatewayResult<LayoutSummary>;

    /// The stored layout as raw JSON, snapshot nested under `state`
    async fn fetch_layout(&self, id: Uuid) -> GatewayResult<Value>;

    async fn delete_layout(&self, id: Uuid) -> GatewayResult<()>;
}
