use crate::{
    error::{GatewayError, GatewayResult},
    gateway::{LayoutGateway, LayoutSummary},
};
use async_trait::async_trait;
use log::debug;
use planner::{CatalogPayload, Snapshot};
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use uuid::Uuid;

/// API base used when neither `--api` nor `PLANNER_API_BASE` is given
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

#[derive(Serialize)]
struct SaveLayoutBody<'a> {
    name: &'a str,
    saved_by: &'a str,
    state: &'a Snapshot,
}

/// [`LayoutGateway`] backed by the planner REST API
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base: String,
}

impl HttpGateway {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    async fn json<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }
        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let url = self.url(path);
        debug!("GET {url}");
        Self::json(self.client.get(&url).send().await?).await
    }
}

#[async_trait]
impl LayoutGateway for HttpGateway {
    async fn fetch_catalog(&self) -> GatewayResult<CatalogPayload> {
        self.get("catalog").await
    }

    async fn list_layouts(&self) -> GatewayResult<Vec<LayoutSummary>> {
        self.get("layouts").await
    }

    async fn save_layout(
        &self,
        name: &str,
        saved_by: &str,
        snapshot: &Snapshot,
    ) -> GatewayResult<LayoutSummary> {
        let url = self.url("layouts");
        debug!("POST {url}");

        let body = SaveLayoutBody {
            name,
            saved_by,
            state: snapshot,
        };
        Self::json(self.client.post(&url).json(&body).send().await?).await
    }

    async fn fetch_layout(&self, id: Uuid) -> GatewayResult<Value> {
        self.get(&format!("layouts/{id}")).await
    }

    async fn delete_layout(&self, id: Uuid) -> GatewayResult<()> {
        let url = self.url(&format!("layouts/{id}"));
        debug!("DELETE {url}");

        let _: Value = Self::json(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
