//! In-memory gateway for tests

use crate::{
    error::{GatewayError, GatewayResult},
    gateway::{LayoutGateway, LayoutSummary},
};
use async_trait::async_trait;
use chrono::{NaiveDate, TimeDelta};
use planner::{CatalogPayload, Snapshot};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use uuid::Uuid;

pub fn catalog() -> CatalogPayload {
    serde_json::from_value(json!({
        "professors": [{ "id": "p1", "name": "Ayse Demir", "dept": "CTIS" }],
        "courses": [
            {
                "id": "c151", "code": "CTIS 151", "type": "ctis", "sem": 1, "origSem": 1,
                "credits": 3, "ects": 6,
                "sections": [{ "profId": "p1", "sem": "fall", "fallCount": 2, "springCount": 0 }]
            },
            {
                "id": "slot3", "code": "IS ELEC 1", "type": "is-elective", "sem": 3, "origSem": 3,
                "prereqs": ["c151"]
            }
        ],
        "isElectives": [
            {
                "id": "is1", "code": "IS 301", "prereqCodes": "CTIS 151",
                "sections": [{ "profId": "p1", "sem": "spring", "fallCount": 0, "springCount": 1 }]
            }
        ]
    }))
    .unwrap()
}

#[derive(Default)]
pub struct FakeGateway {
    pub catalog: Option<CatalogPayload>,
    /// Stored rows, oldest first
    pub layouts: Mutex<Vec<(LayoutSummary, Value)>>,
    pub fail_saves: AtomicBool,
    /// Successful `save_layout` calls
    pub save_count: AtomicUsize,
}

impl FakeGateway {
    pub fn with_catalog() -> Self {
        Self {
            catalog: Some(catalog()),
            ..Self::default()
        }
    }

    pub fn saved_names(&self) -> Vec<String> {
        self.layouts
            .lock()
            .unwrap()
            .iter()
            .map(|(summary, _)| summary.name.clone())
            .collect()
    }

    /// Stores a raw layout row as the server would return it
    pub fn insert_raw(&self, name: &str, state: Value) -> Uuid {
        self.insert(name, "", state).id
    }

    fn insert(&self, name: &str, saved_by: &str, state: Value) -> LayoutSummary {
        let saved_by = match saved_by.trim() {
            "" => "Anonymous",
            by => by,
        };
        let mut layouts = self.layouts.lock().unwrap();
        let summary = LayoutSummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            saved_by: saved_by.to_string(),
            saved_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                + TimeDelta::minutes(layouts.len() as i64),
        };
        layouts.push((summary.clone(), state));
        summary
    }
}

fn unavailable() -> GatewayError {
    GatewayError::Status(StatusCode::INTERNAL_SERVER_ERROR)
}

#[async_trait]
impl LayoutGateway for FakeGateway {
    async fn fetch_catalog(&self) -> GatewayResult<CatalogPayload> {
        self.catalog.clone().ok_or_else(unavailable)
    }

    async fn list_layouts(&self) -> GatewayResult<Vec<LayoutSummary>> {
        let layouts = self.layouts.lock().unwrap();
        Ok(layouts.iter().rev().map(|(s, _)| s.clone()).collect())
    }

    async fn save_layout(
        &self,
        name: &str,
        saved_by: &str,
        snapshot: &Snapshot,
    ) -> GatewayResult<LayoutSummary> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(unavailable());
        }

        let state = serde_json::to_value(snapshot)?;
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.insert(name, saved_by, state))
    }

    async fn fetch_layout(&self, id: Uuid) -> GatewayResult<Value> {
        let layouts = self.layouts.lock().unwrap();
        layouts
            .iter()
            .find(|(s, _)| s.id == id)
            .map(|(s, state)| {
                json!({
                    "id": s.id,
                    "name": s.name,
                    "saved_by": s.saved_by,
                    "saved_at": s.saved_at,
                    "state": state,
                })
            })
            .ok_or(GatewayError::Status(StatusCode::NOT_FOUND))
    }

    async fn delete_layout(&self, id: Uuid) -> GatewayResult<()> {
        self.layouts.lock().unwrap().retain(|(s, _)| s.id != id);
        Ok(())
    }
}
