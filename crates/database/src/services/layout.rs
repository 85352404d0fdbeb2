use crate::entities::layouts;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryOrder, QuerySelect, prelude::DateTime,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const DEFAULT_LAYOUT_NAME: &str = "Unnamed Layout";
pub const DEFAULT_SAVED_BY: &str = "Anonymous";

/// A layout row without its snapshot
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct LayoutSummary {
    pub id: Uuid,
    pub name: String,
    pub saved_by: String,
    pub saved_at: DateTime,
}

impl From<layouts::Model> for LayoutSummary {
    fn from(model: layouts::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            saved_by: model.saved_by,
            saved_at: model.saved_at,
        }
    }
}

fn non_blank(value: Option<String>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub struct LayoutService;

impl LayoutService {
    /// Lists saved layouts, newest first
    pub async fn list_layouts(db: &DatabaseConnection) -> Result<Vec<LayoutSummary>, DbErr> {
        layouts::Entity::find()
            .select_only()
            .column(layouts::Column::Id)
            .column(layouts::Column::Name)
            .column(layouts::Column::SavedBy)
            .column(layouts::Column::SavedAt)
            .order_by_desc(layouts::Column::SavedAt)
            .into_model::<LayoutSummary>()
            .all(db)
            .await
    }

    /// Stores a snapshot under a name; blank names and authors get defaults
    pub async fn save_layout(
        db: &DatabaseConnection,
        name: Option<String>,
        saved_by: Option<String>,
        state: Value,
    ) -> Result<layouts::Model, DbErr> {
        let layout = layouts::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(non_blank(name, DEFAULT_LAYOUT_NAME)),
            saved_by: Set(non_blank(saved_by, DEFAULT_SAVED_BY)),
            saved_at: Set(Utc::now().naive_utc()),
            state: Set(state),
        }
        .insert(db)
        .await?;

        info!("Saved layout {} ({}) by {}", layout.name, layout.id, layout.saved_by);
        Ok(layout)
    }

    pub async fn get_layout(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<layouts::Model>, DbErr> {
        layouts::Entity::find_by_id(id).one(db).await
    }

    /// Deletes a layout, returning whether a row was removed
    pub async fn delete_layout(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let result = layouts::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
