use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named snapshot of a planning board
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "layouts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub saved_by: String,
    pub saved_at: DateTime,
    /// The snapshot as saved: `{ courses, profs, ISCAT }`
    pub state: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
