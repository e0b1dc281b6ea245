use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timeline_nodes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub year: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub artists: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub style_movement: Option<String>,
    /// Titles of nodes this node influenced
    pub influences: Json,
    /// Titles of nodes that influenced this node
    pub influenced_by: Json,
    pub tags: Json,
    #[sea_orm(column_type = "Double")]
    pub position_x: f64,
    #[sea_orm(column_type = "Double")]
    pub position_y: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
