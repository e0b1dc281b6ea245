use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artworks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    pub artist_id: Option<Uuid>,
    pub movement_id: Option<Uuid>,
    pub year_created: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub medium: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub dimensions: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub images: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Artist,
    #[sea_orm(
        belongs_to = "super::art_movement::Entity",
        from = "Column::MovementId",
        to = "super::art_movement::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    ArtMovement,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::art_movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtMovement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
