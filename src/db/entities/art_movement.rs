use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "art_movements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique, column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub theoretical_foundation: Option<String>,
    /// JSON array of strings
    pub forms: Json,
    /// JSON array of `{ "name": ..., "works": [...] }`
    pub representative_artists: Json,
    pub characteristics: Json,
    pub tags: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub context: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artwork::Entity")]
    Artworks,
}

impl Related<super::artwork::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artworks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// An artist listed on a movement, stored inline in `representative_artists`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeArtist {
    pub name: String,
    #[serde(default)]
    pub works: Vec<String>,
}
