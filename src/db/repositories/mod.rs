use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use crate::db::{
    entities::{art_movement, artist, artwork, timeline_node},
    enums::{NodeSortField, SortOrder},
    json::contains_ignore_case,
};
use crate::error::{AppError, Result};

/// Filters for listing timeline nodes
#[derive(Debug, Clone, Default)]
pub struct NodeFilter {
    pub tag: Option<String>,
    pub movement: Option<String>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
    pub sort: NodeSortField,
    pub order: SortOrder,
}

pub struct TimelineNodeRepository {
    db: DatabaseConnection,
}

impl TimelineNodeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<timeline_node::Model>> {
        Ok(timeline_node::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list(&self, filter: &NodeFilter) -> Result<Vec<timeline_node::Model>> {
        let mut select = timeline_node::Entity::find();

        if let Some(from) = filter.from_year {
            select = select.filter(timeline_node::Column::Year.gte(from));
        }
        if let Some(to) = filter.to_year {
            select = select.filter(timeline_node::Column::Year.lte(to));
        }

        let column = match filter.sort {
            NodeSortField::Year => timeline_node::Column::Year,
            NodeSortField::Title => timeline_node::Column::Title,
            NodeSortField::CreatedAt => timeline_node::Column::CreatedAt,
        };
        select = match filter.order {
            SortOrder::Asc => select.order_by_asc(column),
            SortOrder::Desc => select.order_by_desc(column),
        };
        // Stable order among equal keys
        select = select.order_by_asc(timeline_node::Column::Title);

        let nodes = select.all(&self.db).await?;

        // Tags and movement names are matched case-insensitively in memory;
        // tags live in a JSON column.
        Ok(nodes
            .into_iter()
            .filter(|node| match &filter.tag {
                Some(tag) => contains_ignore_case(&node.tags, tag),
                None => true,
            })
            .filter(|node| match (&filter.movement, &node.style_movement) {
                (Some(wanted), Some(actual)) => {
                    wanted.trim().to_lowercase() == actual.trim().to_lowercase()
                }
                (Some(_), None) => false,
                (None, _) => true,
            })
            .collect())
    }

    pub async fn create(&self, node: timeline_node::ActiveModel) -> Result<timeline_node::Model> {
        Ok(node.insert(&self.db).await?)
    }

    pub async fn update(&self, node: timeline_node::ActiveModel) -> Result<timeline_node::Model> {
        Ok(node.update(&self.db).await?)
    }

    /// Returns `false` when no node had this id.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        match self.find_by_id(id).await? {
            Some(node) => {
                node.delete(&self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct ArtMovementRepository {
    db: DatabaseConnection,
}

impl ArtMovementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<art_movement::Model>> {
        Ok(art_movement::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<art_movement::Model>> {
        Ok(art_movement::Entity::find()
            .filter(art_movement::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    pub async fn list_by_name(&self) -> Result<Vec<art_movement::Model>> {
        Ok(art_movement::Entity::find()
            .order_by_asc(art_movement::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn list_chronological(&self) -> Result<Vec<art_movement::Model>> {
        Ok(art_movement::Entity::find()
            .order_by_asc(art_movement::Column::StartYear)
            .order_by_asc(art_movement::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Case-insensitive substring match on name or description.
    pub async fn search(&self, query: &str) -> Result<Vec<art_movement::Model>> {
        let pattern = format!("%{}%", escape_like(&query.trim().to_lowercase()));
        let lower = |column: art_movement::Column| {
            Expr::expr(Func::lower(Expr::col((art_movement::Entity, column))))
                .like(LikeExpr::new(pattern.clone()).escape('\\'))
        };

        Ok(art_movement::Entity::find()
            .filter(
                Condition::any()
                    .add(lower(art_movement::Column::Name))
                    .add(lower(art_movement::Column::Description)),
            )
            .order_by_asc(art_movement::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Movements carrying at least one of `tags`, compared case-insensitively.
    pub async fn with_any_tag(&self, tags: &[String]) -> Result<Vec<art_movement::Model>> {
        let movements = self.list_by_name().await?;
        Ok(movements
            .into_iter()
            .filter(|m| tags.iter().any(|tag| contains_ignore_case(&m.tags, tag)))
            .collect())
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(art_movement::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    /// A name taken between the caller's duplicate check and the insert still yields a 409.
    pub async fn create(&self, movement: art_movement::ActiveModel) -> Result<art_movement::Model> {
        movement.insert(&self.db).await.map_err(name_conflict)
    }

    pub async fn update(&self, movement: art_movement::ActiveModel) -> Result<art_movement::Model> {
        movement.update(&self.db).await.map_err(name_conflict)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        match self.find_by_id(id).await? {
            Some(movement) => {
                movement.delete(&self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn name_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("An art movement with this name already exists".to_string())
        }
        _ => AppError::Database(err),
    }
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(artist::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    pub async fn list_by_name(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        Ok(artist.insert(&self.db).await?)
    }

    pub async fn update(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        Ok(artist.update(&self.db).await?)
    }

    /// Artworks keep existing; their `artist_id` is nulled by the foreign key.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        match self.find_by_id(id).await? {
            Some(artist) => {
                artist.delete(&self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Filters for listing artworks
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtworkFilter {
    pub artist_id: Option<Uuid>,
    pub movement_id: Option<Uuid>,
}

pub struct ArtworkRepository {
    db: DatabaseConnection,
}

impl ArtworkRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<artwork::Model>> {
        Ok(artwork::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// By year created, then title
    pub async fn list(&self, filter: ArtworkFilter) -> Result<Vec<artwork::Model>> {
        let mut select = artwork::Entity::find();

        if let Some(artist_id) = filter.artist_id {
            select = select.filter(artwork::Column::ArtistId.eq(artist_id));
        }
        if let Some(movement_id) = filter.movement_id {
            select = select.filter(artwork::Column::MovementId.eq(movement_id));
        }

        Ok(select
            .order_by_asc(artwork::Column::YearCreated)
            .order_by_asc(artwork::Column::Title)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, artwork: artwork::ActiveModel) -> Result<artwork::Model> {
        Ok(artwork.insert(&self.db).await?)
    }

    pub async fn update(&self, artwork: artwork::ActiveModel) -> Result<artwork::Model> {
        Ok(artwork.update(&self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        match self.find_by_id(id).await? {
            Some(artwork) => {
                artwork.delete(&self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
