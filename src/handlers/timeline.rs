use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::{
    db::{
        entities::timeline_node,
        enums::{NodeSortField, SortOrder},
        json::{encode, string_list},
        repositories::{NodeFilter, TimelineNodeRepository},
    },
    error::{AppError, Result},
    state::AppState,
    timeline::{
        coordinates::percentage_to_pixel, Action, InfluenceEdge, NodePlacement, Position,
        TimelineEntry, TimelineStore,
    },
};

use super::{non_blank, nullable, parse_id, require_text, ApiJson, ApiQuery};

#[derive(Deserialize)]
pub struct ListTimelineQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
    pub tag: Option<String>,
    pub movement: Option<String>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
}

impl ListTimelineQuery {
    fn into_filter(self) -> NodeFilter {
        NodeFilter {
            tag: self.tag.filter(|t| !t.trim().is_empty()),
            movement: self.movement.filter(|m| !m.trim().is_empty()),
            from_year: self.from_year,
            to_year: self.to_year,
            sort: self
                .sort
                .as_deref()
                .and_then(NodeSortField::from_str)
                .unwrap_or_default(),
            order: self
                .order
                .as_deref()
                .and_then(SortOrder::from_str)
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimelineNodeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    pub image_url: Option<String>,
    pub artists: Vec<String>,
    pub style_movement: Option<String>,
    pub influences: Vec<String>,
    pub influenced_by: Vec<String>,
    pub tags: Vec<String>,
    pub position: Position,
    pub created_at: String,
    pub updated_at: String,
}

impl From<timeline_node::Model> for TimelineNodeResponse {
    fn from(node: timeline_node::Model) -> Self {
        Self {
            id: node.id,
            artists: string_list(&node.artists),
            influences: string_list(&node.influences),
            influenced_by: string_list(&node.influenced_by),
            tags: string_list(&node.tags),
            position: Position::new(node.position_x, node.position_y),
            title: node.title,
            description: node.description,
            year: node.year,
            image_url: node.image_url,
            style_movement: node.style_movement,
            created_at: node.created_at.to_rfc3339(),
            updated_at: node.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateTimelineNodeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    #[serde(alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(alias = "styleMovement")]
    pub style_movement: Option<String>,
    #[serde(default)]
    pub influences: Vec<String>,
    #[serde(default, alias = "influencedBy")]
    pub influenced_by: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub position: Option<Position>,
}

/// Absent fields are kept; `null` clears the nullable ones.
#[derive(Deserialize)]
pub struct UpdateTimelineNodeRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub year: Option<i32>,
    #[serde(default, alias = "imageUrl", deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub artists: Option<Vec<String>>,
    #[serde(default, alias = "styleMovement", deserialize_with = "nullable")]
    pub style_movement: Option<Option<String>>,
    pub influences: Option<Vec<String>>,
    #[serde(alias = "influencedBy")]
    pub influenced_by: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub position: Option<Position>,
}

/// List timeline nodes, by year unless `sort` says otherwise
pub async fn list_nodes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListTimelineQuery>,
) -> Result<Json<Vec<TimelineNodeResponse>>> {
    let nodes = TimelineNodeRepository::new(state.db.clone())
        .list(&query.into_filter())
        .await?;

    Ok(Json(nodes.into_iter().map(Into::into).collect()))
}

pub async fn get_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TimelineNodeResponse>> {
    let id = parse_id(&id)?;
    let node = TimelineNodeRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Timeline node not found".to_string()))?;

    Ok(Json(node.into()))
}

pub async fn create_node(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTimelineNodeRequest>,
) -> Result<(StatusCode, Json<TimelineNodeResponse>)> {
    let title = require_text("title", payload.title)?;
    let year = payload
        .year
        .ok_or_else(|| AppError::Validation("year is required".to_string()))?;
    let position = payload.position.unwrap_or_default();

    let now = Utc::now();
    let node = timeline_node::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        description: Set(payload.description),
        year: Set(year),
        image_url: Set(payload.image_url),
        artists: Set(encode(&payload.artists)?),
        style_movement: Set(payload.style_movement),
        influences: Set(encode(&payload.influences)?),
        influenced_by: Set(encode(&payload.influenced_by)?),
        tags: Set(encode(&payload.tags)?),
        position_x: Set(position.x),
        position_y: Set(position.y),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };

    let created = TimelineNodeRepository::new(state.db.clone())
        .create(node)
        .await?;
    tracing::info!(id = %created.id, title = %created.title, "Created timeline node");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Apply only the supplied fields
pub async fn update_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateTimelineNodeRequest>,
) -> Result<Json<TimelineNodeResponse>> {
    let id = parse_id(&id)?;
    let repo = TimelineNodeRepository::new(state.db.clone());
    let node = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Timeline node not found".to_string()))?;

    let mut active: timeline_node::ActiveModel = node.into();

    if let Some(title) = non_blank("title", payload.title)? {
        active.title = Set(title);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(year) = payload.year {
        active.year = Set(year);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(artists) = payload.artists {
        active.artists = Set(encode(&artists)?);
    }
    if let Some(style_movement) = payload.style_movement {
        active.style_movement = Set(style_movement);
    }
    if let Some(influences) = payload.influences {
        active.influences = Set(encode(&influences)?);
    }
    if let Some(influenced_by) = payload.influenced_by {
        active.influenced_by = Set(encode(&influenced_by)?);
    }
    if let Some(tags) = payload.tags {
        active.tags = Set(encode(&tags)?);
    }
    if let Some(position) = payload.position {
        active.position_x = Set(position.x);
        active.position_y = Set(position.y);
    }

    active.updated_at = Set(Utc::now().into());
    let updated = repo.update(active).await?;
    tracing::info!(id = %updated.id, "Updated timeline node");

    Ok(Json(updated.into()))
}

pub async fn delete_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    let deleted = TimelineNodeRepository::new(state.db.clone())
        .delete(id)
        .await?;

    if !deleted {
        return Err(AppError::NotFound("Timeline node not found".to_string()));
    }
    tracing::info!(id = %id, "Deleted timeline node");

    Ok(Json(json!({})))
}

/// Load every node into a fresh store
pub async fn load_store(state: &AppState) -> Result<TimelineStore> {
    let nodes = TimelineNodeRepository::new(state.db.clone())
        .list(&NodeFilter::default())
        .await?;

    Ok(TimelineStore::with_nodes(
        nodes.iter().map(TimelineEntry::from).collect(),
    ))
}

#[derive(Deserialize)]
pub struct LayoutQuery {
    #[serde(default)]
    pub offset: f64,
    /// Track width in pixels; enables `pixel_x` in the response
    pub width: Option<f64>,
}

#[derive(Serialize)]
pub struct PlacedNodeResponse {
    #[serde(flatten)]
    pub placement: NodePlacement,
    pub pixel_x: Option<f64>,
}

#[derive(Serialize)]
pub struct LayoutResponse {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub offset: f64,
    pub nodes: Vec<PlacedNodeResponse>,
    pub edges: Vec<InfluenceEdge>,
}

pub async fn get_layout(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LayoutQuery>,
) -> Result<Json<LayoutResponse>> {
    if !query.offset.is_finite() {
        return Err(AppError::Validation("offset must be a finite number".to_string()));
    }
    if let Some(width) = query.width {
        if !width.is_finite() || width <= 0.0 {
            return Err(AppError::Validation("width must be a positive number".to_string()));
        }
    }

    let mut store = load_store(&state).await?;
    store.dispatch(Action::Panned {
        delta_percent: query.offset,
    });

    let range = store.year_range();
    let nodes = store
        .layout()
        .into_iter()
        .map(|placement| PlacedNodeResponse {
            pixel_x: query
                .width
                .map(|width| percentage_to_pixel(placement.percentage, width)),
            placement,
        })
        .collect();

    Ok(Json(LayoutResponse {
        min_year: range.map(|r| r.min()),
        max_year: range.map(|r| r.max()),
        offset: store.offset(),
        nodes,
        edges: store.edges().to_vec(),
    }))
}

#[derive(Serialize, Debug, PartialEq)]
pub struct InfluenceResponse {
    pub source: Uuid,
    pub source_title: String,
    pub target: Uuid,
    pub target_title: String,
}

pub async fn list_influences(
    State(state): State<AppState>,
) -> Result<Json<Vec<InfluenceResponse>>> {
    let store = load_store(&state).await?;

    let influences = store
        .edges()
        .iter()
        .filter_map(|edge| {
            let source = store.node(edge.source)?;
            let target = store.node(edge.target)?;
            Some(InfluenceResponse {
                source: source.id,
                source_title: source.title.clone(),
                target: target.id,
                target_title: target.title.clone(),
            })
        })
        .collect();

    Ok(Json(influences))
}
