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
        entities::art_movement::{self, RepresentativeArtist},
        json::{decode, encode, string_list},
        repositories::ArtMovementRepository,
    },
    error::{AppError, Result},
    state::AppState,
};

use super::{check_year_order, non_blank, nullable, parse_id, require_text, ApiJson, ApiQuery};

/// List view: name, description and tags only
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovementSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl From<art_movement::Model> for MovementSummary {
    fn from(movement: art_movement::Model) -> Self {
        Self {
            id: movement.id,
            tags: string_list(&movement.tags),
            name: movement.name,
            description: movement.description,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovementDetail {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub theoretical_foundation: Option<String>,
    pub forms: Vec<String>,
    pub representative_artists: Vec<RepresentativeArtist>,
    pub characteristics: Vec<String>,
    pub tags: Vec<String>,
    pub context: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl MovementDetail {
    pub fn from_model(movement: art_movement::Model) -> Result<Self> {
        Ok(Self {
            id: movement.id,
            forms: string_list(&movement.forms),
            representative_artists: decode(&movement.representative_artists)?,
            characteristics: string_list(&movement.characteristics),
            tags: string_list(&movement.tags),
            name: movement.name,
            description: movement.description,
            start_year: movement.start_year,
            end_year: movement.end_year,
            theoretical_foundation: movement.theoretical_foundation,
            context: movement.context,
            created_at: movement.created_at.to_rfc3339(),
            updated_at: movement.updated_at.to_rfc3339(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovementTimelineEntry {
    pub id: Uuid,
    pub name: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateArtMovementRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "startYear")]
    pub start_year: Option<i32>,
    #[serde(alias = "endYear")]
    pub end_year: Option<i32>,
    #[serde(alias = "theoreticalFoundation")]
    pub theoretical_foundation: Option<String>,
    #[serde(default)]
    pub forms: Vec<String>,
    #[serde(default, alias = "representativeArtists")]
    pub representative_artists: Vec<RepresentativeArtist>,
    #[serde(default)]
    pub characteristics: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub context: Option<String>,
}

/// Absent fields are kept; `null` clears the nullable ones.
#[derive(Deserialize)]
pub struct UpdateArtMovementRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "startYear")]
    pub start_year: Option<i32>,
    #[serde(default, alias = "endYear", deserialize_with = "nullable")]
    pub end_year: Option<Option<i32>>,
    #[serde(default, alias = "theoreticalFoundation", deserialize_with = "nullable")]
    pub theoretical_foundation: Option<Option<String>>,
    pub forms: Option<Vec<String>>,
    #[serde(alias = "representativeArtists")]
    pub representative_artists: Option<Vec<RepresentativeArtist>>,
    pub characteristics: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub context: Option<Option<String>>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

#[derive(Deserialize)]
pub struct TagFilterQuery {
    /// Comma separated
    pub tags: Option<String>,
}

fn not_found() -> AppError {
    AppError::NotFound("Art movement not found".to_string())
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("Art movement '{}' already exists", name))
}

pub async fn list_movements(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovementSummary>>> {
    let movements = ArtMovementRepository::new(state.db.clone())
        .list_by_name()
        .await?;

    Ok(Json(movements.into_iter().map(Into::into).collect()))
}

pub async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovementDetail>> {
    let id = parse_id(&id)?;
    let movement = ArtMovementRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(MovementDetail::from_model(movement)?))
}

pub async fn create_movement(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateArtMovementRequest>,
) -> Result<(StatusCode, Json<MovementDetail>)> {
    let name = require_text("name", payload.name)?;
    let description = require_text("description", payload.description)?;
    let start_year = payload
        .start_year
        .ok_or_else(|| AppError::Validation("start_year is required".to_string()))?;
    check_year_order("start_year", Some(start_year), "end_year", payload.end_year)?;

    let repo = ArtMovementRepository::new(state.db.clone());
    if repo.find_by_name(&name).await?.is_some() {
        return Err(duplicate_name(&name));
    }

    let now = Utc::now();
    let movement = art_movement::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        description: Set(description),
        start_year: Set(start_year),
        end_year: Set(payload.end_year),
        theoretical_foundation: Set(payload.theoretical_foundation),
        forms: Set(encode(&payload.forms)?),
        representative_artists: Set(encode(&payload.representative_artists)?),
        characteristics: Set(encode(&payload.characteristics)?),
        tags: Set(encode(&payload.tags)?),
        context: Set(payload.context),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };

    let created = repo.create(movement).await?;
    tracing::info!(id = %created.id, name = %created.name, "Created art movement");

    Ok((StatusCode::CREATED, Json(MovementDetail::from_model(created)?)))
}

pub async fn update_movement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateArtMovementRequest>,
) -> Result<Json<MovementDetail>> {
    let id = parse_id(&id)?;
    let repo = ArtMovementRepository::new(state.db.clone());
    let movement = repo.find_by_id(id).await?.ok_or_else(not_found)?;

    check_year_order(
        "start_year",
        payload.start_year.or(Some(movement.start_year)),
        "end_year",
        payload.end_year.unwrap_or(movement.end_year),
    )?;

    let name = non_blank("name", payload.name)?;
    if let Some(name) = &name {
        if let Some(existing) = repo.find_by_name(name).await? {
            if existing.id != id {
                return Err(duplicate_name(name));
            }
        }
    }

    let mut active: art_movement::ActiveModel = movement.into();

    if let Some(name) = name {
        active.name = Set(name);
    }
    if let Some(description) = non_blank("description", payload.description)? {
        active.description = Set(description);
    }
    if let Some(start_year) = payload.start_year {
        active.start_year = Set(start_year);
    }
    if let Some(end_year) = payload.end_year {
        active.end_year = Set(end_year);
    }
    if let Some(foundation) = payload.theoretical_foundation {
        active.theoretical_foundation = Set(foundation);
    }
    if let Some(forms) = payload.forms {
        active.forms = Set(encode(&forms)?);
    }
    if let Some(artists) = payload.representative_artists {
        active.representative_artists = Set(encode(&artists)?);
    }
    if let Some(characteristics) = payload.characteristics {
        active.characteristics = Set(encode(&characteristics)?);
    }
    if let Some(tags) = payload.tags {
        active.tags = Set(encode(&tags)?);
    }
    if let Some(context) = payload.context {
        active.context = Set(context);
    }

    active.updated_at = Set(Utc::now().into());
    let updated = repo.update(active).await?;
    tracing::info!(id = %updated.id, "Updated art movement");

    Ok(Json(MovementDetail::from_model(updated)?))
}

pub async fn delete_movement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    if !ArtMovementRepository::new(state.db.clone()).delete(id).await? {
        return Err(not_found());
    }
    tracing::info!(id = %id, "Deleted art movement");

    Ok(Json(json!({})))
}

/// Movements ordered by start year, for the timeline axis
pub async fn movement_timeline(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovementTimelineEntry>>> {
    let movements = ArtMovementRepository::new(state.db.clone())
        .list_chronological()
        .await?;

    Ok(Json(
        movements
            .into_iter()
            .map(|m| MovementTimelineEntry {
                id: m.id,
                name: m.name,
                start_year: m.start_year,
                end_year: m.end_year,
            })
            .collect(),
    ))
}

pub async fn search_movements(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<MovementSummary>>> {
    let term = query
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Search query is required".to_string()))?;

    let movements = ArtMovementRepository::new(state.db.clone())
        .search(&term)
        .await?;

    Ok(Json(movements.into_iter().map(Into::into).collect()))
}

pub async fn filter_by_tags(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TagFilterQuery>,
) -> Result<Json<Vec<MovementSummary>>> {
    let tags: Vec<String> = query
        .tags
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if tags.is_empty() {
        return Err(AppError::Validation("At least one tag is required".to_string()));
    }

    let movements = ArtMovementRepository::new(state.db.clone())
        .with_any_tag(&tags)
        .await?;

    Ok(Json(movements.into_iter().map(Into::into).collect()))
}
