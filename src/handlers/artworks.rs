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
        entities::artwork,
        json::{encode, string_list},
        repositories::{ArtMovementRepository, ArtistRepository, ArtworkFilter, ArtworkRepository},
    },
    error::{AppError, Result},
    state::AppState,
};

use super::{non_blank, nullable, parse_id, require_text, ApiJson, ApiQuery};

#[derive(Deserialize)]
pub struct ListArtworksQuery {
    pub artist_id: Option<String>,
    pub movement_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtworkResponse {
    pub id: Uuid,
    pub title: String,
    pub artist_id: Option<Uuid>,
    pub movement_id: Option<Uuid>,
    pub year_created: Option<i32>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<artwork::Model> for ArtworkResponse {
    fn from(artwork: artwork::Model) -> Self {
        Self {
            id: artwork.id,
            images: string_list(&artwork.images),
            title: artwork.title,
            artist_id: artwork.artist_id,
            movement_id: artwork.movement_id,
            year_created: artwork.year_created,
            medium: artwork.medium,
            dimensions: artwork.dimensions,
            location: artwork.location,
            description: artwork.description,
            created_at: artwork.created_at.to_rfc3339(),
            updated_at: artwork.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateArtworkRequest {
    pub title: Option<String>,
    #[serde(alias = "artistId")]
    pub artist_id: Option<Uuid>,
    #[serde(alias = "movementId")]
    pub movement_id: Option<Uuid>,
    #[serde(alias = "yearCreated")]
    pub year_created: Option<i32>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Absent fields are kept; `null` clears the nullable ones.
#[derive(Deserialize)]
pub struct UpdateArtworkRequest {
    pub title: Option<String>,
    #[serde(default, alias = "artistId", deserialize_with = "nullable")]
    pub artist_id: Option<Option<Uuid>>,
    #[serde(default, alias = "movementId", deserialize_with = "nullable")]
    pub movement_id: Option<Option<Uuid>>,
    #[serde(default, alias = "yearCreated", deserialize_with = "nullable")]
    pub year_created: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub medium: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub dimensions: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub images: Option<Vec<String>>,
}

fn not_found() -> AppError {
    AppError::NotFound("Artwork not found".to_string())
}

/// Turns a dangling reference into a 400 instead of a foreign key failure.
async fn check_references(
    state: &AppState,
    artist_id: Option<Uuid>,
    movement_id: Option<Uuid>,
) -> Result<()> {
    if let Some(id) = artist_id {
        if !ArtistRepository::new(state.db.clone()).exists(id).await? {
            return Err(AppError::Validation(format!("Artist {} does not exist", id)));
        }
    }
    if let Some(id) = movement_id {
        if !ArtMovementRepository::new(state.db.clone()).exists(id).await? {
            return Err(AppError::Validation(format!("Art movement {} does not exist", id)));
        }
    }
    Ok(())
}

async fn find_artwork(state: &AppState, id: Uuid) -> Result<artwork::Model> {
    ArtworkRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(not_found)
}

pub async fn list_artworks(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListArtworksQuery>,
) -> Result<Json<Vec<ArtworkResponse>>> {
    let optional_id = |raw: Option<&str>| -> Result<Option<Uuid>> {
        match raw.filter(|s| !s.trim().is_empty()) {
            Some(raw) => parse_id(raw).map(Some),
            None => Ok(None),
        }
    };
    let filter = ArtworkFilter {
        artist_id: optional_id(query.artist_id.as_deref())?,
        movement_id: optional_id(query.movement_id.as_deref())?,
    };

    let artworks = ArtworkRepository::new(state.db.clone()).list(filter).await?;

    Ok(Json(artworks.into_iter().map(Into::into).collect()))
}

pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArtworkResponse>> {
    let artwork = find_artwork(&state, parse_id(&id)?).await?;
    Ok(Json(artwork.into()))
}

/// Create an artwork. The referenced artist's `notable_works` is left untouched.
pub async fn create_artwork(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateArtworkRequest>,
) -> Result<(StatusCode, Json<ArtworkResponse>)> {
    let title = require_text("title", payload.title)?;
    check_references(&state, payload.artist_id, payload.movement_id).await?;

    let now = Utc::now();
    let artwork = artwork::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        artist_id: Set(payload.artist_id),
        movement_id: Set(payload.movement_id),
        year_created: Set(payload.year_created),
        medium: Set(payload.medium),
        dimensions: Set(payload.dimensions),
        location: Set(payload.location),
        description: Set(payload.description),
        images: Set(encode(&payload.images)?),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };

    let created = ArtworkRepository::new(state.db.clone()).create(artwork).await?;
    tracing::info!(id = %created.id, title = %created.title, "Created artwork");

    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateArtworkRequest>,
) -> Result<Json<ArtworkResponse>> {
    let artwork = find_artwork(&state, parse_id(&id)?).await?;
    check_references(
        &state,
        payload.artist_id.flatten(),
        payload.movement_id.flatten(),
    )
    .await?;

    let mut active: artwork::ActiveModel = artwork.into();

    if let Some(title) = non_blank("title", payload.title)? {
        active.title = Set(title);
    }
    if let Some(artist_id) = payload.artist_id {
        active.artist_id = Set(artist_id);
    }
    if let Some(movement_id) = payload.movement_id {
        active.movement_id = Set(movement_id);
    }
    if let Some(year) = payload.year_created {
        active.year_created = Set(year);
    }
    if let Some(medium) = payload.medium {
        active.medium = Set(medium);
    }
    if let Some(dimensions) = payload.dimensions {
        active.dimensions = Set(dimensions);
    }
    if let Some(location) = payload.location {
        active.location = Set(location);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(images) = payload.images {
        active.images = Set(encode(&images)?);
    }

    active.updated_at = Set(Utc::now().into());
    let updated = ArtworkRepository::new(state.db.clone()).update(active).await?;
    tracing::info!(id = %updated.id, "Updated artwork");

    Ok(Json(updated.into()))
}

pub async fn delete_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    if !ArtworkRepository::new(state.db.clone()).delete(id).await? {
        return Err(not_found());
    }
    tracing::info!(id = %id, "Deleted artwork");

    Ok(Json(json!({})))
}
