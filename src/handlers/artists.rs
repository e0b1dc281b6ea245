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
        entities::artist,
        json::{contains_ignore_case, decode, encode, string_list},
        repositories::{ArtistRepository, ArtworkFilter, ArtworkRepository},
    },
    error::{AppError, Result},
    state::AppState,
};

use super::{
    artworks::ArtworkResponse, check_year_order, non_blank, nullable, parse_id, require_text,
    ApiJson, ApiQuery,
};

#[derive(Deserialize)]
pub struct ListArtistsQuery {
    pub search: Option<String>,
    pub movement_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtistResponse {
    pub id: Uuid,
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub nationality: Option<String>,
    pub biography: Option<String>,
    pub movements: Vec<Uuid>,
    pub notable_works: Vec<Uuid>,
    pub photos: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ArtistResponse {
    fn from_model(artist: artist::Model) -> Result<Self> {
        Ok(Self {
            id: artist.id,
            movements: decode(&artist.movements)?,
            notable_works: decode(&artist.notable_works)?,
            photos: string_list(&artist.photos),
            name: artist.name,
            birth_year: artist.birth_year,
            death_year: artist.death_year,
            nationality: artist.nationality,
            biography: artist.biography,
            created_at: artist.created_at.to_rfc3339(),
            updated_at: artist.updated_at.to_rfc3339(),
        })
    }
}

#[derive(Deserialize)]
pub struct CreateArtistRequest {
    pub name: Option<String>,
    #[serde(alias = "birthYear")]
    pub birth_year: Option<i32>,
    #[serde(alias = "deathYear")]
    pub death_year: Option<i32>,
    pub nationality: Option<String>,
    pub biography: Option<String>,
    #[serde(default)]
    pub movements: Vec<Uuid>,
    #[serde(default, alias = "notableWorks")]
    pub notable_works: Vec<Uuid>,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Absent fields are kept; `null` clears the nullable ones.
#[derive(Deserialize)]
pub struct UpdateArtistRequest {
    pub name: Option<String>,
    #[serde(default, alias = "birthYear", deserialize_with = "nullable")]
    pub birth_year: Option<Option<i32>>,
    #[serde(default, alias = "deathYear", deserialize_with = "nullable")]
    pub death_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub nationality: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub biography: Option<Option<String>>,
    pub movements: Option<Vec<Uuid>>,
    #[serde(alias = "notableWorks")]
    pub notable_works: Option<Vec<Uuid>>,
    pub photos: Option<Vec<String>>,
}

fn not_found() -> AppError {
    AppError::NotFound("Artist not found".to_string())
}

async fn find_artist(state: &AppState, id: Uuid) -> Result<artist::Model> {
    ArtistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(not_found)
}

/// List artists by name, optionally narrowed to one movement or a name search
pub async fn list_artists(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListArtistsQuery>,
) -> Result<Json<Vec<ArtistResponse>>> {
    let movement_id = match query.movement_id.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(parse_id(raw)?.to_string()),
        _ => None,
    };
    let search = query
        .search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let artists = ArtistRepository::new(state.db.clone()).list_by_name().await?;

    let responses = artists
        .into_iter()
        .filter(|a| match &movement_id {
            Some(id) => contains_ignore_case(&a.movements, id),
            None => true,
        })
        .filter(|a| match &search {
            Some(term) => a.name.to_lowercase().contains(term),
            None => true,
        })
        .map(ArtistResponse::from_model)
        .collect::<Result<Vec<_>>>()?;

    Ok(Json(responses))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArtistResponse>> {
    let artist = find_artist(&state, parse_id(&id)?).await?;
    Ok(Json(ArtistResponse::from_model(artist)?))
}

pub async fn create_artist(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateArtistRequest>,
) -> Result<(StatusCode, Json<ArtistResponse>)> {
    let name = require_text("name", payload.name)?;
    check_year_order("birth_year", payload.birth_year, "death_year", payload.death_year)?;

    let now = Utc::now();
    let artist = artist::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        birth_year: Set(payload.birth_year),
        death_year: Set(payload.death_year),
        nationality: Set(payload.nationality),
        biography: Set(payload.biography),
        movements: Set(encode(&payload.movements)?),
        notable_works: Set(encode(&payload.notable_works)?),
        photos: Set(encode(&payload.photos)?),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };

    let created = ArtistRepository::new(state.db.clone()).create(artist).await?;
    tracing::info!(id = %created.id, name = %created.name, "Created artist");

    Ok((StatusCode::CREATED, Json(ArtistResponse::from_model(created)?)))
}

pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateArtistRequest>,
) -> Result<Json<ArtistResponse>> {
    let artist = find_artist(&state, parse_id(&id)?).await?;

    check_year_order(
        "birth_year",
        payload.birth_year.unwrap_or(artist.birth_year),
        "death_year",
        payload.death_year.unwrap_or(artist.death_year),
    )?;

    let mut active: artist::ActiveModel = artist.into();

    if let Some(name) = non_blank("name", payload.name)? {
        active.name = Set(name);
    }
    if let Some(birth_year) = payload.birth_year {
        active.birth_year = Set(birth_year);
    }
    if let Some(death_year) = payload.death_year {
        active.death_year = Set(death_year);
    }
    if let Some(nationality) = payload.nationality {
        active.nationality = Set(nationality);
    }
    if let Some(biography) = payload.biography {
        active.biography = Set(biography);
    }
    if let Some(movements) = payload.movements {
        active.movements = Set(encode(&movements)?);
    }
    if let Some(works) = payload.notable_works {
        active.notable_works = Set(encode(&works)?);
    }
    if let Some(photos) = payload.photos {
        active.photos = Set(encode(&photos)?);
    }

    active.updated_at = Set(Utc::now().into());
    let updated = ArtistRepository::new(state.db.clone()).update(active).await?;
    tracing::info!(id = %updated.id, "Updated artist");

    Ok(Json(ArtistResponse::from_model(updated)?))
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    if !ArtistRepository::new(state.db.clone()).delete(id).await? {
        return Err(not_found());
    }
    tracing::info!(id = %id, "Deleted artist");

    Ok(Json(json!({})))
}

/// Artworks whose `artist_id` points at this artist
pub async fn list_artist_artworks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ArtworkResponse>>> {
    let artist = find_artist(&state, parse_id(&id)?).await?;

    let artworks = ArtworkRepository::new(state.db.clone())
        .list(ArtworkFilter {
            artist_id: Some(artist.id),
            movement_id: None,
        })
        .await?;

    Ok(Json(artworks.into_iter().map(Into::into).collect()))
}
