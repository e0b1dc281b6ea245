pub mod art_movements;
pub mod artists;
pub mod artworks;
pub mod health;
pub mod html;
pub mod timeline;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::get,
    Router,
};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    state::AppState,
};

/// JSON body extractor whose rejections become 400 validation errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor with the same JSON error body as [`ApiJson`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// For nullable fields in partial updates: absent is `None`, `null` is `Some(None)`.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`.
pub fn nullable<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parses a path or query id, rejecting anything that is not a UUID with a 400.
pub fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// Returns the trimmed value of a required text field.
pub fn require_text(field: &str, value: Option<String>) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Rejects an explicitly supplied but blank text field.
pub fn non_blank(field: &str, value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(v) => require_text(field, Some(v)).map(Some),
        None => Ok(None),
    }
}

/// `end` may not precede `start` when both are known.
pub fn check_year_order(start_field: &str, start: Option<i32>, end_field: &str, end: Option<i32>) -> Result<()> {
    match (start, end) {
        (Some(s), Some(e)) if e < s => Err(AppError::Validation(format!(
            "{} ({}) must not be before {} ({})",
            end_field, e, start_field, s
        ))),
        _ => Ok(()),
    }
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Timeline nodes
        .route(
            "/timeline",
            get(timeline::list_nodes).post(timeline::create_node),
        )
        .route("/timeline/layout", get(timeline::get_layout))
        .route("/timeline/influences", get(timeline::list_influences))
        .route(
            "/timeline/:id",
            get(timeline::get_node)
                .put(timeline::update_node)
                .delete(timeline::delete_node),
        )

        // Art movements
        .route(
            "/art-movements",
            get(art_movements::list_movements).post(art_movements::create_movement),
        )
        .route("/art-movements/timeline/all", get(art_movements::movement_timeline))
        .route("/art-movements/search", get(art_movements::search_movements))
        .route("/art-movements/filter/tags", get(art_movements::filter_by_tags))
        .route(
            "/art-movements/:id",
            get(art_movements::get_movement)
                .put(art_movements::update_movement)
                .delete(art_movements::delete_movement),
        )

        // Artists
        .route(
            "/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route(
            "/artists/:id",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
        .route("/artists/:id/artworks", get(artists::list_artist_artworks))

        // Artworks
        .route(
            "/artworks",
            get(artworks::list_artworks).post(artworks::create_artwork),
        )
        .route(
            "/artworks/:id",
            get(artworks::get_artwork)
                .put(artworks::update_artwork)
                .delete(artworks::delete_artwork),
        )
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(html::timeline_view))
        .route("/movements", get(html::movements_gallery))
        .route("/movements/:id", get(html::movement_detail))
}
