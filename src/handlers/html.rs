use axum::{
    extract::{Path, State},
    response::Html,
};
use serde::Deserialize;

use crate::{
    db::repositories::ArtMovementRepository,
    error::{AppError, Result},
    state::AppState,
    templates::{movement_detail_page, movements_page, timeline_page, InfluenceLinkData},
    timeline::Action,
};

use super::{
    art_movements::{MovementDetail, MovementSummary},
    parse_id,
    timeline::load_store,
    ApiQuery,
};

#[derive(Deserialize)]
pub struct TimelineViewQuery {
    #[serde(default)]
    pub offset: f64,
}

/// Timeline page, panned by `offset` percentage points
pub async fn timeline_view(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TimelineViewQuery>,
) -> Result<Html<String>> {
    let mut store = load_store(&state).await?;
    if query.offset.is_finite() {
        store.dispatch(Action::Panned {
            delta_percent: query.offset,
        });
    }

    let influences: Vec<InfluenceLinkData> = store
        .edges()
        .iter()
        .filter_map(|edge| {
            Some(InfluenceLinkData {
                source_title: store.node(edge.source)?.title.clone(),
                target_title: store.node(edge.target)?.title.clone(),
            })
        })
        .collect();

    let markup = timeline_page(
        &store.layout(),
        store.year_range(),
        store.offset(),
        &influences,
    );
    Ok(Html(markup.into_string()))
}

pub async fn movements_gallery(State(state): State<AppState>) -> Result<Html<String>> {
    let movements: Vec<MovementSummary> = ArtMovementRepository::new(state.db.clone())
        .list_chronological()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Html(movements_page(&movements).into_string()))
}

pub async fn movement_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let movement = ArtMovementRepository::new(state.db.clone())
        .find_by_id(parse_id(&id)?)
        .await?
        .ok_or_else(|| AppError::NotFound("Art movement not found".to_string()))?;

    let detail = MovementDetail::from_model(movement)?;
    Ok(Html(movement_detail_page(&detail).into_string()))
}
