//! # State & Lane Routes
//!
//! | Path | Result |
//! |------|--------|
//! | `/v1/states` | state summaries |
//! | `/v1/states/{state}` | full state |
//! | `/v1/states/{state}/page` | assembled page + structure audit |
//! | `/v1/states/{state}/lanes` | the state's 15 lanes |
//! | `/v1/states/{state}/lanes/{lane}` | one lane |
//! | `/v1/states/{state}/lanes/{lane}/page` | assembled lane page + audit |
//!
//! Lane lookups canonicalize the slug, so legacy double-dash links resolve.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use gt_content::{
    audit_lane_page, audit_state_page, Lane, LanePage, StatePage, StateSummary, StructureReport,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/states", get(list_states))
        .route("/v1/states/{state}", get(get_state))
        .route("/v1/states/{state}/page", get(state_page))
        .route("/v1/states/{state}/lanes", get(list_lanes))
        .route("/v1/states/{state}/lanes/{lane}", get(get_lane))
        .route("/v1/states/{state}/lanes/{lane}/page", get(lane_page))
}

/// Assembled state page with its structure audit.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatePageResponse {
    pub page: StatePage,
    pub audit: StructureReport,
}

/// Assembled lane page with its structure audit.
#[derive(Debug, Serialize, ToSchema)]
pub struct LanePageResponse {
    pub page: LanePage,
    pub audit: StructureReport,
}

fn find_state<'a>(state: &'a AppState, slug: &str) -> Result<&'a gt_content::State, AppError> {
    state
        .catalog
        .states()
        .get_by_slug(slug)
        .ok_or_else(|| AppError::not_found("state", slug))
}

fn find_lane<'a>(state: &'a AppState, state_slug: &str, lane_slug: &str) -> Result<&'a Lane, AppError> {
    find_state(state, state_slug)?;
    state
        .catalog
        .lanes()
        .get(state_slug, lane_slug)
        .ok_or_else(|| AppError::not_found("lane", &format!("{state_slug}/{lane_slug}")))
}

/// GET /v1/states: State summaries.
#[utoipa::path(
    get,
    path = "/v1/states",
    responses((status = 200, description = "State summaries", body = Vec<StateSummary>)),
    tag = "states"
)]
pub(crate) async fn list_states(State(state): State<AppState>) -> Json<Vec<StateSummary>> {
    Json(
        state
            .catalog
            .states()
            .iter()
            .map(gt_content::State::summary)
            .collect(),
    )
}

/// GET /v1/states/{state}: Full state content.
#[utoipa::path(
    get,
    path = "/v1/states/{state}",
    params(("state" = String, Path, description = "State slug")),
    responses(
        (status = 200, description = "State found", body = gt_content::State),
        (status = 404, description = "Unknown state", body = crate::error::ErrorBody),
    ),
    tag = "states"
)]
pub(crate) async fn get_state(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<gt_content::State>, AppError> {
    find_state(&state, &slug).cloned().map(Json)
}

/// GET /v1/states/{state}/page: Assembled state page.
#[utoipa::path(
    get,
    path = "/v1/states/{state}/page",
    params(("state" = String, Path, description = "State slug")),
    responses(
        (status = 200, description = "Page and audit", body = StatePageResponse),
        (status = 404, description = "Unknown state", body = crate::error::ErrorBody),
    ),
    tag = "states"
)]
pub(crate) async fn state_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StatePageResponse>, AppError> {
    let page = StatePage::from_state(find_state(&state, &slug)?);
    let audit = audit_state_page(&page);
    if !audit.is_valid() {
        tracing::warn!(state = %slug, findings = audit.findings.len(), "state page fails structure audit");
    }
    Ok(Json(StatePageResponse { page, audit }))
}

/// GET /v1/states/{state}/lanes: Lanes of one state.
#[utoipa::path(
    get,
    path = "/v1/states/{state}/lanes",
    params(("state" = String, Path, description = "State slug")),
    responses(
        (status = 200, description = "Lanes", body = Vec<Lane>),
        (status = 404, description = "Unknown state", body = crate::error::ErrorBody),
    ),
    tag = "states"
)]
pub(crate) async fn list_lanes(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Lane>>, AppError> {
    find_state(&state, &slug)?;
    Ok(Json(state.catalog.lanes().all_in(&slug).to_vec()))
}

/// GET /v1/states/{state}/lanes/{lane}: One lane.
#[utoipa::path(
    get,
    path = "/v1/states/{state}/lanes/{lane}",
    params(
        ("state" = String, Path, description = "State slug"),
        ("lane" = String, Path, description = "Lane slug"),
    ),
    responses(
        (status = 200, description = "Lane found", body = Lane),
        (status = 404, description = "Unknown state or lane", body = crate::error::ErrorBody),
    ),
    tag = "states"
)]
pub(crate) async fn get_lane(
    State(state): State<AppState>,
    Path((state_slug, lane_slug)): Path<(String, String)>,
) -> Result<Json<Lane>, AppError> {
    find_lane(&state, &state_slug, &lane_slug).cloned().map(Json)
}

/// GET /v1/states/{state}/lanes/{lane}/page: Assembled lane page.
#[utoipa::path(
    get,
    path = "/v1/states/{state}/lanes/{lane}/page",
    params(
        ("state" = String, Path, description = "State slug"),
        ("lane" = String, Path, description = "Lane slug"),
    ),
    responses(
        (status = 200, description = "Page and audit", body = LanePageResponse),
        (status = 404, description = "Unknown state or lane", body = crate::error::ErrorBody),
    ),
    tag = "states"
)]
pub(crate) async fn lane_page(
    State(state): State<AppState>,
    Path((state_slug, lane_slug)): Path<(String, String)>,
) -> Result<Json<LanePageResponse>, AppError> {
    let page = LanePage::from_lane(find_lane(&state, &state_slug, &lane_slug)?);
    let audit = audit_lane_page(&page);
    Ok(Json(LanePageResponse { page, audit }))
}
