//! # Catalog Routes
//!
//! Read-only views of the partner, truck-type, careers, services and case
//! study registries, plus the navigation tree. Unknown slugs answer 404.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use gt_content::{
    CaseStudy, CaseStudySummary, JobOpening, JobSummary, Navigation, Partner, PartnerSummary, Service, TruckType,
    TruckTypeSummary,
};

use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/partners", get(list_partners))
        .route("/v1/partners/{slug}", get(get_partner))
        .route("/v1/truck-types", get(list_truck_types))
        .route("/v1/truck-types/{slug}", get(get_truck_type))
        .route("/v1/careers", get(list_jobs))
        .route("/v1/careers/{slug}", get(get_job))
        .route("/v1/services", get(list_services))
        .route("/v1/services/{id}", get(get_service))
        .route("/v1/case-studies", get(list_case_studies))
        .route("/v1/case-studies/{slug}", get(get_case_study))
        .route("/v1/navigation", get(navigation))
}

// ── Partners ─────────────────────────────────────────────────────────

/// GET /v1/partners: Brokerage partner summaries.
#[utoipa::path(
    get,
    path = "/v1/partners",
    responses((status = 200, description = "Partner summaries", body = Vec<PartnerSummary>)),
    tag = "content"
)]
pub(crate) async fn list_partners(State(state): State<AppState>) -> Json<Vec<PartnerSummary>> {
    Json(state.catalog.partners().iter().map(Partner::summary).collect())
}

/// GET /v1/partners/{slug}: Full partner profile.
#[utoipa::path(
    get,
    path = "/v1/partners/{slug}",
    params(("slug" = String, Path, description = "Partner slug")),
    responses(
        (status = 200, description = "Partner found", body = Partner),
        (status = 404, description = "Unknown partner", body = crate::error::ErrorBody),
    ),
    tag = "content"
)]
pub(crate) async fn get_partner(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Partner>, AppError> {
    state
        .catalog
        .partners()
        .get_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("partner", &slug))
}

// ── Truck types ──────────────────────────────────────────────────────

/// GET /v1/truck-types: Truck type summaries.
#[utoipa::path(
    get,
    path = "/v1/truck-types",
    responses((status = 200, description = "Truck type summaries", body = Vec<TruckTypeSummary>)),
    tag = "content"
)]
pub(crate) async fn list_truck_types(
    State(state): State<AppState>,
) -> Json<Vec<TruckTypeSummary>> {
    Json(state.catalog.truck_types().iter().map(TruckType::summary).collect())
}

/// GET /v1/truck-types/{slug}: Full truck type page.
#[utoipa::path(
    get,
    path = "/v1/truck-types/{slug}",
    params(("slug" = String, Path, description = "Truck type slug")),
    responses(
        (status = 200, description = "Truck type found", body = TruckType),
        (status = 404, description = "Unknown truck type", body = crate::error::ErrorBody),
    ),
    tag = "content"
)]
pub(crate) async fn get_truck_type(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<TruckType>, AppError> {
    state
        .catalog
        .truck_types()
        .get_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("truck type", &slug))
}

// ── Careers ──────────────────────────────────────────────────────────

/// GET /v1/careers: Open positions.
#[utoipa::path(
    get,
    path = "/v1/careers",
    responses((status = 200, description = "Job summaries", body = Vec<JobSummary>)),
    tag = "content"
)]
pub(crate) async fn list_jobs(State(state): State<AppState>) -> Json<Vec<JobSummary>> {
    Json(state.catalog.jobs().iter().map(JobOpening::summary).collect())
}

/// GET /v1/careers/{slug}: One opening, by slug or numeric id.
#[utoipa::path(
    get,
    path = "/v1/careers/{slug}",
    params(("slug" = String, Path, description = "Job slug or id")),
    responses(
        (status = 200, description = "Job found", body = JobOpening),
        (status = 404, description = "Unknown job", body = crate::error::ErrorBody),
    ),
    tag = "content"
)]
pub(crate) async fn get_job(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<JobOpening>, AppError> {
    let jobs = state.catalog.jobs();
    jobs.get_by_slug(&slug)
        .or_else(|| jobs.get_by_id(&slug))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("job", &slug))
}

// ── Services ─────────────────────────────────────────────────────────

/// GET /v1/services: Dispatch service catalog.
#[utoipa::path(
    get,
    path = "/v1/services",
    responses((status = 200, description = "Services", body = Vec<Service>)),
    tag = "content"
)]
pub(crate) async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.catalog.services().all().to_vec())
}

/// GET /v1/services/{id}: One service.
#[utoipa::path(
    get,
    path = "/v1/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service found", body = Service),
        (status = 404, description = "Unknown service", body = crate::error::ErrorBody),
    ),
    tag = "content"
)]
pub(crate) async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, AppError> {
    state
        .catalog
        .services()
        .get_by_slug(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("service", &id))
}

// ── Case studies ─────────────────────────────────────────────────────

/// Query parameters for the case study listing.
#[derive(Debug, Default, Deserialize)]
pub struct CaseStudyQuery {
    /// `true` keeps only the studies shown in the featured carousel.
    pub featured: Option<bool>,
}

/// GET /v1/case-studies: Case study cards, optionally only featured ones.
#[utoipa::path(
    get,
    path = "/v1/case-studies",
    params(("featured" = Option<bool>, Query, description = "Only featured studies when true")),
    responses(
        (status = 200, description = "Case study summaries", body = Vec<CaseStudySummary>),
        (status = 400, description = "Malformed query", body = crate::error::ErrorBody),
    ),
    tag = "content"
)]
pub(crate) async fn list_case_studies(
    State(state): State<AppState>,
    query: Result<Query<CaseStudyQuery>, QueryRejection>,
) -> Result<Json<Vec<CaseStudySummary>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let studies = state.catalog.case_studies();
    let summaries = match query.featured {
        Some(true) => studies.featured().map(CaseStudy::summary).collect(),
        Some(false) => studies
            .iter()
            .filter(|study| !study.featured)
            .map(CaseStudy::summary)
            .collect(),
        None => studies.iter().map(CaseStudy::summary).collect(),
    };
    Ok(Json(summaries))
}

/// GET /v1/case-studies/{slug}: Full case study.
#[utoipa::path(
    get,
    path = "/v1/case-studies/{slug}",
    params(("slug" = String, Path, description = "Case study slug")),
    responses(
        (status = 200, description = "Case study found", body = CaseStudy),
        (status = 404, description = "Unknown case study", body = crate::error::ErrorBody),
    ),
    tag = "content"
)]
pub(crate) async fn get_case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CaseStudy>, AppError> {
    state
        .catalog
        .case_studies()
        .get_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("case study", &slug))
}

// ── Navigation ───────────────────────────────────────────────────────

/// GET /v1/navigation: Site menus.
#[utoipa::path(
    get,
    path = "/v1/navigation",
    responses((status = 200, description = "Navigation tree", body = Navigation)),
    tag = "content"
)]
pub(crate) async fn navigation(State(state): State<AppState>) -> Json<Navigation> {
    Json(state.catalog.navigation().clone())
}
