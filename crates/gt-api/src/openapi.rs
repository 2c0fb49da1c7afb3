//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grow Trucking API",
        version = "0.1.0",
        description = "Site content for Grow Trucking (partners, truck types, careers, services, case studies, states and freight lanes) and the lead-form proxy to the dispatch backend.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        // Content
        crate::routes::content::list_partners,
        crate::routes::content::get_partner,
        crate::routes::content::list_truck_types,
        crate::routes::content::get_truck_type,
        crate::routes::content::list_jobs,
        crate::routes::content::get_job,
        crate::routes::content::list_services,
        crate::routes::content::get_service,
        crate::routes::content::list_case_studies,
        crate::routes::content::get_case_study,
        crate::routes::content::navigation,
        // States & lanes
        crate::routes::states::list_states,
        crate::routes::states::get_state,
        crate::routes::states::state_page,
        crate::routes::states::list_lanes,
        crate::routes::states::get_lane,
        crate::routes::states::lane_page,
        // Areas we serve
        crate::routes::areas::areas_root,
        crate::routes::areas::areas_path,
        // Forms
        crate::routes::forms::signup_options,
        crate::routes::forms::submit_contact,
        crate::routes::forms::submit_claim,
        crate::routes::forms::submit_signup,
    ),
    components(schemas(
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // Content
        gt_content::Partner,
        gt_content::PartnerSummary,
        gt_content::TruckType,
        gt_content::TruckTypeSummary,
        gt_content::JobOpening,
        gt_content::JobSummary,
        gt_content::Service,
        gt_content::CaseStudy,
        gt_content::CaseStudyMetric,
        gt_content::CaseStudySummary,
        gt_content::Navigation,
        gt_content::State,
        gt_content::StateSummary,
        gt_content::Lane,
        gt_content::StatePage,
        gt_content::LanePage,
        gt_content::StructureReport,
        crate::routes::states::StatePageResponse,
        crate::routes::states::LanePageResponse,
        // Forms
        gt_dispatch_client::ContactForm,
        gt_dispatch_client::ClaimForm,
        gt_dispatch_client::SignupForm,
        gt_dispatch_client::SignupType,
        gt_dispatch_client::SignupOptions,
        crate::routes::forms::FormSubmissionResponse,
    )),
    tags(
        (name = "content", description = "Partners, truck types, careers, services, case studies and navigation"),
        (name = "states", description = "State pages and freight lanes"),
        (name = "areas", description = "Legacy areas-we-serve redirects"),
        (name = "forms", description = "Contact, claim and signup submissions"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
