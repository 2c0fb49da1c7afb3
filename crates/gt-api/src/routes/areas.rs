//! # Areas-We-Serve Redirects
//!
//! Legacy `/areas-we-serve/{region}/{state}` links answer 307 to the state
//! page, or to `/states` when the last segment matches no state. The route
//! never errors: a path that cannot be decoded also goes to `/states`.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/areas-we-serve", get(areas_root))
        .route("/areas-we-serve/", get(areas_root))
        .route("/areas-we-serve/{*path}", get(areas_path))
}

/// GET /areas-we-serve: Redirect to the state listing.
#[utoipa::path(
    get,
    path = "/areas-we-serve",
    responses((status = 307, description = "Redirect to /states")),
    tag = "areas"
)]
pub(crate) async fn areas_root(State(state): State<AppState>) -> Redirect {
    let target = state.catalog.resolve_area(std::iter::empty());
    Redirect::temporary(&target.location())
}

/// GET /areas-we-serve/{path}: Redirect to the matching state page.
#[utoipa::path(
    get,
    path = "/areas-we-serve/{path}",
    params(("path" = String, Path, description = "Region and state segments")),
    responses((status = 307, description = "Redirect to /states/{slug} or /states")),
    tag = "areas"
)]
pub(crate) async fn areas_path(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Redirect {
    let path = match path {
        Ok(Path(path)) => path,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "undecodable areas-we-serve path");
            String::new()
        }
    };
    let target = state.catalog.resolve_area(path.split('/'));
    tracing::debug!(path = %path, location = %target.location(), "areas-we-serve redirect");
    Redirect::temporary(&target.location())
}
