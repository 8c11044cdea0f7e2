//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page routes render one session's gallery and accept the dialog's form
//! posts; every post answers with a `303` back to the session page. A small
//! JSON route exposes the session list, and `/healthz` answers liveness checks.

pub mod gallery;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(gallery::new_session))
        .route("/s/{id}", get(gallery::show))
        .route("/s/{id}/dialog/open", post(gallery::open_dialog))
        .route("/s/{id}/dialog/close", post(gallery::close_dialog))
        .route("/s/{id}/images", post(gallery::submit))
        .route("/s/{id}/tiles/{index}/loaded", post(gallery::tile_loaded))
        .route("/api/s/{id}/images", get(gallery::list_images))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
