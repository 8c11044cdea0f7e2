//! Gallery page routes.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use uuid::Uuid;

use crate::gallery::dialog::SubmitOutcome;
use crate::gallery::form::UploadInput;
use crate::gallery::record::ImageRecord;
use crate::services::session::{self, SessionError};
use crate::services::upload;
use crate::state::AppState;

pub(crate) fn session_path(session_id: Uuid) -> String {
    format!("/s/{session_id}")
}

pub(crate) fn session_error_to_status(err: SessionError) -> StatusCode {
    match err {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

/// Session ids arrive as raw path segments; anything that is not a UUID is
/// treated like an unknown session.
fn parse_session_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Unknown sessions start over with a fresh one.
fn restart() -> Response {
    Redirect::to("/").into_response()
}

fn back_to(session_id: Uuid) -> Response {
    Redirect::to(&session_path(session_id)).into_response()
}

/// `GET /` — start a new session seeded from the startup snapshot.
pub async fn new_session(State(state): State<AppState>) -> Redirect {
    let session_id = session::create_session(&state).await;
    Redirect::to(&session_path(session_id))
}

/// `GET /s/:id` — render the session's page.
pub async fn show(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(session_id) = parse_session_id(&raw_id) else {
        return restart();
    };
    match session::render_session(&state, session_id).await {
        Ok(html) => Html(html).into_response(),
        Err(_) => restart(),
    }
}

/// `POST /s/:id/dialog/open` — open the upload dialog.
pub async fn open_dialog(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(session_id) = parse_session_id(&raw_id) else {
        return restart();
    };
    match session::open_dialog(&state, session_id).await {
        Ok(()) => back_to(session_id),
        Err(_) => restart(),
    }
}

/// `POST /s/:id/dialog/close` — dismiss the upload dialog, discarding input.
pub async fn close_dialog(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(session_id) = parse_session_id(&raw_id) else {
        return restart();
    };
    match session::dismiss_dialog(&state, session_id).await {
        Ok(()) => back_to(session_id),
        Err(_) => restart(),
    }
}

/// `POST /s/:id/images` — submit the upload form.
///
/// Blocked submissions re-render the page with inline errors (`422`); every
/// other outcome, including a silent gate rejection, redirects back.
pub async fn submit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(input): Form<UploadInput>,
) -> Response {
    let Some(session_id) = parse_session_id(&raw_id) else {
        return restart();
    };
    match upload::submit_upload(&state, session_id, input).await {
        Ok(SubmitOutcome::Blocked(_)) => match session::render_session(&state, session_id).await {
            Ok(html) => (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response(),
            Err(_) => restart(),
        },
        Ok(_) => back_to(session_id),
        Err(_) => restart(),
    }
}

/// `POST /s/:id/tiles/:index/loaded` — an image finished loading.
pub async fn tile_loaded(
    State(state): State<AppState>,
    Path((raw_id, index)): Path<(String, usize)>,
) -> Result<StatusCode, StatusCode> {
    let session_id = parse_session_id(&raw_id).ok_or(StatusCode::NOT_FOUND)?;
    session::mark_tile_loaded(&state, session_id, index)
        .await
        .map_err(session_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/s/:id/images` — the session list as JSON (`null` when not found).
pub async fn list_images(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Option<Vec<ImageRecord>>>, StatusCode> {
    let session_id = parse_session_id(&raw_id).ok_or(StatusCode::NOT_FOUND)?;
    let images = session::list_images(&state, session_id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(images))
}

#[cfg(test)]
#[path = "gallery_test.rs"]
mod tests;
