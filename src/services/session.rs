//! Session service — create, address, and mutate per-visitor gallery state.
//!
//! ARCHITECTURE
//! ============
//! Each visit to `/` gets a fresh session seeded from the startup snapshot.
//! All reads and writes go through the `sessions` lock and refresh the
//! session's idle timer; the sweeper evicts sessions whose timer runs out.

use tracing::{debug, info};
use uuid::Uuid;

use crate::gallery::dialog::CloseReason;
use crate::gallery::record::ImageRecord;
use crate::gallery::view::GalleryView;
use crate::render::render_page;
use crate::state::{AppState, GallerySession};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),
}

/// Start a new session seeded from the startup snapshot.
pub async fn create_session(state: &AppState) -> Uuid {
    let session_id = Uuid::new_v4();
    let view = GalleryView::new((*state.initial_images).clone());
    let count = view.len();

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id, GallerySession::new(view));
    info!(%session_id, count, active = sessions.len(), "gallery session created");
    session_id
}

/// Run `f` against a live session, refreshing its idle timer.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist.
pub async fn with_session<T>(
    state: &AppState,
    session_id: Uuid,
    f: impl FnOnce(&mut GallerySession) -> T,
) -> Result<T, SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&session_id).ok_or(SessionError::NotFound(session_id))?;
    session.touch();
    Ok(f(session))
}

/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist.
pub async fn open_dialog(state: &AppState, session_id: Uuid) -> Result<(), SessionError> {
    with_session(state, session_id, |session| session.dialog.open()).await?;
    debug!(%session_id, "upload dialog opened");
    Ok(())
}

/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist.
pub async fn dismiss_dialog(state: &AppState, session_id: Uuid) -> Result<(), SessionError> {
    with_session(state, session_id, |session| session.dialog.close(CloseReason::Dismissed)).await
}

/// Render the session's page.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist.
pub async fn render_session(state: &AppState, session_id: Uuid) -> Result<String, SessionError> {
    with_session(state, session_id, |session| render_page(session_id, &session.view, &session.dialog)).await
}

/// The session's list in display order; `None` in "not found" mode.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist.
pub async fn list_images(state: &AppState, session_id: Uuid) -> Result<Option<Vec<ImageRecord>>, SessionError> {
    with_session(state, session_id, |session| session.view.to_records()).await
}

/// Clear one tile's loading flag. Returns whether this call flipped it.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist.
pub async fn mark_tile_loaded(state: &AppState, session_id: Uuid, index: usize) -> Result<bool, SessionError> {
    with_session(state, session_id, |session| session.view.finish_loading(index)).await
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
