//! Upload service — run a dialog submission against a live session.
//!
//! DESIGN
//! ======
//! Screening and `UploadDialog::finish` run under the sessions lock; the
//! store insert between them runs with the lock released. The `amount` used for
//! the new id is read before the insert; a second submit arriving while the
//! first is in flight sees the same amount and produces the same id.
//!
//! ERROR HANDLING
//! ==============
//! The insert's outcome never changes the local result: the record is
//! appended and the dialog closed either way. If the session was swept while
//! the insert was in flight, the record only lands in the store.

use tracing::warn;
use uuid::Uuid;

use crate::gallery::dialog::{Screening, SubmitOutcome, persist};
use crate::gallery::form::UploadInput;
use crate::services::session::{SessionError, with_session};
use crate::state::AppState;

/// Submit the upload form for `session_id`.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist when the
/// submission starts.
pub async fn submit_upload(
    state: &AppState,
    session_id: Uuid,
    input: UploadInput,
) -> Result<SubmitOutcome, SessionError> {
    let screening = with_session(state, session_id, |session| {
        if !session.dialog.is_open() {
            return None;
        }
        let amount = session.view.len();
        Some(session.dialog.screen(input, amount))
    })
    .await?;

    let record = match screening {
        None => return Ok(SubmitOutcome::NotOpen),
        Some(Screening::Blocked(errors)) => return Ok(SubmitOutcome::Blocked(errors)),
        Some(Screening::Rejected) => return Ok(SubmitOutcome::Rejected),
        Some(Screening::Accepted(record)) => record,
    };

    let persisted = persist(state.store.as_ref(), &record).await;

    let appended = with_session(state, session_id, |session| {
        session.dialog.finish(record.clone(), |r| session.view.append(r));
    })
    .await;
    if appended.is_err() {
        warn!(%session_id, id = record.id, "session expired during insert; record not appended locally");
    }

    Ok(SubmitOutcome::Added { record, persisted })
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
