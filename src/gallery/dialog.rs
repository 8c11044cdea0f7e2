//! Upload dialog — the modal that gates and persists new records.
//!
//! DESIGN
//! ======
//! A two-state machine (`Closed`, `Open`). Every close path (explicit
//! dismiss, gate rejection, successful submit) discards entered values.
//! There is no "submitting" state: a second submit can start while the first
//! insert is still in flight.
//!
//! ERROR HANDLING
//! ==============
//! A failed gate check closes the dialog silently, exactly like dismissing
//! it. A failed store insert is logged and otherwise ignored; the record is
//! appended to the local list either way.

use tracing::{debug, info, warn};

use super::form::{FieldError, UploadForm, UploadInput};
use super::record::{ImageRecord, next_id};
use crate::store::ImageStore;

/// Key value that lets a submission through.
pub const GATE_KEY: &str = "on";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Why the dialog went back to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Dismissed,
    GateRejected,
    Submitted,
}

/// Result of the synchronous part of a submission (validation, gate, record build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    /// Validation failed; the dialog stays open with values and errors kept.
    Blocked(Vec<FieldError>),
    /// Wrong key; the dialog has closed.
    Rejected,
    /// Ready to persist and append.
    Accepted(ImageRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The dialog was closed; nothing happened.
    NotOpen,
    Blocked(Vec<FieldError>),
    Rejected,
    /// The record was appended. `persisted` is false when the store insert failed.
    Added { record: ImageRecord, persisted: bool },
}

#[derive(Debug, Clone, Default)]
pub struct UploadDialog {
    state: DialogState,
    form: UploadForm,
    errors: Vec<FieldError>,
}

impl UploadDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DialogState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    #[must_use]
    pub fn form(&self) -> &UploadForm {
        &self.form
    }

    /// Inline errors from the last blocked submission.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    pub fn close(&mut self, reason: CloseReason) {
        if self.state == DialogState::Closed {
            return;
        }
        self.state = DialogState::Closed;
        self.form.clear();
        self.errors.clear();
        debug!(?reason, "upload dialog closed");
    }

    /// Validate `input`, apply the key gate, and build the record that would
    /// follow `amount` existing ones.
    pub fn screen(&mut self, input: UploadInput, amount: usize) -> Screening {
        self.form = UploadForm::from_input(input);

        if let Err(errors) = self.form.validate() {
            self.errors.clone_from(&errors);
            return Screening::Blocked(errors);
        }
        self.errors.clear();

        if self.form.key.value != GATE_KEY {
            self.close(CloseReason::GateRejected);
            return Screening::Rejected;
        }

        Screening::Accepted(ImageRecord::new(
            next_id(amount),
            self.form.image_src.value.clone(),
            Some(self.form.name.value.as_str()),
            Some(self.form.username.value.as_str()),
        ))
    }

    /// Hand an accepted record to `append` and close. Called once the store
    /// insert has settled, whatever its outcome.
    pub fn finish(&mut self, record: ImageRecord, append: impl FnOnce(ImageRecord)) {
        append(record);
        self.close(CloseReason::Submitted);
    }
}

/// Insert `record` into the store. Failures are logged, never retried.
pub async fn persist(store: &dyn ImageStore, record: &ImageRecord) -> bool {
    match store.insert_image(record).await {
        Ok(()) => {
            info!(id = record.id, "image record inserted");
            true
        }
        Err(e) => {
            warn!(error = %e, id = record.id, "image insert failed; local list appended anyway");
            false
        }
    }
}

#[cfg(test)]
#[path = "dialog_test.rs"]
mod tests;
