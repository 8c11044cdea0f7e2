use super::*;
use crate::gallery::form::FieldName;
use crate::gallery::record::{DEFAULT_NAME, DEFAULT_USERNAME};
use crate::gallery::view::GalleryView;
use crate::store::test_helpers::MemoryStore;

fn seeded_view(count: i64) -> GalleryView {
    GalleryView::new(Some(
        (1..=count)
            .map(|id| ImageRecord::new(id, format!("https://img.test/{id}.jpg"), None, None))
            .collect(),
    ))
}

fn valid_input(key: &str) -> UploadInput {
    UploadInput { image_src: "https://img.test/new.jpg".into(), key: key.into(), ..UploadInput::default() }
}

fn open_dialog() -> UploadDialog {
    let mut dialog = UploadDialog::new();
    dialog.open();
    dialog
}

// =============================================================
// State machine
// =============================================================

#[test]
fn dialog_starts_closed() {
    let dialog = UploadDialog::new();
    assert_eq!(dialog.state(), DialogState::Closed);
    assert!(!dialog.is_open());
}

#[test]
fn open_then_dismiss_returns_to_closed() {
    let mut dialog = open_dialog();
    assert_eq!(dialog.state(), DialogState::Open);
    dialog.close(CloseReason::Dismissed);
    assert_eq!(dialog.state(), DialogState::Closed);
}

#[test]
fn close_discards_entered_values_and_errors() {
    let mut dialog = open_dialog();
    let _ = dialog.screen(UploadInput { image_src: "nope".into(), name: "Fern".into(), ..UploadInput::default() }, 0);
    assert!(!dialog.errors().is_empty());
    dialog.close(CloseReason::Dismissed);
    assert!(dialog.errors().is_empty());
    assert!(dialog.form().fields().iter().all(|f| f.value.is_empty()));
}

// =============================================================
// screen
// =============================================================

#[test]
fn screen_blocks_invalid_url_and_keeps_values() {
    let mut dialog = open_dialog();
    let outcome = dialog.screen(UploadInput { image_src: "not a url".into(), key: "on".into(), ..UploadInput::default() }, 2);
    assert_eq!(outcome, Screening::Blocked(vec![FieldError::Pattern { field: FieldName::ImageSrc }]));
    assert!(dialog.is_open());
    assert_eq!(dialog.form().image_src.value, "not a url");
    assert_eq!(dialog.errors().len(), 1);
}

#[test]
fn screen_rejects_wrong_key_and_closes() {
    let mut dialog = open_dialog();
    assert_eq!(dialog.screen(valid_input("off"), 2), Screening::Rejected);
    assert!(!dialog.is_open());
}

#[test]
fn screen_gate_is_case_sensitive() {
    let mut dialog = open_dialog();
    assert_eq!(dialog.screen(valid_input("ON"), 0), Screening::Rejected);
}

#[test]
fn screen_accepts_and_defaults_metadata() {
    let mut dialog = open_dialog();
    let Screening::Accepted(record) = dialog.screen(valid_input("on"), 4) else {
        panic!("expected accepted screening");
    };
    assert_eq!(record.id, 5);
    assert_eq!(record.image_src, "https://img.test/new.jpg");
    assert_eq!(record.name, DEFAULT_NAME);
    assert_eq!(record.username, DEFAULT_USERNAME);
}

// =============================================================
// finish
// =============================================================

#[test]
fn finish_appends_then_closes() {
    let mut view = seeded_view(3);
    let mut dialog = open_dialog();
    let Screening::Accepted(record) = dialog.screen(valid_input("on"), view.len()) else {
        panic!("expected accepted screening");
    };

    dialog.finish(record.clone(), |r| view.append(r));

    assert_eq!(view.len(), 4);
    assert_eq!(view.records().last(), Some(&record));
    assert!(!dialog.is_open());
    assert!(dialog.form().fields().iter().all(|f| f.value.is_empty()));
}

// =============================================================
// persist
// =============================================================

#[tokio::test]
async fn persist_reports_insert_outcome() {
    let record = ImageRecord::new(1, "https://img.test/1.jpg", None, None);

    let store = MemoryStore::new(Vec::new());
    assert!(persist(&store, &record).await);
    assert_eq!(store.inserted(), vec![record.clone()]);

    assert!(!persist(&MemoryStore::failing(), &record).await);
}
