//! Gallery domain — records, the session list, the upload form and dialog.

pub mod dialog;
pub mod form;
pub mod record;
pub mod view;
