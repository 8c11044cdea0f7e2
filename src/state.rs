//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the single store client, the startup snapshot every new session
//! is seeded from, and the live sessions. Each session owns its own gallery
//! list and upload dialog; nothing else is shared between sessions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::gallery::dialog::UploadDialog;
use crate::gallery::record::ImageRecord;
use crate::gallery::view::GalleryView;
use crate::store::ImageStore;

// =============================================================================
// GALLERY SESSION
// =============================================================================

/// One visitor's page state, discarded when they start over at `/`.
pub struct GallerySession {
    pub view: GalleryView,
    pub dialog: UploadDialog,
    pub last_seen: Instant,
}

impl GallerySession {
    #[must_use]
    pub fn new(view: GalleryView) -> Self {
        Self { view, dialog: UploadDialog::new(), last_seen: Instant::now() }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ImageStore>,
    pub initial_images: Arc<Option<Vec<ImageRecord>>>,
    pub sessions: Arc<RwLock<HashMap<Uuid, GallerySession>>>,
    pub session_ttl: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ImageStore>, initial_images: Option<Vec<ImageRecord>>, session_ttl: Duration) -> Self {
        Self {
            store,
            initial_images: Arc::new(initial_images),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            session_ttl,
        }
    }
}
