//! Image store — the external managed database holding gallery records.
//!
//! DESIGN
//! ======
//! The store is reached through one client handle built at startup and
//! shared by the initial load and every upload. `ImageStore` is the seam the
//! rest of the crate depends on; `rest::RestStore` is the production client.

pub mod rest;

use crate::gallery::record::ImageRecord;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request could not be sent or its body not read.
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("store response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body was not a record list.
    #[error("store response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// STORE TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait ImageStore: Send + Sync {
    /// Fetch every image record ordered by ascending id. `None` when the
    /// store reports no result at all.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails or the body is malformed.
    async fn list_all_images(&self) -> Result<Option<Vec<ImageRecord>>, StoreError>;

    /// Insert one record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails or the store rejects it.
    async fn insert_image(&self, record: &ImageRecord) -> Result<(), StoreError>;
}
