//! Catalog service — the one-time startup query that seeds every session.

use tracing::{info, warn};

use crate::gallery::record::ImageRecord;
use crate::store::{ImageStore, StoreError};

/// Fetch every image record, ordered by id.
///
/// # Errors
///
/// Propagates the store's error; callers treat it as fatal.
pub async fn load_initial(store: &dyn ImageStore) -> Result<Option<Vec<ImageRecord>>, StoreError> {
    let images = store.list_all_images().await?;
    match &images {
        Some(records) => info!(count = records.len(), "initial image list loaded"),
        None => warn!("store returned no image list; gallery will show the not-found message"),
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers::records;
    use crate::store::test_helpers::MemoryStore;

    #[tokio::test]
    async fn load_initial_returns_store_list() {
        let store = MemoryStore::new(records(3));
        let images = load_initial(&store).await.unwrap().unwrap();
        assert_eq!(images.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn load_initial_keeps_absence() {
        let store = MemoryStore::absent();
        assert!(load_initial(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn load_initial_propagates_errors() {
        let store = MemoryStore::failing();
        assert!(load_initial(&store).await.is_err());
    }
}
