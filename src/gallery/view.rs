//! Gallery view state — the session's ordered list of image tiles.
//!
//! DESIGN
//! ======
//! The view is seeded once from the startup query and only ever grows by
//! `append`. Absence of the seed (`None`) is kept distinct from an empty list
//! so the page can show its "not found" fallback instead of an empty grid.

use super::record::ImageRecord;

/// One rendered image. `loading` drives the blur/scale transition and is
/// cleared exactly once, when the image reports it has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    record: ImageRecord,
    loading: bool,
}

impl Tile {
    #[must_use]
    pub fn new(record: ImageRecord) -> Self {
        Self { record, loading: true }
    }

    #[must_use]
    pub fn record(&self) -> &ImageRecord {
        &self.record
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark the image as loaded. Returns `true` only for the call that
    /// performed the transition.
    pub fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }
}

/// Session-owned gallery list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    tiles: Option<Vec<Tile>>,
}

impl GalleryView {
    #[must_use]
    pub fn new(initial: Option<Vec<ImageRecord>>) -> Self {
        Self { tiles: initial.map(|records| records.into_iter().map(Tile::new).collect()) }
    }

    /// True when the seed was absent and nothing has been appended since.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.tiles.is_none()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        self.tiles.as_deref().unwrap_or(&[])
    }

    /// Number of records currently shown; the `amount` handed to the upload dialog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles().is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ImageRecord> {
        self.tiles().iter().map(Tile::record)
    }

    /// Snapshot of the list in display order, `None` in "not found" mode.
    #[must_use]
    pub fn to_records(&self) -> Option<Vec<ImageRecord>> {
        self.tiles.as_ref().map(|tiles| tiles.iter().map(|t| t.record.clone()).collect())
    }

    /// Append one record at the end. No de-duplication, no re-sort.
    pub fn append(&mut self, record: ImageRecord) {
        self.tiles.get_or_insert_with(Vec::new).push(Tile::new(record));
    }

    /// Clear the loading flag of the tile at `index`. Returns `false` when the
    /// index is out of range or the tile already finished loading.
    pub fn finish_loading(&mut self, index: usize) -> bool {
        self.tiles
            .as_mut()
            .and_then(|tiles| tiles.get_mut(index))
            .is_some_and(Tile::finish_loading)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
