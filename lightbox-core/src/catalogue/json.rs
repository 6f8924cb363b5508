//! File-backed image catalogue.

use camino::{Utf8Path, Utf8PathBuf};

use super::{CatalogueError, ImageCatalogue};
use crate::{ImageId, ImageRecord};

/// Catalogue read from a JSON array of image records.
///
/// Every call re-reads the file, so edits show up on the next listing.
/// Wrap it in [`super::CachedCatalogue`] when repeated reads should be
/// served from memory instead.
#[derive(Debug, Clone)]
pub struct JsonCatalogue {
    path: Utf8PathBuf,
}

impl JsonCatalogue {
    /// Create a catalogue backed by the file at `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl ImageCatalogue for JsonCatalogue {
    fn list(&self) -> Result<Vec<ImageRecord>, CatalogueError> {
        let payload =
            lightbox_fs::read_utf8_file(&self.path).map_err(|err| CatalogueError::Read {
                path: self.path.clone(),
                source: err,
            })?;
        serde_json::from_str(&payload).map_err(|err| CatalogueError::Parse {
            path: self.path.clone(),
            source: err,
        })
    }

    fn details(&self, id: &ImageId) -> Result<ImageRecord, CatalogueError> {
        self.list()?
            .into_iter()
            .find(|record| &record.id == id)
            .ok_or_else(|| CatalogueError::UnknownImage { id: id.clone() })
    }
}
