//! Image catalogue seam.
//!
//! An [`ImageCatalogue`] is the read-only source of image records:
//! listing and per-image detail lookup. Implementations included here:
//!
//! - [`JsonCatalogue`] (feature `store-json`): records from a JSON file,
//!   re-read on every call.
//! - [`CachedCatalogue`]: wraps any catalogue and memoizes its answers.
//! - [`crate::test_support::MemoryCatalogue`]: in-memory, for tests.

use camino::Utf8PathBuf;

use crate::{ImageId, ImageRecord};

mod cache;
#[cfg(feature = "store-json")]
mod json;

pub use cache::CachedCatalogue;
#[cfg(feature = "store-json")]
pub use json::JsonCatalogue;

/// Read-only source of image records.
pub trait ImageCatalogue {
    /// All records, in catalogue order.
    fn list(&self) -> Result<Vec<ImageRecord>, CatalogueError>;

    /// The record with identifier `id`.
    fn details(&self, id: &ImageId) -> Result<ImageRecord, CatalogueError>;
}

/// Errors raised by [`ImageCatalogue`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// No record carries the requested identifier.
    #[error("no image with id '{id}' in the catalogue")]
    UnknownImage {
        /// The identifier that was looked up.
        id: ImageId,
    },
    /// Reading the backing file failed.
    #[error("failed to read catalogue from {path}: {source}")]
    Read {
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The stored payload was not a valid record list.
    #[cfg(feature = "serde")]
    #[error("failed to parse catalogue from {path}: {source}")]
    Parse {
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}
