//! File-backed favorites store.

use camino::{Utf8Path, Utf8PathBuf};

use super::{FavoriteStore, FavoriteStoreError};
use crate::Favorites;

/// Favorites persisted as a flat JSON array in a single file.
///
/// The payload mirrors the browser-local storage this replaces: just an
/// array of image ids. A missing file loads as an empty list; saving
/// creates parent directories as needed. Duplicate ids in a stored
/// payload are dropped on load.
///
/// # Examples
/// ```no_run
/// use lightbox_core::{FavoriteStore, JsonFavoriteStore};
///
/// let store = JsonFavoriteStore::new("data/favorites.json");
/// let favorites = store.load()?;
/// println!("{} favorites", favorites.len());
/// # Ok::<(), lightbox_core::FavoriteStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFavoriteStore {
    path: Utf8PathBuf,
}

impl JsonFavoriteStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl FavoriteStore for JsonFavoriteStore {
    fn load(&self) -> Result<Favorites, FavoriteStoreError> {
        let payload = match lightbox_fs::read_utf8_file(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Favorites::default());
            }
            Err(err) => {
                return Err(FavoriteStoreError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };
        serde_json::from_str(&payload).map_err(|err| FavoriteStoreError::Parse {
            path: self.path.clone(),
            source: err,
        })
    }

    fn save(&mut self, favorites: &Favorites) -> Result<(), FavoriteStoreError> {
        let payload =
            serde_json::to_string_pretty(favorites).map_err(FavoriteStoreError::Serialise)?;
        lightbox_fs::write_utf8_file(&self.path, &payload).map_err(|err| {
            FavoriteStoreError::Write {
                path: self.path.clone(),
                source: err,
            }
        })
    }
}
