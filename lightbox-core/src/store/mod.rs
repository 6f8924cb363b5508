//! Favorites persistence seam.
//!
//! The eligibility rules in [`crate::favorite`] only decide; whoever
//! drives the engine owns the mutation and pushes the updated list
//! through a [`FavoriteStore`]. Implementations included here:
//!
//! - [`JsonFavoriteStore`] (feature `store-json`): a single JSON file.
//! - [`crate::test_support::MemoryFavoriteStore`]: in-memory, for tests.

use camino::Utf8PathBuf;

use crate::Favorites;

#[cfg(feature = "store-json")]
mod json;

#[cfg(feature = "store-json")]
pub use json::JsonFavoriteStore;

/// Durable storage for the favorites list.
pub trait FavoriteStore {
    /// Load the persisted list.
    ///
    /// A store with nothing persisted yet returns an empty list rather
    /// than an error.
    fn load(&self) -> Result<Favorites, FavoriteStoreError>;

    /// Persist `favorites`, replacing whatever was stored before.
    fn save(&mut self, favorites: &Favorites) -> Result<(), FavoriteStoreError>;
}

/// Errors raised by [`FavoriteStore`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum FavoriteStoreError {
    /// Reading the backing file failed.
    #[error("failed to read favorites from {path}: {source}")]
    Read {
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the backing file failed.
    #[error("failed to write favorites to {path}: {source}")]
    Write {
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The stored payload was not a valid favorites list.
    #[cfg(feature = "serde")]
    #[error("failed to parse favorites from {path}: {source}")]
    Parse {
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The list could not be encoded for storage.
    #[cfg(feature = "serde")]
    #[error("failed to serialise favorites: {0}")]
    Serialise(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageId;
    use crate::test_support::MemoryFavoriteStore;
    use rstest::rstest;

    #[rstest]
    fn fresh_store_loads_empty_list() {
        let store = MemoryFavoriteStore::default();
        let favorites = store.load().expect("load");
        assert!(favorites.is_empty());
    }

    #[rstest]
    fn save_then_load_round_trips() {
        let mut store = MemoryFavoriteStore::default();
        let favorites: Favorites = ["a", "b"]
            .into_iter()
            .map(|id| ImageId::new(id).expect("valid id"))
            .collect();
        store.save(&favorites).expect("save");
        assert_eq!(store.load().expect("load"), favorites);
    }

    #[rstest]
    fn save_replaces_previous_contents() {
        let mut store = MemoryFavoriteStore::default();
        let first: Favorites = [ImageId::new("a").expect("valid id")].into_iter().collect();
        let second: Favorites = [ImageId::new("b").expect("valid id")].into_iter().collect();
        store.save(&first).expect("save first");
        store.save(&second).expect("save second");
        assert_eq!(store.load().expect("load"), second);
    }
}
