//! Test-only, in-memory store and catalogue implementations used by unit
//! and behaviour tests.

use crate::catalogue::{CatalogueError, ImageCatalogue};
use crate::favorite::Favorites;
use crate::image::{ImageId, ImageRecord};
use crate::store::{FavoriteStore, FavoriteStoreError};

/// In-memory [`ImageCatalogue`] serving a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogue {
    records: Vec<ImageRecord>,
}

impl MemoryCatalogue {
    /// Append a single record.
    #[must_use]
    pub fn with_record(self, record: ImageRecord) -> Self {
        self.with_records(std::iter::once(record))
    }

    /// Append every record from `records`.
    #[must_use]
    pub fn with_records<I: IntoIterator<Item = ImageRecord>>(mut self, records: I) -> Self {
        self.records.extend(records);
        self
    }
}

impl ImageCatalogue for MemoryCatalogue {
    fn list(&self) -> Result<Vec<ImageRecord>, CatalogueError> {
        Ok(self.records.clone())
    }

    fn details(&self, id: &ImageId) -> Result<ImageRecord, CatalogueError> {
        self.records
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or_else(|| CatalogueError::UnknownImage { id: id.clone() })
    }
}

/// In-memory [`FavoriteStore`] holding a single favorites list.
#[derive(Debug, Clone, Default)]
pub struct MemoryFavoriteStore {
    favorites: Favorites,
}

impl MemoryFavoriteStore {
    /// Start with `favorites` already stored.
    #[must_use]
    pub fn with_favorites(mut self, favorites: Favorites) -> Self {
        self.favorites = favorites;
        self
    }
}

impl FavoriteStore for MemoryFavoriteStore {
    fn load(&self) -> Result<Favorites, FavoriteStoreError> {
        Ok(self.favorites.clone())
    }

    fn save(&mut self, favorites: &Favorites) -> Result<(), FavoriteStoreError> {
        self.favorites = favorites.clone();
        Ok(())
    }
}

/// Deterministic record set shared by ordering tests and, through the
/// `test-support` feature, by downstream crates.
///
/// Covers the interesting shapes: a popular recent image, a restricted
/// one, an archive image past the age limit, and one with an unreadable
/// publication date.
#[cfg(any(test, feature = "test-support"))]
#[must_use]
pub fn sample_records() -> Vec<ImageRecord> {
    fn seed(id: &str) -> ImageRecord {
        ImageRecord::new(id).expect("sample ids are non-empty")
    }

    let aurora = seed("img-aurora")
        .with_title("Aurora over Kirkjufell")
        .with_description("Northern lights arcing over the mountain.")
        .with_url("https://images.example/aurora.jpg")
        .with_created_at("2024-05-01T10:00:00Z")
        .with_engagement(crate::EngagementCounts::new(1500, 150, 100));
    let vault = seed("img-vault")
        .with_title("Vault door macro")
        .with_url("https://images.example/vault.jpg")
        .with_created_at("2024-06-12T08:30:00Z")
        .with_kind("restricted")
        .with_engagement(crate::EngagementCounts::new(900, 220, 10));
    let archive = seed("img-archive")
        .with_title("Harbour, 1998")
        .with_created_at("1998-03-20")
        .with_engagement(crate::EngagementCounts::new(90_000, 4_000, 800));
    let mut torn = seed("img-torn").with_title("Torn negative");
    torn.created_at = Some("yesterday-ish".to_owned());
    vec![aurora, vault, archive, torn]
}
