//! Facade crate for the Lightbox image engine.
//!
//! This crate re-exports the catalogue, favorites, and scoring domain types
//! and exposes the JSON stores and media tooling behind feature flags.

#![forbid(unsafe_code)]

pub use lightbox_core::{
    CachedCatalogue, CatalogueError, DenyReason, EngagementCounts, FavoriteDecision,
    FavoriteStore, FavoriteStoreError, Favorites, ImageCatalogue, ImageId, ImageIdError,
    ImageRecord, ParseRoleError, ParseSortKeyError, PopularityScorer, Role, SortKey,
    check_favorite, check_favorite_now, sanitise_score, sort_images,
};

#[cfg(feature = "store-json")]
pub use lightbox_core::{JsonCatalogue, JsonFavoriteStore};

pub use lightbox_scorer::{
    EngagementScorer, EngagementWeights, ScoredImage, WeightsError, rank_by_popularity,
};

#[cfg(feature = "media")]
pub use lightbox_media::{
    ExportConfig, ExportConfigBuilder, ExportConfigError, ExportFormat, FilterKind, ImageAsset,
    Pipeline, TransformStep,
};
