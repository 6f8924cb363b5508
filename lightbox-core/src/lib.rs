//! Core domain model for the Lightbox engine.
//!
//! The crate hosts the vocabulary shared across the workspace:
//! - image records with lenient engagement-counter decoding
//!   ([`ImageRecord`], [`EngagementCounts`]);
//! - the closed user [`Role`] tiers;
//! - the favorite eligibility rules ([`check_favorite`]) and the
//!   [`Favorites`] list they consult;
//! - the [`PopularityScorer`] seam implemented by `lightbox-scorer`;
//! - ordering helpers for image lists ([`SortKey`], [`sort_images`]);
//! - persistence seams for favorites ([`FavoriteStore`]) and catalogue data
//!   ([`ImageCatalogue`]), with JSON-file implementations behind the
//!   `store-json` feature.
//!
//! Scoring and eligibility are pure functions of their arguments: role and
//! image data always arrive as explicit parameters, never from ambient
//! state, so both can be exercised in isolation.
//!
//! # Examples
//! ```
//! use chrono::Utc;
//! use lightbox_core::{Favorites, ImageRecord, Role, check_favorite};
//!
//! # fn main() -> Result<(), lightbox_core::ImageIdError> {
//! let image = ImageRecord::new("img-1")?.with_created_at("2024-05-01T10:00:00Z");
//! let decision = check_favorite(&image, Role::Admin, &Favorites::new(), Utc::now());
//! assert!(decision.is_allowed());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
pub mod favorite;
pub mod image;
pub mod role;
pub mod scorer;
pub mod sort;
pub mod store;
pub mod test_support;

pub use catalogue::{CachedCatalogue, CatalogueError, ImageCatalogue};
#[cfg(feature = "store-json")]
pub use catalogue::JsonCatalogue;
pub use favorite::{
    AGE_LIMIT_DAYS, DenyReason, FavoriteDecision, Favorites, check_favorite, check_favorite_now,
};
pub use image::{EngagementCounts, ImageId, ImageIdError, ImageRecord, parse_created_at};
pub use role::{ParseRoleError, Role};
pub use scorer::{PopularityScorer, sanitise_score};
pub use sort::{ParseSortKeyError, SortKey, sort_images};
pub use store::{FavoriteStore, FavoriteStoreError};
#[cfg(feature = "store-json")]
pub use store::JsonFavoriteStore;
pub use test_support::{MemoryCatalogue, MemoryFavoriteStore};
