//! Favorite eligibility rules and the favorites list they consult.
//!
//! [`check_favorite`] is a pure function: it never mutates the favorites
//! list and never touches the clock. Callers capture `now` once per
//! evaluation (or use [`check_favorite_now`]) and apply the mutation
//! themselves when the decision allows it, so a decision and its
//! corresponding write stay clearly separated.

use chrono::{DateTime, Utc};

use crate::{ImageId, ImageRecord, Role};

/// Days after which non-admin users may no longer favorite an image.
pub const AGE_LIMIT_DAYS: i64 = 365;

/// Ordered, duplicate-free list of favorite image identifiers.
///
/// Serialises as a flat JSON array of ids — the shape the browser-local
/// storage this replaces used. Duplicate entries in stored payloads are
/// dropped on load with a warning, preserving the first occurrence.
///
/// # Examples
/// ```
/// use lightbox_core::{Favorites, ImageId};
///
/// let mut favorites = Favorites::new();
/// let id = ImageId::new("img-1")?;
/// assert!(favorites.insert(id.clone()));
/// assert!(!favorites.insert(id.clone()));
/// assert!(favorites.contains(&id));
/// # Ok::<(), lightbox_core::ImageIdError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<ImageId>,
}

impl Favorites {
    /// Construct an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether `id` is already a favorite.
    #[must_use]
    pub fn contains(&self, id: &ImageId) -> bool {
        self.ids.contains(id)
    }

    /// Append an identifier unless it is already present.
    ///
    /// Returns `true` when the identifier was added.
    pub fn insert(&mut self, id: ImageId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Number of favorites in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Report whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate identifiers in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImageId> {
        self.ids.iter()
    }
}

impl FromIterator<ImageId> for Favorites {
    /// Collect identifiers, dropping duplicates.
    ///
    /// Keeps the first occurrence of each identifier in order; duplicates
    /// are logged and discarded so a corrupted stored list loads cleanly.
    fn from_iter<I: IntoIterator<Item = ImageId>>(ids: I) -> Self {
        let mut favorites = Self::new();
        for id in ids {
            if favorites.contains(&id) {
                log::warn!("dropping duplicate favorite '{id}'");
            } else {
                favorites.ids.push(id);
            }
        }
        favorites
    }
}

impl<'a> IntoIterator for &'a Favorites {
    type Item = &'a ImageId;
    type IntoIter = std::slice::Iter<'a, ImageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Favorites {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.ids.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Favorites {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ids = Vec::<ImageId>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}

/// Reasons a favorite request is denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The image is already present in the favorites list.
    AlreadyFavorited,
    /// The image is past [`AGE_LIMIT_DAYS`] and the user is not an admin.
    AgeRestrictedToAdmins,
    /// The image is restricted and the user lacks the premium tier.
    RestrictedRequiresPremium,
    /// The image's publication date is missing or unparseable.
    InvalidMetadata,
}

impl DenyReason {
    /// Human-readable reason shown to the user.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyFavorited => "already in favorites",
            Self::AgeRestrictedToAdmins => "only admins may favorite images older than one year",
            Self::RestrictedRequiresPremium => "restricted images require premium role",
            Self::InvalidMetadata => "invalid image metadata",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a favorite eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteDecision {
    /// The image may be appended to the favorites list.
    Allowed,
    /// The image may not be added; the payload says why.
    Denied(DenyReason),
}

impl FavoriteDecision {
    /// Report whether the addition is permitted.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Human-readable reason for this outcome.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Allowed => "added",
            Self::Denied(reason) => reason.as_str(),
        }
    }
}

impl std::fmt::Display for FavoriteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Decide whether `image` may be added to `favorites` at `now`.
///
/// Rules run in a fixed priority order and the first match wins, which
/// also fixes the message the user sees:
/// 1. an id already in the list is rejected, regardless of role or age;
/// 2. images older than [`AGE_LIMIT_DAYS`] whole days are admin-only;
/// 3. restricted images require the premium tier.
///
/// Age counts whole elapsed days, truncated. A record whose publication
/// date is missing or unparseable is always denied rather than slipping
/// past the age comparison.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use lightbox_core::{Favorites, ImageRecord, Role, check_favorite};
///
/// # fn main() -> Result<(), lightbox_core::ImageIdError> {
/// let image = ImageRecord::new("img-1")?
///     .with_created_at("2020-01-01")
///     .with_kind("restricted");
/// let decision = check_favorite(&image, Role::Guest, &Favorites::new(), Utc::now());
/// assert_eq!(
///     decision.reason(),
///     "only admins may favorite images older than one year",
/// );
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn check_favorite(
    image: &ImageRecord,
    role: Role,
    favorites: &Favorites,
    now: DateTime<Utc>,
) -> FavoriteDecision {
    if favorites.contains(&image.id) {
        return FavoriteDecision::Denied(DenyReason::AlreadyFavorited);
    }

    let Some(published) = image.created_at_utc() else {
        return FavoriteDecision::Denied(DenyReason::InvalidMetadata);
    };
    let age_days = now.signed_duration_since(published).num_days();
    if age_days > AGE_LIMIT_DAYS && role != Role::Admin {
        return FavoriteDecision::Denied(DenyReason::AgeRestrictedToAdmins);
    }

    if image.is_restricted() && role != Role::Premium {
        return FavoriteDecision::Denied(DenyReason::RestrictedRequiresPremium);
    }

    FavoriteDecision::Allowed
}

/// [`check_favorite`] with `now` captured once from the wall clock.
#[must_use]
pub fn check_favorite_now(
    image: &ImageRecord,
    role: Role,
    favorites: &Favorites,
) -> FavoriteDecision {
    check_favorite(image, role, favorites, Utc::now())
}
