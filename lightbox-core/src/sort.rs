//! Catalogue ordering.
//!
//! Each [`SortKey`] names a stable ordering over image records. Sorting
//! is in-place and never fails: records with missing or unparseable
//! dates sort after dated ones rather than aborting the listing.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::ImageRecord;

/// Orderings the catalogue can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Alphabetical by display title.
    #[default]
    Title,
    /// Newest first; records without a valid date sort last.
    CreatedAt,
    /// Most viewed first.
    Views,
}

impl SortKey {
    /// Canonical name accepted by [`SortKey::from_str`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::CreatedAt => "created-at",
            Self::Views => "views",
        }
    }

    /// Comparator implementing this ordering.
    #[must_use]
    pub fn comparator(self) -> fn(&ImageRecord, &ImageRecord) -> Ordering {
        match self {
            Self::Title => by_title,
            Self::CreatedAt => by_created_at,
            Self::Views => by_views,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn by_title(left: &ImageRecord, right: &ImageRecord) -> Ordering {
    left.display_title().cmp(right.display_title())
}

fn by_created_at(left: &ImageRecord, right: &ImageRecord) -> Ordering {
    match (left.created_at_utc(), right.created_at_utc()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_views(left: &ImageRecord, right: &ImageRecord) -> Ordering {
    right.engagement.views.cmp(&left.engagement.views)
}

/// Sort `images` in place by `key`.
///
/// The sort is stable, so records that compare equal keep their
/// catalogue order.
pub fn sort_images(images: &mut [ImageRecord], key: SortKey) {
    images.sort_by(key.comparator());
}

/// Error raised when a sort key name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}'; expected title, created-at, or views")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "title" | "name" => Ok(Self::Title),
            "created-at" | "date" => Ok(Self::CreatedAt),
            "views" => Ok(Self::Views),
            other => Err(ParseSortKeyError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(id: &str, title: &str, created_at: Option<&str>, views: u64) -> ImageRecord {
        let mut record = ImageRecord::new(id)
            .expect("valid id")
            .with_title(title);
        record.created_at = created_at.map(String::from);
        record.engagement.views = views;
        record
    }

    fn ids(images: &[ImageRecord]) -> Vec<&str> {
        images.iter().map(|image| image.id.as_str()).collect()
    }

    #[rstest]
    fn title_sort_is_alphabetical_with_fallback() {
        let mut images = vec![
            record("b", "Zebra", None, 0),
            record("a", "Aurora", None, 0),
            record("c", "", None, 0),
        ];
        sort_images(&mut images, SortKey::Title);
        // The untitled record sorts by its "Untitled image" fallback.
        assert_eq!(ids(&images), ["a", "c", "b"]);
    }

    #[rstest]
    fn date_sort_puts_newest_first_and_undated_last() {
        let mut images = vec![
            record("old", "", Some("2023-01-01"), 0),
            record("broken", "", Some("not-a-date"), 0),
            record("new", "", Some("2024-06-01T12:00:00Z"), 0),
            record("missing", "", None, 0),
        ];
        sort_images(&mut images, SortKey::CreatedAt);
        assert_eq!(ids(&images), ["new", "old", "broken", "missing"]);
    }

    #[rstest]
    fn views_sort_is_descending_and_stable() {
        let mut images = vec![
            record("low", "", None, 5),
            record("first-tie", "", None, 100),
            record("second-tie", "", None, 100),
            record("high", "", None, 2000),
        ];
        sort_images(&mut images, SortKey::Views);
        assert_eq!(ids(&images), ["high", "first-tie", "second-tie", "low"]);
    }

    #[rstest]
    fn sample_records_order_newest_first_with_broken_dates_last() {
        let mut images = crate::test_support::sample_records();
        sort_images(&mut images, SortKey::CreatedAt);
        assert_eq!(
            ids(&images),
            ["img-vault", "img-aurora", "img-archive", "img-torn"]
        );
    }

    #[rstest]
    fn sample_records_order_by_view_count() {
        let mut images = crate::test_support::sample_records();
        sort_images(&mut images, SortKey::Views);
        assert_eq!(
            ids(&images),
            ["img-archive", "img-aurora", "img-vault", "img-torn"]
        );
    }

    #[rstest]
    #[case("title", SortKey::Title)]
    #[case("name", SortKey::Title)]
    #[case("created-at", SortKey::CreatedAt)]
    #[case("date", SortKey::CreatedAt)]
    #[case("VIEWS", SortKey::Views)]
    fn parsing_accepts_known_names(#[case] input: &str, #[case] expected: SortKey) {
        assert_eq!(input.parse::<SortKey>().expect("known key"), expected);
    }

    #[rstest]
    fn parsing_rejects_unknown_names() {
        let err = "likes".parse::<SortKey>().expect_err("unknown key");
        assert_eq!(
            err.to_string(),
            "unknown sort key 'likes'; expected title, created-at, or views"
        );
    }

    #[rstest]
    fn display_round_trips_canonical_names() {
        for key in [SortKey::Title, SortKey::CreatedAt, SortKey::Views] {
            assert_eq!(key.to_string().parse::<SortKey>().expect("canonical"), key);
        }
    }
}
