//! Image records and their identifiers.
//!
//! Records arrive from untyped providers, so decoding is deliberately
//! lenient everywhere except identity: engagement counters coerce malformed
//! values to zero and timestamps are kept verbatim until someone asks for
//! them, but a payload without a usable `id` fails to decode outright.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Classification value that triggers the premium-only rule.
const RESTRICTED_KIND: &str = "restricted";

/// Fallback title shown when a record has none.
const UNTITLED_TITLE: &str = "Untitled image";

/// Fallback description shown when a record has none.
const NO_DESCRIPTION: &str = "No description available.";

/// Opaque, non-empty image identifier.
///
/// # Examples
/// ```
/// use lightbox_core::ImageId;
///
/// let id = ImageId::new("img-1")?;
/// assert_eq!(id.as_str(), "img-1");
/// assert!(ImageId::new("   ").is_err());
/// # Ok::<(), lightbox_core::ImageIdError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ImageId(String);

/// Errors returned by [`ImageId::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageIdError {
    /// The identifier was empty or only whitespace.
    #[error("image identifier must not be empty")]
    Empty,
}

impl ImageId {
    /// Validate and wrap an identifier.
    ///
    /// # Errors
    /// Returns [`ImageIdError::Empty`] when the identifier is empty or only
    /// whitespace. Eligibility cannot be decided without an identity, so
    /// this is the one place decoding an image payload can fail.
    pub fn new(id: impl Into<String>) -> Result<Self, ImageIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ImageIdError::Empty);
        }
        Ok(Self(id))
    }

    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageId {
    type Error = ImageIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageId> for String {
    fn from(id: ImageId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ImageId {
    type Err = ImageIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Raw engagement counters for an image.
///
/// Wire payloads are untyped: counters may arrive as JSON numbers, numeric
/// strings, or nulls, and may be missing entirely. Deserialization coerces
/// anything unusable to `0` rather than failing — fractional values
/// truncate toward zero and negative values clamp to `0` — so engagement
/// data can never make a record undecodable.
///
/// # Examples
/// ```
/// use lightbox_core::EngagementCounts;
///
/// let counts: EngagementCounts =
///     serde_json::from_str(r#"{"views": "1500", "likes": null, "shares": 10.9}"#)?;
/// assert_eq!(counts, EngagementCounts::new(1500, 0, 10));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngagementCounts {
    /// Number of times the image was viewed.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient_count"))]
    pub views: u64,
    /// Number of likes received.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient_count"))]
    pub likes: u64,
    /// Number of times the image was shared.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient_count"))]
    pub shares: u64,
}

impl EngagementCounts {
    /// Construct counters from explicit values.
    #[must_use]
    pub const fn new(views: u64, likes: u64, shares: u64) -> Self {
        Self {
            views,
            likes,
            shares,
        }
    }
}

#[cfg(feature = "serde")]
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_count(&value))
}

/// Interpret an untyped counter value, degrading to `0` on anything
/// unusable.
#[cfg(feature = "serde")]
fn coerce_count(value: &serde_json::Value) -> u64 {
    if let Some(count) = value.as_u64() {
        return count;
    }
    if let Some(raw) = value.as_f64() {
        return truncate_count(raw);
    }
    if let Some(raw) = value.as_str() {
        return coerce_count_text(raw);
    }
    0
}

#[cfg(feature = "serde")]
fn coerce_count_text(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if let Ok(count) = trimmed.parse::<u64>() {
        return count;
    }
    trimmed.parse::<f64>().map_or(0, truncate_count)
}

/// Truncate toward zero, clamping negative and non-finite values to `0`.
#[cfg(feature = "serde")]
fn truncate_count(raw: f64) -> u64 {
    if raw.is_finite() && raw > 0.0 {
        raw as u64
    } else {
        0
    }
}

/// A single catalogue entry.
///
/// Only `id` is required; every other field tolerates absence. The
/// publication timestamp is kept as the raw provider string so a garbage
/// value surfaces as "unparseable" at evaluation time instead of failing
/// decode.
///
/// # Examples
/// ```
/// use lightbox_core::ImageRecord;
///
/// let record: ImageRecord = serde_json::from_str(
///     r#"{"id": "img-1", "type": "restricted", "views": "2000"}"#,
/// )?;
/// assert!(record.is_restricted());
/// assert_eq!(record.engagement.views, 2000);
/// assert_eq!(record.display_title(), "Untitled image");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImageRecord {
    /// Unique identifier. Payloads without a usable id fail to decode.
    pub id: ImageId,
    /// Display title, when provided.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    /// Longer description, when provided.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Source URL for the image content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,
    /// Raw publication timestamp as supplied by the provider.
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,
    /// Classification tag; `"restricted"` gates the premium-only rule.
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub kind: Option<String>,
    /// Engagement counters, flattened into the record on the wire.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub engagement: EngagementCounts,
}

impl ImageRecord {
    /// Construct a record with the given identifier and no metadata.
    ///
    /// # Errors
    /// Returns [`ImageIdError::Empty`] when the identifier is empty or only
    /// whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ImageIdError> {
        Ok(Self::with_id(ImageId::new(id)?))
    }

    /// Construct a record from an already-validated identifier.
    #[must_use]
    pub fn with_id(id: ImageId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            url: None,
            created_at: None,
            kind: None,
            engagement: EngagementCounts::default(),
        }
    }

    /// Set the display title while returning `self` for chaining.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the source URL while returning `self` for chaining.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the raw publication timestamp while returning `self` for chaining.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Set the classification tag while returning `self` for chaining.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the engagement counters while returning `self` for chaining.
    #[must_use]
    pub fn with_engagement(mut self, engagement: EngagementCounts) -> Self {
        self.engagement = engagement;
        self
    }

    /// Report whether the record carries the restricted classification.
    ///
    /// Matching is exact: `"Restricted"` or `"restricted "` are ordinary
    /// tags.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.kind.as_deref() == Some(RESTRICTED_KIND)
    }

    /// Parse the publication timestamp, when present and well-formed.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_created_at)
    }

    /// Title with the display fallback applied.
    ///
    /// # Examples
    /// ```
    /// use lightbox_core::ImageRecord;
    ///
    /// let record = ImageRecord::new("img-1")?;
    /// assert_eq!(record.display_title(), "Untitled image");
    /// assert_eq!(
    ///     record.with_title("Dusk").display_title(),
    ///     "Dusk",
    /// );
    /// # Ok::<(), lightbox_core::ImageIdError>(())
    /// ```
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED_TITLE,
        }
    }

    /// Description with the display fallback applied.
    #[must_use]
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => NO_DESCRIPTION,
        }
    }
}

/// Parse a provider-supplied timestamp.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`, offsets normalised to UTC) and
/// bare dates (`2024-05-01`, midnight UTC). Anything else yields `None`.
#[must_use]
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("img-1", true)]
    #[case(" padded ", true)]
    #[case("", false)]
    #[case("   ", false)]
    fn id_validation(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(ImageId::new(raw).is_ok(), accepted);
    }

    #[rstest]
    #[case(r#"{"views": 1500}"#, EngagementCounts::new(1500, 0, 0))]
    #[case(r#"{"views": "1500"}"#, EngagementCounts::new(1500, 0, 0))]
    #[case(r#"{"views": " 42 "}"#, EngagementCounts::new(42, 0, 0))]
    #[case(r#"{"views": 12.9}"#, EngagementCounts::new(12, 0, 0))]
    #[case(r#"{"views": "12.9"}"#, EngagementCounts::new(12, 0, 0))]
    #[case(r#"{"views": -5}"#, EngagementCounts::new(0, 0, 0))]
    #[case(r#"{"views": "-5"}"#, EngagementCounts::new(0, 0, 0))]
    #[case(r#"{"views": null}"#, EngagementCounts::new(0, 0, 0))]
    #[case(r#"{"views": "many"}"#, EngagementCounts::new(0, 0, 0))]
    #[case(r#"{"views": true}"#, EngagementCounts::new(0, 0, 0))]
    #[case(r#"{}"#, EngagementCounts::new(0, 0, 0))]
    #[case(
        r#"{"views": "1e3", "likes": 150, "shares": "100"}"#,
        EngagementCounts::new(1000, 150, 100)
    )]
    fn counters_decode_leniently(#[case] payload: &str, #[case] expected: EngagementCounts) {
        let counts: EngagementCounts =
            serde_json::from_str(payload).expect("counters never fail to decode");
        assert_eq!(counts, expected);
    }

    #[rstest]
    fn record_decodes_full_payload() {
        let record: ImageRecord = serde_json::from_str(
            r#"{
                "id": "img-7",
                "title": "Harbour at dusk",
                "description": "Long exposure",
                "url": "https://example.test/img-7.jpg",
                "createdAt": "2024-05-01T10:00:00Z",
                "type": "restricted",
                "views": "2000",
                "likes": 150,
                "shares": null
            }"#,
        )
        .expect("well-formed record");
        assert_eq!(record.id.as_str(), "img-7");
        assert!(record.is_restricted());
        assert_eq!(record.engagement, EngagementCounts::new(2000, 150, 0));
        assert!(record.created_at_utc().is_some());
    }

    #[rstest]
    #[case(r#"{"views": 1}"#)]
    #[case(r#"{"id": ""}"#)]
    #[case(r#"{"id": "   "}"#)]
    fn record_without_id_fails_decoding(#[case] payload: &str) {
        assert!(serde_json::from_str::<ImageRecord>(payload).is_err());
    }

    #[rstest]
    #[case("2024-05-01T10:00:00Z", true)]
    #[case("2024-05-01T10:00:00+02:00", true)]
    #[case("2024-05-01", true)]
    #[case("yesterday", false)]
    #[case("", false)]
    #[case("2024-13-40", false)]
    fn created_at_parsing(#[case] raw: &str, #[case] parses: bool) {
        assert_eq!(parse_created_at(raw).is_some(), parses);
    }

    #[rstest]
    fn offsets_normalise_to_utc() {
        let offset = parse_created_at("2024-05-01T12:00:00+02:00").expect("valid timestamp");
        let utc = parse_created_at("2024-05-01T10:00:00Z").expect("valid timestamp");
        assert_eq!(offset, utc);
    }

    #[rstest]
    #[case(Some("Dusk"), "Dusk")]
    #[case(Some(""), "Untitled image")]
    #[case(None, "Untitled image")]
    fn title_fallback(#[case] title: Option<&str>, #[case] expected: &str) {
        let mut record = ImageRecord::new("img-1").expect("valid id");
        record.title = title.map(String::from);
        assert_eq!(record.display_title(), expected);
    }

    #[rstest]
    fn restricted_match_is_exact() {
        let record = ImageRecord::new("img-1").expect("valid id");
        assert!(!record.is_restricted());
        assert!(record.clone().with_kind("restricted").is_restricted());
        assert!(!record.clone().with_kind("Restricted").is_restricted());
        assert!(!record.with_kind("restricted ").is_restricted());
    }
}
