//! Popularity scoring seam.
//!
//! The engine ranks images by a popularity score derived from their
//! engagement counters and the viewing user's role. [`PopularityScorer`]
//! keeps the weighting policy swappable; the default weighted-sum policy
//! lives in the `lightbox-scorer` crate.

use crate::{EngagementCounts, Role};

/// Strategy for turning engagement counters into a popularity score.
///
/// Implementations must be pure: the same counters and role always
/// produce the same score, and scoring never mutates anything.
pub trait PopularityScorer {
    /// Score `engagement` as seen by a user holding `role`.
    ///
    /// Scores are raw `f64` values; callers that need a displayable
    /// number should pass the result through [`sanitise_score`] or use
    /// [`PopularityScorer::sanitised_score`].
    fn score(&self, engagement: &EngagementCounts, role: Role) -> f64;

    /// [`PopularityScorer::score`] clamped to a finite, non-negative value.
    fn sanitised_score(&self, engagement: &EngagementCounts, role: Role) -> f64 {
        sanitise_score(self.score(engagement, role))
    }
}

/// Clamp a raw score to a finite, non-negative value.
///
/// `NaN`, infinities, and negative values all collapse to `0.0`, so a
/// misbehaving scorer degrades to "unpopular" instead of poisoning sort
/// comparisons downstream.
#[must_use]
pub fn sanitise_score(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}
