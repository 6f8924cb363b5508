//! Engagement-based popularity scoring for Lightbox images.
//!
//! The crate provides the default [`PopularityScorer`] implementation:
//! - **Threshold gating**: a counter contributes nothing until it clears
//!   its fixed threshold ([`VIEWS_THRESHOLD`], [`LIKES_THRESHOLD`],
//!   [`SHARES_THRESHOLD`]); comparisons are strict, so a counter sitting
//!   exactly on its threshold still scores zero.
//! - **Weighted summing**: qualifying counters are multiplied by the
//!   weights in [`EngagementWeights`] and summed.
//! - **Role uplift**: premium viewers see the final sum multiplied by
//!   `premium_multiplier`; guests and admins score identically.
//!
//! Scores are plain `f64` values with no upper bound. Ranking helpers in
//! this crate sanitise them before ordering, so a pathological weight
//! configuration degrades to "unpopular" rather than corrupting a sort.
//!
//! # Examples
//!
//! ```
//! use lightbox_core::{EngagementCounts, PopularityScorer, Role};
//! use lightbox_scorer::EngagementScorer;
//!
//! let scorer = EngagementScorer::default();
//! let engagement = EngagementCounts::new(1500, 150, 100);
//! let guest = scorer.score(&engagement, Role::Guest);
//! let premium = scorer.score(&engagement, Role::Premium);
//! assert!((guest - 375.0).abs() < 1e-9);
//! assert!((premium - 450.0).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use lightbox_core::{EngagementCounts, ImageRecord, PopularityScorer, Role};

mod types;

pub use types::{EngagementWeights, WeightsError};

/// Views beyond this count contribute to the score.
pub const VIEWS_THRESHOLD: u64 = 1_000;
/// Likes beyond this count contribute to the score.
pub const LIKES_THRESHOLD: u64 = 100;
/// Shares beyond this count contribute to the score.
pub const SHARES_THRESHOLD: u64 = 50;

/// Default scorer combining threshold-gated counters with role uplift.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngagementScorer {
    weights: EngagementWeights,
}

impl EngagementScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when `weights` fail
    /// [`EngagementWeights::validate`].
    pub fn new(weights: EngagementWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Weights this scorer applies.
    #[must_use]
    pub const fn weights(&self) -> EngagementWeights {
        self.weights
    }
}

impl PopularityScorer for EngagementScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "scoring is inherently floating point"
    )]
    fn score(&self, engagement: &EngagementCounts, role: Role) -> f64 {
        let mut total = weighted(engagement.views, VIEWS_THRESHOLD, self.weights.views_weight)
            + weighted(engagement.likes, LIKES_THRESHOLD, self.weights.likes_weight)
            + weighted(engagement.shares, SHARES_THRESHOLD, self.weights.shares_weight);
        if role == Role::Premium {
            total *= self.weights.premium_multiplier;
        }
        total
    }
}

/// Weight a counter once it clears its threshold.
#[expect(
    clippy::cast_precision_loss,
    reason = "engagement counters stay far below 2^52"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "scoring is inherently floating point"
)]
fn weighted(count: u64, threshold: u64, weight: f64) -> f64 {
    if count > threshold {
        (count as f64) * weight
    } else {
        0.0_f64
    }
}

/// An image paired with its sanitised popularity score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredImage {
    /// The scored record.
    pub image: ImageRecord,
    /// Finite, non-negative popularity score.
    pub score: f64,
}

/// Rank `images` by popularity as seen by `role`, most popular first.
///
/// Scores pass through [`lightbox_core::sanitise_score`] before ordering,
/// and ties break on the image identifier so the ranking is deterministic.
#[must_use]
pub fn rank_by_popularity<S>(images: Vec<ImageRecord>, scorer: &S, role: Role) -> Vec<ScoredImage>
where
    S: PopularityScorer + ?Sized,
{
    let mut ranked: Vec<ScoredImage> = images
        .into_iter()
        .map(|image| {
            let score = scorer.sanitised_score(&image.engagement, role);
            ScoredImage { image, score }
        })
        .collect();
    ranked.sort_by(|left, right| {
        right
            .score
            .total_cmp(&left.score)
            .then_with(|| left.image.id.cmp(&right.image.id))
    });
    log::debug!("ranked {} images for role {role}", ranked.len());
    ranked
}
