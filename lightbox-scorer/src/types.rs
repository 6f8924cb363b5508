//! Public configuration types for engagement scoring.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable weights applied to qualifying engagement counters.
///
/// The defaults reproduce the browsing experience the engine replaces:
/// views weigh lightly, shares heavily, and premium viewers see every
/// score lifted by a flat multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementWeights {
    /// Multiplier applied to views past their threshold.
    pub views_weight: f64,
    /// Multiplier applied to likes past their threshold.
    pub likes_weight: f64,
    /// Multiplier applied to shares past their threshold.
    pub shares_weight: f64,
    /// Multiplier applied to the whole sum for premium viewers.
    pub premium_multiplier: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            views_weight: 0.1_f64,
            likes_weight: 0.5_f64,
            shares_weight: 1.5_f64,
            premium_multiplier: 1.2_f64,
        }
    }
}

impl EngagementWeights {
    /// Check the weights are usable for scoring.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a counter weight is negative or not
    /// finite, or when the premium multiplier is not finite and positive.
    pub fn validate(&self) -> Result<(), WeightsError> {
        let weights = [
            ("views", self.views_weight),
            ("likes", self.likes_weight),
            ("shares", self.shares_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0_f64 {
                return Err(WeightsError::InvalidWeight { name });
            }
        }
        if !self.premium_multiplier.is_finite() || self.premium_multiplier <= 0.0_f64 {
            return Err(WeightsError::InvalidMultiplier {
                raw: self.premium_multiplier,
            });
        }
        Ok(())
    }
}

/// Errors raised by [`EngagementWeights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightsError {
    /// A counter weight was negative or not finite.
    #[error("weight '{name}' must be a finite, non-negative number")]
    InvalidWeight {
        /// Counter the weight applies to.
        name: &'static str,
    },
    /// The premium multiplier was zero, negative, or not finite.
    #[error("premium multiplier {raw} must be a finite, positive number")]
    InvalidMultiplier {
        /// Rejected multiplier value.
        raw: f64,
    },
}
