use serde::{Deserialize, Serialize};

use crate::core::types::UncertaintyBands;

/// Linearly growing relative uncertainty with a quantile multiplier.
///
/// The default approximates 10/90 quantiles (`z = 1.28`) with uncertainty
/// growing from 1 % at the first year to 5 % at the last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyModel {
    pub start_pct: f64,
    pub end_pct: f64,
    pub z_score: f64,
}

impl UncertaintyModel {
    #[must_use]
    pub const fn new(start_pct: f64, end_pct: f64, z_score: f64) -> Self {
        Self {
            start_pct,
            end_pct,
            z_score,
        }
    }

    /// Fractional uncertainty at `index` for a sequence of `len` points.
    #[must_use]
    pub fn uncertainty_at(self, index: usize, len: usize) -> f64 {
        let progress = if len > 1 {
            index as f64 / (len - 1) as f64
        } else {
            0.0
        };
        self.start_pct + progress * (self.end_pct - self.start_pct)
    }

    #[must_use]
    pub fn derive(self, points: &[f64]) -> UncertaintyBands {
        derive_bands(points, self.start_pct, self.end_pct, self.z_score)
    }
}

impl Default for UncertaintyModel {
    fn default() -> Self {
        Self::new(0.01, 0.05, 1.28)
    }
}

/// Derives upper/lower envelopes around `points`.
///
/// `upper[i] = p * (1 + u * z)` and `lower[i] = p * (1 - u * z)` where `u`
/// interpolates from `start_pct` to `end_pct` across the sequence. A single
/// point uses `start_pct`.
#[must_use]
pub fn derive_bands(points: &[f64], start_pct: f64, end_pct: f64, z_score: f64) -> UncertaintyBands {
    let model = UncertaintyModel::new(start_pct, end_pct, z_score);
    let len = points.len();

    let mut upper = Vec::with_capacity(len);
    let mut lower = Vec::with_capacity(len);
    for (index, value) in points.iter().enumerate() {
        let spread = model.uncertainty_at(index, len) * z_score;
        upper.push(value * (1.0 + spread));
        lower.push(value * (1.0 - spread));
    }

    UncertaintyBands { upper, lower }
}
