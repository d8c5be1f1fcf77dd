use serde::{Deserialize, Serialize};

use crate::scoring::extractor::FactorDeltas;
use crate::FactorSet;

pub const FACTOR_BASELINE: f64 = 50.0;
pub const FACTOR_MIN: f64 = 0.0;
pub const FACTOR_MAX: f64 = 100.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorWeights {
    pub likeability: f64,
    pub reply_potential: f64,
    pub shareability: f64,
    pub dwell_time: f64,
    pub hook_strength: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            likeability: 0.25,
            reply_potential: 0.25,
            shareability: 0.20,
            dwell_time: 0.15,
            hook_strength: 0.15,
        }
    }
}

impl FactorWeights {
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            self.likeability,
            self.reply_potential,
            self.shareability,
            self.dwell_time,
            self.hook_strength,
        ];
        if weights.iter().any(|weight| *weight < 0.0) {
            return Err("factor weights must be non-negative".to_string());
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("factor weights must sum to 1.0, got {}", sum));
        }
        Ok(())
    }
}

pub fn apply_deltas(deltas: &FactorDeltas) -> FactorSet {
    FactorSet {
        likeability: clamp_factor(FACTOR_BASELINE + deltas.likeability),
        reply_potential: clamp_factor(FACTOR_BASELINE + deltas.reply_potential),
        shareability: clamp_factor(FACTOR_BASELINE + deltas.shareability),
        dwell_time: clamp_factor(FACTOR_BASELINE + deltas.dwell_time),
        hook_strength: clamp_factor(FACTOR_BASELINE + deltas.hook_strength),
    }
}

/// Weighted sum of the clamped factors, rounded half away from zero
/// (`f64::round`) to an integer in the 0-100 band.
pub fn overall(factors: &FactorSet, weights: &FactorWeights) -> i32 {
    let weighted = factors.likeability * weights.likeability
        + factors.reply_potential * weights.reply_potential
        + factors.shareability * weights.shareability
        + factors.dwell_time * weights.dwell_time
        + factors.hook_strength * weights.hook_strength;
    (weighted.round() as i32).clamp(0, 100)
}

fn clamp_factor(value: f64) -> f64 {
    value.max(FACTOR_MIN).min(FACTOR_MAX)
}
