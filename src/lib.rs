pub mod cache;
pub mod config;
pub mod scoring;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::{FingerprintMode, ScoreCache, DEFAULT_CACHE_CAPACITY};
use crate::config::ScoringConfig;
use crate::scoring::aggregate::{self, FACTOR_BASELINE};
use crate::scoring::tips::{self, TIP_BELOW_MIN_LENGTH};
use crate::scoring::{extractor, FactorWeights};

pub const MIN_SCORABLE_CHARS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorSet {
    pub likeability: f64,
    pub reply_potential: f64,
    pub shareability: f64,
    pub dwell_time: f64,
    pub hook_strength: f64,
}

impl FactorSet {
    pub fn baseline() -> Self {
        Self {
            likeability: FACTOR_BASELINE,
            reply_potential: FACTOR_BASELINE,
            shareability: FACTOR_BASELINE,
            dwell_time: FACTOR_BASELINE,
            hook_strength: FACTOR_BASELINE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmScore {
    pub overall: i32,
    pub factors: FactorSet,
    pub tips: Vec<String>,
}

pub struct ScoreEngine {
    weights: FactorWeights,
    fingerprint: FingerprintMode,
    cache: ScoreCache,
}

impl ScoreEngine {
    pub fn new(config: ScoringConfig) -> Result<Self, String> {
        config.weights.validate()?;
        Ok(Self {
            fingerprint: config.cache.fingerprint_mode(),
            cache: ScoreCache::new(config.cache.capacity),
            weights: config.weights,
        })
    }

    pub fn score(&self, text: &str) -> AlgorithmScore {
        let char_count = text.chars().count();
        if char_count < MIN_SCORABLE_CHARS {
            debug!(chars = char_count, "text below scorable length");
            return short_text_score();
        }

        let key = self.fingerprint.key(text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "score cache hit");
            return hit;
        }
        debug!(key = %key, "score cache miss");

        let result = score_text(text, &self.weights);
        self.cache.insert(key, result.clone());
        result
    }

    pub fn cache(&self) -> &ScoreCache {
        &self.cache
    }

    pub fn fingerprint(&self) -> FingerprintMode {
        self.fingerprint
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            fingerprint: FingerprintMode::ContentHash,
            cache: ScoreCache::new(DEFAULT_CACHE_CAPACITY),
        }
    }
}

fn score_text(text: &str, weights: &FactorWeights) -> AlgorithmScore {
    let extraction = extractor::extract(text);
    let factors = aggregate::apply_deltas(&extraction.deltas);
    let overall = aggregate::overall(&factors, weights);
    let tips = tips::build_score_tips(extraction.tips, overall, factors.hook_strength);
    AlgorithmScore {
        overall,
        factors,
        tips,
    }
}

pub fn short_text_score() -> AlgorithmScore {
    AlgorithmScore {
        overall: 50,
        factors: FactorSet::baseline(),
        tips: vec![TIP_BELOW_MIN_LENGTH.to_string()],
    }
}

static DEFAULT_ENGINE: Lazy<ScoreEngine> = Lazy::new(|| {
    let config = ScoringConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default();
    ScoreEngine::new(config).unwrap_or_default()
});

pub fn score(text: &str) -> AlgorithmScore {
    DEFAULT_ENGINE.score(text)
}
