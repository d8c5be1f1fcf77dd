use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::cache::{FingerprintMode, DEFAULT_CACHE_CAPACITY};
use crate::scoring::FactorWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub fingerprint: String,
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            fingerprint: "content-hash".to_string(),
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl CacheConfig {
    pub fn fingerprint_mode(&self) -> FingerprintMode {
        match self.fingerprint.to_lowercase().as_str() {
            "approximate" | "prefix" => FingerprintMode::Approximate,
            _ => FingerprintMode::ContentHash,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: FactorWeights,
    pub cache: CacheConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ScoringConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                ScoringConfig::default()
            }
        } else {
            ScoringConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(fingerprint) = env::var("SCORE_FINGERPRINT") {
            if !fingerprint.trim().is_empty() {
                self.cache.fingerprint = fingerprint;
            }
        }
        if let Ok(capacity) = env::var("SCORE_CACHE_CAPACITY") {
            if let Ok(value) = capacity.parse::<usize>() {
                self.cache.capacity = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("SCORING_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/scoring.toml")))
}
