use std::collections::HashMap;
use std::sync::Mutex;

use crate::AlgorithmScore;

pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
pub const APPROX_PREFIX_CHARS: usize = 100;

/// `Approximate` keys on the first 100 characters plus the character count,
/// so equal-length texts sharing that prefix collide and share a cached score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintMode {
    ContentHash,
    Approximate,
}

impl FingerprintMode {
    pub fn key(self, text: &str) -> String {
        match self {
            FingerprintMode::ContentHash => format!("{:x}", content_hash64(text)),
            FingerprintMode::Approximate => {
                let prefix: String = text.chars().take(APPROX_PREFIX_CHARS).collect();
                format!("{}{}", prefix, text.chars().count())
            }
        }
    }
}

fn content_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

#[derive(Debug, Clone)]
struct CacheEntry {
    score: AlgorithmScore,
    last_used: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    tick: u64,
}

#[derive(Debug)]
pub struct ScoreCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl ScoreCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn get(&self, key: &str) -> Option<AlgorithmScore> {
        let mut state = self.lock_state();
        state.tick += 1;
        let tick = state.tick;
        state.entries.get_mut(key).map(|entry| {
            entry.last_used = tick;
            entry.score.clone()
        })
    }

    pub fn insert(&self, key: String, score: AlgorithmScore) {
        let mut state = self.lock_state();
        state.tick += 1;
        let tick = state.tick;
        if self.capacity > 0
            && !state.entries.contains_key(&key)
            && state.entries.len() >= self.capacity
        {
            evict_least_recent(&mut state.entries);
        }
        state.entries.insert(key, CacheEntry { score, last_used: tick });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock_state().entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock_state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

fn evict_least_recent(entries: &mut HashMap<String, CacheEntry>) {
    let oldest = entries
        .iter()
        .min_by_key(|(_, entry)| entry.last_used)
        .map(|(key, _)| key.clone());
    if let Some(key) = oldest {
        entries.remove(&key);
    }
}
