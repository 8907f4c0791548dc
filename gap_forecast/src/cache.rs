//! Caller-owned memoization of scenario batches

use crate::config::EngineConfig;
use crate::data::HistoricalData;
use crate::error::Result;
use crate::projection::ScenarioForecast;
use std::collections::HashMap;

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Share of lookups served from the cache (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

/// Memoized scenario batches keyed by their serialized inputs.
///
/// The cache is an ordinary value owned by the caller and handed to
/// [`ScenarioEngine::generate_cached`](crate::engine::ScenarioEngine::generate_cached);
/// separate caches never share entries.
#[derive(Debug, Default)]
pub struct ForecastCache {
    entries: HashMap<String, Vec<ScenarioForecast>>,
    hits: u64,
    misses: u64,
}

impl ForecastCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for a history and configuration pair
    pub fn key(history: &HistoricalData, config: &EngineConfig) -> Result<String> {
        Ok(serde_json::to_string(&(history, config))?)
    }

    /// Look up a batch, counting the hit or miss
    pub fn get(&mut self, key: &str) -> Option<Vec<ScenarioForecast>> {
        match self.entries.get(key) {
            Some(forecasts) => {
                self.hits += 1;
                Some(forecasts.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: String, forecasts: Vec<ScenarioForecast>) {
        self.entries.insert(key, forecasts);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_depends_on_inputs() {
        let history = HistoricalData::reference();
        let config = EngineConfig::default();

        let key = ForecastCache::key(&history, &config).unwrap();
        assert_eq!(key, ForecastCache::key(&history, &config).unwrap());
        assert_ne!(
            key,
            ForecastCache::key(&history, &config.clone().with_horizon(3)).unwrap()
        );
        assert_ne!(
            key,
            ForecastCache::key(&history.head(4).unwrap(), &config).unwrap()
        );
    }

    #[test]
    fn test_hit_and_miss_counting() {
        let mut cache = ForecastCache::new();
        assert!(cache.get("k").is_none());

        cache.insert("k".to_string(), Vec::new());
        assert!(cache.get("k").is_some());
        assert!(cache.get("k").is_some());

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 1e-12);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
