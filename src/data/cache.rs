//! Local response caching
//!
//! Caches generated chain responses on disk so repeated requests within the
//! revalidation window reuse the same snapshot.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

use crate::core::{ChainResponse, MarketError, MarketResult};

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Cache directory
    pub cache_dir: PathBuf,
    /// Maximum age before refresh (in seconds)
    pub max_age_seconds: i64,
    /// Whether to use cache
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("./data/cache"),
            max_age_seconds: 30,
            enabled: true,
        }
    }
}

/// Chain response cache manager
pub struct ChainCache {
    config: CacheConfig,
}

impl ChainCache {
    pub fn new(config: CacheConfig) -> MarketResult<Self> {
        // Create cache directory if needed
        if config.enabled && !config.cache_dir.exists() {
            fs::create_dir_all(&config.cache_dir)?;
        }

        Ok(Self { config })
    }

    pub fn disabled() -> Self {
        Self {
            config: CacheConfig {
                enabled: false,
                ..Default::default()
            },
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.config.cache_dir.join(format!("{}_chains.json", key))
    }

    /// Cache file exists and is younger than the max age
    pub fn is_fresh(&self, key: &str) -> bool {
        if !self.config.enabled {
            return false;
        }

        let path = self.path(key);
        let modified = fs::metadata(&path).and_then(|m| m.modified());
        match modified {
            Ok(modified) => {
                let modified: DateTime<Utc> = modified.into();
                Utc::now() - modified < Duration::seconds(self.config.max_age_seconds)
            }
            Err(_) => false,
        }
    }

    /// Save response to cache
    pub fn save(&self, key: &str, response: &ChainResponse) -> MarketResult<()> {
        if !self.config.enabled {
            return Ok(());
        }

        let path = self.path(key);
        let json = serde_json::to_string_pretty(response)?;
        fs::write(&path, json)?;

        tracing::info!("Cached chains for {} at {:?}", key, path);
        Ok(())
    }

    /// Load response from cache, if fresh.
    ///
    /// An unreadable or corrupt entry is removed and reported as a miss.
    pub fn load(&self, key: &str) -> MarketResult<Option<ChainResponse>> {
        if !self.is_fresh(key) {
            return Ok(None);
        }

        let parsed = fs::read_to_string(self.path(key))
            .map_err(MarketError::from)
            .and_then(|json| {
                serde_json::from_str::<ChainResponse>(&json).map_err(MarketError::from)
            });

        match parsed {
            Ok(response) => {
                tracing::info!("Loaded chains for {} from cache", key);
                Ok(Some(response))
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable cache entry for {}: {}", key, e);
                self.clear(key)?;
                Ok(None)
            }
        }
    }

    /// Clear cache for a key
    pub fn clear(&self, key: &str) -> MarketResult<()> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cache_in(dir: &std::path::Path, max_age_seconds: i64) -> ChainCache {
        ChainCache::new(CacheConfig {
            cache_dir: dir.to_path_buf(),
            max_age_seconds,
            enabled: true,
        })
        .unwrap()
    }

    #[test]
    fn test_cache_operations() {
        let temp_dir = tempdir().unwrap();
        let cache = cache_in(temp_dir.path(), 30);

        let response = ChainResponse::ok(Vec::new());

        assert!(cache.load("nse").unwrap().is_none());
        cache.save("nse", &response).unwrap();
        assert!(cache.is_fresh("nse"));

        let loaded = cache.load("nse").unwrap().unwrap();
        assert!(loaded.success);
        assert_eq!(loaded.timestamp, response.timestamp);

        cache.clear("nse").unwrap();
        assert!(!cache.is_fresh("nse"));
        cache.clear("nse").unwrap();
    }

    #[test]
    fn test_expired_entry_is_ignored() {
        let temp_dir = tempdir().unwrap();
        let cache = cache_in(temp_dir.path(), 0);

        cache.save("nse", &ChainResponse::ok(Vec::new())).unwrap();
        assert!(!cache.is_fresh("nse"));
        assert!(cache.load("nse").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_entry_is_discarded() {
        let temp_dir = tempdir().unwrap();
        let cache = cache_in(temp_dir.path(), 30);

        let path = temp_dir.path().join("nse_chains.json");
        fs::write(&path, r#"{"success": tr"#).unwrap();
        assert!(cache.is_fresh("nse"));

        assert!(cache.load("nse").unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_disabled_cache() {
        let cache = ChainCache::disabled();
        cache.save("nse", &ChainResponse::ok(Vec::new())).unwrap();
        assert!(!cache.is_fresh("nse"));
        assert!(cache.load("nse").unwrap().is_none());
    }

    #[test]
    fn test_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let cache = cache_in(&nested, 30);
        assert!(nested.exists());
        cache.save("nse", &ChainResponse::failure("x")).unwrap();
        assert!(!cache.load("nse").unwrap().unwrap().success);
    }
}
