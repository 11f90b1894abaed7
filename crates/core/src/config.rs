//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upload storage configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding uploaded files.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("./data/uploads")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
        }
    }
}

/// Metadata store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetadataConfig {
    /// SQLite database.
    Sqlite {
        /// Database file path.
        path: PathBuf,
        /// Busy timeout in seconds for concurrent access.
        #[serde(default = "default_sqlite_busy_timeout_secs")]
        busy_timeout_secs: Option<u64>,
    },
}

fn default_sqlite_busy_timeout_secs() -> Option<u64> {
    Some(5)
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self::Sqlite {
            path: PathBuf::from("./data/catalog.db"),
            busy_timeout_secs: default_sqlite_busy_timeout_secs(),
        }
    }
}

/// Retention purge configuration.
///
/// The purge task permanently removes soft-deleted inventories and objects
/// whose trash timestamp is older than the retention window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PurgeConfig {
    /// Enable the background purge task (default: true).
    #[serde(default = "default_purge_enabled")]
    pub enabled: bool,
    /// Interval in seconds between purge passes (default: 24 hours).
    #[serde(default = "default_purge_interval_secs")]
    pub interval_secs: u64,
    /// Retention window in days for soft-deleted rows (default: 30).
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

fn default_purge_enabled() -> bool {
    true
}

fn default_purge_interval_secs() -> u64 {
    86400 // once per day
}

fn default_retention_days() -> u32 {
    30
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            enabled: default_purge_enabled(),
            interval_secs: default_purge_interval_secs(),
            retention_days: default_retention_days(),
        }
    }
}

impl PurgeConfig {
    /// Get the pass interval as a std Duration (for the scheduler sleep).
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.interval_secs)
    }

    /// Get the retention window as a time Duration (for cutoff arithmetic).
    pub fn retention(&self) -> time::Duration {
        time::Duration::days(i64::from(self.retention_days))
    }

    /// Validate purge configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.interval_secs == 0 {
            return Err("purge.interval_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Top-level application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upload storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Metadata store configuration.
    #[serde(default)]
    pub metadata: MetadataConfig,
    /// Retention purge configuration.
    #[serde(default)]
    pub purge: PurgeConfig,
}

impl AppConfig {
    /// Create a test configuration with sensible defaults.
    ///
    /// **For testing only.** Uses filesystem uploads and SQLite metadata
    /// under relative `./data` paths.
    pub fn for_testing() -> Self {
        Self {
            storage: StorageConfig::default(),
            metadata: MetadataConfig::default(),
            purge: PurgeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purge_defaults_match_retention_policy() {
        let config = PurgeConfig::default();
        assert!(config.enabled);
        assert_eq!(config.interval_secs, 86400);
        assert_eq!(config.retention_days, 30);
        assert_eq!(config.retention(), time::Duration::days(30));
    }

    #[test]
    fn purge_rejects_zero_interval_when_enabled() {
        let config = PurgeConfig {
            enabled: true,
            interval_secs: 0,
            retention_days: 30,
        };
        assert!(config.validate().is_err());

        let disabled = PurgeConfig {
            enabled: false,
            interval_secs: 0,
            retention_days: 30,
        };
        assert!(disabled.validate().is_ok());
    }
}
