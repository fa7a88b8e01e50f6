//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default SQLite file name, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "wastegraph.db";

/// Default cap on enumerated routes
pub const DEFAULT_MAX_PATHS: usize = 10;

/// Top-level configuration (`wastegraph.toml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Persistence settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Route enumeration settings
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            database: DatabaseConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

/// Where saved graphs live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Limits for all-paths enumeration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Routes kept when `--max-paths` is not given
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            max_paths: default_max_paths(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

fn default_max_paths() -> usize {
    DEFAULT_MAX_PATHS
}
