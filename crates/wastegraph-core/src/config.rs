//! Configuration for wastegraph
//!
//! Configuration is read from `wastegraph.toml`. Resolution order for the
//! file: explicit path, `WASTEGRAPH_CONFIG`, `./wastegraph.toml`, defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WasteGraphError};

pub use types::{
    Config, DatabaseConfig, PathsConfig, CONFIG_FORMAT_VERSION, DEFAULT_DATABASE_PATH,
    DEFAULT_MAX_PATHS,
};

/// Default configuration file name
pub const CONFIG_FILE: &str = "wastegraph.toml";

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "WASTEGRAPH_CONFIG";

/// Environment variable overriding the database path
pub const DB_ENV_VAR: &str = "WASTEGRAPH_DB";

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            WasteGraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer wastegraph"
            );
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WasteGraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve and load configuration
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn resolve(explicit: Option<&Path>, base_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            if !env_path.is_empty() {
                return Self::load(Path::new(&env_path));
            }
        }

        let default_path = base_dir.join(CONFIG_FILE);
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Database path after applying the CLI flag and `WASTEGRAPH_DB`
    pub fn database_path(&self, cli_override: Option<&Path>, base_dir: &Path) -> PathBuf {
        let chosen = match cli_override {
            Some(path) => path.to_path_buf(),
            None => match std::env::var(DB_ENV_VAR) {
                Ok(env_path) if !env_path.is_empty() => PathBuf::from(env_path),
                _ => PathBuf::from(&self.database.path),
            },
        };

        if chosen.is_absolute() {
            chosen
        } else {
            base_dir.join(chosen)
        }
    }
}
