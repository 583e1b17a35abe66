//! Planner configuration for routeplan
//!
//! Read from `config.toml` in `$ROUTEPLAN_CONFIG_DIR`, else in the
//! platform config directory (`~/.config/routeplan/` on Linux). Every field
//! is optional; a missing file means all defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RouteError};
use crate::traffic::TrafficTable;

pub use types::{PlannerConfig, TrafficConfig};

const CONFIG_DIR: &str = "routeplan";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROUTEPLAN_CONFIG_DIR";

impl PlannerConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| RouteError::Other("unable to determine config directory".to_string()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating its directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let traffic = &self.traffic;
        if !traffic.default_multiplier.is_finite() || traffic.default_multiplier <= 0.0 {
            return Err(RouteError::invalid_value(
                "traffic.default_multiplier",
                traffic.default_multiplier,
            ));
        }
        if !traffic.min_multiplier.is_finite() || traffic.min_multiplier <= 0.0 {
            return Err(RouteError::invalid_value(
                "traffic.min_multiplier",
                traffic.min_multiplier,
            ));
        }
        Ok(())
    }

    /// Load a traffic table and apply the configured bounds
    pub fn traffic_table(&self, path: &Path) -> Result<TrafficTable> {
        Ok(TrafficTable::load(path)?
            .with_bounds(self.traffic.default_multiplier, self.traffic.min_multiplier))
    }
}
