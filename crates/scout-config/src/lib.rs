//! # scout-config
//!
//! Layered configuration loading for Tenderscout using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCOUT_*` prefix, `__` as separator)
//! 2. Project-level `.tenderscout/config.toml`
//! 3. User-level `~/.config/tenderscout/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCOUT_SEARCH__API_KEY` -> `search.api_key`,
//! `SCOUT_OPEN_DATA__API_KEY` -> `open_data.api_key`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use scout_config::ScoutConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = ScoutConfig::load_with_dotenv().expect("config");
//!
//! if config.search.is_configured() {
//!     println!("search API at {}", config.search.base_url);
//! }
//! ```

mod error;
mod fetch;
mod open_data;
mod search;

pub use error::ConfigError;
pub use fetch::FetchConfig;
pub use open_data::OpenDataConfig;
pub use search::SearchApiConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub search: SearchApiConfig,
    #[serde(default)]
    pub open_data: OpenDataConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl ScoutConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` — use [`ScoutConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a config file is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails; a missing `.env` file is
    /// not an error.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tenderscout/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SCOUT_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tenderscout").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or the current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ScoutConfig::default();
        assert!(!config.search.is_configured());
        assert!(!config.open_data.is_configured());
        assert_eq!(config.fetch.web_top_k, 2);
    }

    #[test]
    fn figment_env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SCOUT_SEARCH__API_KEY", "tvly-test");
            jail.set_env("SCOUT_FETCH__WEB_TOP_K", "7");
            let config: ScoutConfig = ScoutConfig::figment().extract()?;
            assert!(config.search.is_configured());
            assert_eq!(config.search.api_key, "tvly-test");
            assert_eq!(config.fetch.web_top_k, 7);
            Ok(())
        });
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ScoutConfig = ScoutConfig::figment().extract()?;
            assert!(!config.open_data.is_configured());
            assert_eq!(config.fetch.timeout_secs, 20);
            Ok(())
        });
    }
}
