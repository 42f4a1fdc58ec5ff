//! Field-hints configuration.
//!
//! Configuration can be loaded from:
//! - A YAML file named by `HINTKIT_CONFIG`
//! - Environment variables (`HINTKIT_*` prefixed)
//!
//! # Example
//!
//! ```rust,no_run
//! use hintkit_hints::config::HintsConfig;
//!
//! // Load from HINTKIT_CONFIG or fall back to env vars
//! let config = HintsConfig::load().expect("Failed to load config");
//! let mut cache = config.build_cache();
//! let hints = cache.get_field_hints("User");
//! ```
//!
//! File format:
//!
//! ```yaml
//! hints:
//!   search_paths:
//!     - ./Hints
//!     - ${APP_RESOURCES}/Hints
//!   cache_enabled: true
//! ```

use std::env;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use hintkit_core::defaults::{ENV_CACHE_ENABLED, ENV_CONFIG, ENV_HINTS_PATH, HINTS_DIR};

use crate::cache::FieldHintsCache;
use crate::loader::FileHintsLoader;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for hintkit_core::Error {
    fn from(e: ConfigError) -> Self {
        hintkit_core::Error::Config(e.to_string())
    }
}

fn default_search_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(HINTS_DIR)]
}

fn default_cache_enabled() -> bool {
    true
}

/// Where hints files live and whether lookups are cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintsConfig {
    /// Directories searched for `<Model>.hints`, in precedence order.
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,
}

impl Default for HintsConfig {
    fn default() -> Self {
        Self {
            search_paths: default_search_paths(),
            cache_enabled: default_cache_enabled(),
        }
    }
}

impl HintsConfig {
    /// Load configuration from environment variables with fallback to defaults.
    ///
    /// - `HINTKIT_HINTS_PATH`: directory list in the platform's path-list
    ///   syntax (`:` on Unix, `;` on Windows)
    /// - `HINTKIT_CACHE_ENABLED`: "true"/"1"/"yes"/"on" or "false"/"0"/"no"/"off"
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(val) = env::var_os(ENV_HINTS_PATH) {
            let paths: Vec<PathBuf> = env::split_paths(&val)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if paths.is_empty() {
                warn!(var = ENV_HINTS_PATH, "Empty hints path, using default");
            } else {
                config.search_paths = paths;
            }
        }

        if let Ok(val) = env::var(ENV_CACHE_ENABLED) {
            match parse_bool(&val) {
                Some(enabled) => config.cache_enabled = enabled,
                None => warn!(value = %val, "Invalid {}, using default", ENV_CACHE_ENABLED),
            }
        }

        config
    }

    /// Load configuration from a YAML file with a top-level `hints:` mapping.
    ///
    /// `${VAR}` references are replaced with environment values; unknown
    /// variables are left as written.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let content = Self::substitute_env_vars(&content);

        #[derive(Deserialize)]
        struct YamlRoot {
            #[serde(default)]
            hints: Option<HintsConfig>,
        }

        let root: YamlRoot = serde_yaml::from_str(&content)?;
        let config = root.hints.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `HINTKIT_CONFIG`, falling back to
    /// environment variables.
    pub fn load() -> ConfigResult<Self> {
        match env::var_os(ENV_CONFIG).map(PathBuf::from) {
            Some(path) if path.is_file() => {
                info!("Loading hints config from: {}", path.display());
                Self::from_file(&path)
            }
            Some(path) => {
                warn!(
                    "{} points to {}, which is not a file; using environment variables",
                    ENV_CONFIG,
                    path.display()
                );
                Ok(Self::from_env())
            }
            None => {
                debug!("{} not set, using environment variables", ENV_CONFIG);
                Ok(Self::from_env())
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.search_paths.is_empty() {
            return Err(ConfigError::Validation(
                "search_paths cannot be empty".to_string(),
            ));
        }
        if self.search_paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::Validation(
                "search_paths cannot contain an empty path".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_loader(&self) -> FileHintsLoader {
        FileHintsLoader::new(self.search_paths.iter().cloned())
    }

    /// Build a cache over a [`FileHintsLoader`]; disabled caches pass every
    /// lookup through to the loader.
    pub fn build_cache(&self) -> FieldHintsCache<FileHintsLoader> {
        let loader = self.build_loader();
        if self.cache_enabled {
            FieldHintsCache::new(loader)
        } else {
            FieldHintsCache::disabled(loader)
        }
    }

    fn substitute_env_vars(content: &str) -> String {
        static ENV_REF: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env reference pattern is valid")
        });
        ENV_REF
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}

/// Parse a boolean flag. Unrecognized values return `None`.
fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
