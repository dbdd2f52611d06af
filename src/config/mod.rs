//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`THEMESHIFT_CATALOG`, `THEMESHIFT_STORE`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./themeshift.toml in the current directory
//! 4. $XDG_CONFIG_HOME/themeshift/themeshift.toml (or
//!    ~/.config/themeshift/themeshift.toml)
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::prefs::PreferencePolicy;

mod defaults;
mod env;
mod sources;
mod types;

pub(crate) use defaults::APP_DIR_NAME;
pub use sources::ConfigSource;
pub use types::{CatalogConfig, CatalogSource, Config, DisplayConfig, StorageConfig};
use types::FileConfig;

/// Resolved config plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        sources::read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed)?;
    env::apply_env_overrides(&mut config, &env_lookup);
    Ok(LoadedConfig { config, source })
}

fn resolve_file_config(parsed: FileConfig) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Some(source) = parsed.catalog.source {
        if source.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "catalog.source must not be empty".to_string(),
            ));
        }
        config.catalog.source = CatalogSource::parse(&source);
    }
    if let Some(secs) = parsed.catalog.timeout_secs {
        if secs == 0 {
            return Err(ConfigError::Invalid(
                "catalog.timeout_secs must be a positive number of seconds".to_string(),
            ));
        }
        config.catalog.timeout_secs = Some(secs);
    }

    config.storage.path = parsed.storage.path;

    let defaults = PreferencePolicy::default();
    config.policy = PreferencePolicy {
        clamp_imports: parsed
            .policy
            .clamp_imports
            .unwrap_or(defaults.clamp_imports),
        toggle: parsed.policy.toggle.unwrap_or(defaults.toggle),
    };

    if let Some(color) = parsed.display.color {
        config.display.color = color;
    }
    if let Some(view) = parsed.display.view {
        config.display.view = view;
    }
    Ok(config)
}

/// Root directory for per-user config files.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
