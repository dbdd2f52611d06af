//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML document with every field optional;
//! `Config` is the resolved form the binary works with.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use super::defaults::DEFAULT_CATALOG_SOURCE;
use crate::gallery::ViewMode;
use crate::prefs::{PreferencePolicy, ToggleStrategy};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub policy: PreferencePolicy,
    pub display: DisplayConfig,
}

/// Where the catalog comes from and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    /// `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSource::parse(DEFAULT_CATALOG_SOURCE),
            timeout_secs: None,
        }
    }
}

/// Catalog location: an HTTP(S) URL or a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Durable preference store location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// `None` means the default under the config root.
    pub path: Option<PathBuf>,
}

/// Terminal output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub color: bool,
    pub view: ViewMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            view: ViewMode::default(),
        }
    }
}

/// Raw TOML document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub catalog: FileCatalogConfig,
    pub storage: FileStorageConfig,
    pub policy: FilePolicyConfig,
    pub display: FileDisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileCatalogConfig {
    pub source: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileStorageConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FilePolicyConfig {
    pub clamp_imports: Option<bool>,
    pub toggle: Option<ToggleStrategy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileDisplayConfig {
    pub color: Option<bool>,
    pub view: Option<ViewMode>,
}
