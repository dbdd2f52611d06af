//! Default configuration constants.

/// Catalog location used when nothing else is configured.
pub(super) const DEFAULT_CATALOG_SOURCE: &str = "themes.json";
/// Config file name, both in the working directory and the global dir.
pub(super) const CONFIG_FILE_NAME: &str = "themeshift.toml";
/// Directory under the config root holding app files.
pub(crate) const APP_DIR_NAME: &str = "themeshift";
/// Env var overriding `[catalog] source`.
pub(super) const ENV_CATALOG: &str = "THEMESHIFT_CATALOG";
/// Env var overriding `[storage] path`.
pub(super) const ENV_STORE: &str = "THEMESHIFT_STORE";
