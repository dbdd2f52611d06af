//! Startup helpers: logging, catalog fetcher, and preference file location.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use themeshift::catalog::{CatalogFetcher, FileFetcher, HttpFetcher};
use themeshift::config::{CatalogSource, Config};
use themeshift::storage::default_store_path;
use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive.
pub(crate) const LOG_ENV: &str = "THEMESHIFT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber.
///
/// `--verbose` wins over `THEMESHIFT_LOG`; an invalid directive falls back
/// to the default level.
pub(crate) fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build the fetcher for the configured catalog source.
pub(crate) fn catalog_fetcher(config: &Config) -> Result<Arc<dyn CatalogFetcher>, String> {
    match &config.catalog.source {
        CatalogSource::Url(url) => {
            let timeout = config.catalog.timeout_secs.map(Duration::from_secs);
            let fetcher = HttpFetcher::new(url.clone(), timeout)
                .map_err(|e| format!("failed to build HTTP client: {e}"))?;
            Ok(Arc::new(fetcher))
        }
        CatalogSource::File(path) => Ok(Arc::new(FileFetcher::new(path.clone()))),
    }
}

/// Preferences file: `--store`, then config/env, then the per-user default.
pub(crate) fn store_path(cli_store: Option<PathBuf>, config: &Config) -> Result<PathBuf, String> {
    cli_store
        .or_else(|| config.storage.path.clone())
        .or_else(default_store_path)
        .ok_or_else(|| {
            "unable to resolve a preferences file location; pass --store <path>".to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use themeshift::config::StorageConfig;

    #[test]
    fn store_path_prefers_cli_flag() {
        let config = Config {
            storage: StorageConfig {
                path: Some(PathBuf::from("from-config.json")),
            },
            ..Config::default()
        };
        assert_eq!(
            store_path(Some(PathBuf::from("cli.json")), &config).unwrap(),
            PathBuf::from("cli.json")
        );
        assert_eq!(
            store_path(None, &config).unwrap(),
            PathBuf::from("from-config.json")
        );
    }

    #[test]
    fn file_source_builds_file_fetcher() {
        let fetcher = catalog_fetcher(&Config::default()).unwrap();
        assert!(fetcher.describe().contains("themes.json"));
    }

    #[test]
    fn url_source_builds_http_fetcher() {
        let mut config = Config::default();
        config.catalog.source = CatalogSource::parse("https://example.com/themes.json");
        config.catalog.timeout_secs = Some(3);
        let fetcher = catalog_fetcher(&config).unwrap();
        assert_eq!(fetcher.describe(), "https://example.com/themes.json");
    }
}
