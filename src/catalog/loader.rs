//! One-shot catalog loading.
//!
//! The loader runs a single fetch on a background task and publishes
//! `Loading -> Ready` over a watch channel. A failed fetch is logged and the
//! state stays `Loading`; nothing retries.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::ThemeCatalog;
use crate::error::CatalogError;

/// Where the catalog document comes from.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Read the raw catalog document.
    async fn fetch(&self) -> Result<Vec<u8>, CatalogError>;

    /// Human-readable location used in logs.
    fn describe(&self) -> String;
}

/// Fetch the catalog with an HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    /// Build a fetcher for `url`. `timeout` of `None` waits indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Read the catalog from a local file.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogFetcher for FileFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, CatalogError> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetch and decode a catalog in one step.
pub async fn load_catalog(fetcher: &dyn CatalogFetcher) -> Result<ThemeCatalog, CatalogError> {
    let bytes = fetcher.fetch().await?;
    ThemeCatalog::from_json_slice(&bytes)
}

/// Observable catalog availability.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Catalog not available; no interaction possible.
    #[default]
    Loading,
    /// Catalog fetched and decoded; read-only for the session.
    Ready(Arc<ThemeCatalog>),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Shared catalog handle when ready.
    pub fn catalog(&self) -> Option<Arc<ThemeCatalog>> {
        match self {
            Self::Ready(catalog) => Some(Arc::clone(catalog)),
            Self::Loading => None,
        }
    }
}

/// Handle to a background catalog load.
///
/// Dropping the handle does not cancel the fetch; the completed load simply
/// has nobody to publish to.
#[derive(Debug)]
pub struct CatalogLoader {
    state: watch::Receiver<LoadState>,
    task: JoinHandle<()>,
}

impl CatalogLoader {
    /// Start the one-shot load on the current tokio runtime.
    pub fn spawn(fetcher: Arc<dyn CatalogFetcher>) -> Self {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let task = tokio::spawn(async move {
            let source = fetcher.describe();
            match load_catalog(fetcher.as_ref()).await {
                Ok(catalog) => {
                    info!(source = %source, themes = catalog.len(), "theme catalog loaded");
                    if tx.send(LoadState::Ready(Arc::new(catalog))).is_err() {
                        debug!(source = %source, "catalog loaded after all observers went away");
                    }
                }
                Err(err) => {
                    error!(source = %source, error = %err, "error loading themes");
                }
            }
        });
        Self { state: rx, task }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Additional observer of the load state.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.clone()
    }

    /// Whether the background fetch has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait until the catalog is ready.
    ///
    /// Returns `None` once the loader has finished without a catalog; the
    /// published state is still `Loading` in that case.
    pub async fn wait_ready(&mut self) -> Option<Arc<ThemeCatalog>> {
        loop {
            if let Some(catalog) = self.state.borrow_and_update().catalog() {
                return Some(catalog);
            }
            if self.state.changed().await.is_err() {
                return self.state.borrow().catalog();
            }
        }
    }
}
