//! Themeshift: theme catalog loading and a persistent preference store.
//!
//! The catalog is fetched once in the background; a `PreferenceStore` is
//! built from the loaded catalog and a durable key/value backend and owns
//! all preference mutations.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use themeshift::catalog::{CatalogLoader, FileFetcher};
//! use themeshift::prefs::{PreferencePolicy, PreferenceStore};
//! use themeshift::storage::MemoryStore;
//!
//! # async fn example() {
//! let mut loader = CatalogLoader::spawn(Arc::new(FileFetcher::new("themes.json")));
//! let Some(catalog) = loader.wait_ready().await else {
//!     return;
//! };
//! let mut store = PreferenceStore::new(catalog, MemoryStore::new(), PreferencePolicy::default());
//! store.toggle_dark_light().unwrap();
//! println!("{}", store.theme_key());
//! # }
//! ```

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod gallery;
pub mod prefs;
pub mod storage;
pub mod style;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
