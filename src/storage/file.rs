//! JSON-file backend: one flat object of string values.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::KeyValueStore;
use crate::config::{config_root_dir, APP_DIR_NAME};
use crate::error::StorageError;

/// Default preferences file (`~/.config/themeshift/preferences.json`).
pub fn default_store_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(APP_DIR_NAME).join("preferences.json"))
}

/// File-backed store; every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// A malformed file is treated as empty as well; it is replaced on the
    /// next write. Non-string values are skipped.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => parse_values(&path, &text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StorageError::Io(err)),
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(&self.values)?;
        // Write a sibling file first so a partial write never clobbers the
        // last good copy.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

fn parse_values(path: &Path, text: &str) -> BTreeMap<String, String> {
    match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(text) {
        Ok(raw) => raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring malformed preferences file");
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.values.insert((*key).to_string(), value.clone());
        }
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::ScratchDir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = ScratchDir::new("store-missing");
        let store = FileStore::open(dir.join("prefs.json")).expect("open");
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn writes_survive_reopen() {
        let dir = ScratchDir::new("store-reopen");
        let path = dir.join("nested/prefs.json");
        let mut store = FileStore::open(&path).expect("open");
        store.set("theme", "dark2").expect("set");
        store
            .set_many(&[("spacing", "3".to_string()), ("shadow", "0".to_string())])
            .expect("set_many");

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("theme").as_deref(), Some("dark2"));
        assert_eq!(reopened.get("spacing").as_deref(), Some("3"));
        assert_eq!(reopened.get("shadow").as_deref(), Some("0"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn malformed_file_is_treated_as_empty() {
        let dir = ScratchDir::new("store-malformed");
        let path = dir.write("prefs.json", "{ definitely not json");
        let mut store = FileStore::open(&path).expect("open");
        assert_eq!(store.get("theme"), None);
        store.set("theme", "light1").expect("set");
        let text = dir.read("prefs.json");
        assert!(text.contains("\"light1\""));
    }

    #[test]
    fn non_string_values_are_skipped() {
        let dir = ScratchDir::new("store-types");
        let path = dir.write("prefs.json", r#"{"spacing": 4, "theme": "dark1"}"#);
        let store = FileStore::open(&path).expect("open");
        assert_eq!(store.get("spacing"), None);
        assert_eq!(store.get("theme").as_deref(), Some("dark1"));
    }
}
