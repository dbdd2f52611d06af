//! Preference store: the single owner of user display settings.
//!
//! Views read through accessors and change state only through the store's
//! methods. Every successful change is written through to the durable store
//! in full; reads never touch storage after `initialize`.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog::{ThemeCatalog, ThemeDefinition};
use crate::error::{ImportError, SetFieldError, StorageError};
use crate::storage::KeyValueStore;

pub mod toggle;
pub mod transfer;
pub mod types;

pub use toggle::{toggle_target, ToggleStrategy};
pub use transfer::{SettingsFile, EXPORT_FILE_NAME};
pub use types::{
    AnimationStyle, FieldValue, FontSize, PreferenceField, PreferenceState, DEFAULT_THEME_KEY,
};

/// Durable-store key of the active theme.
pub const KEY_THEME: &str = "theme";
/// Durable-store key of the favorites list (JSON array).
pub const KEY_FAVORITES: &str = "favoriteThemes";
/// Durable-store key of the recents list (JSON array).
pub const KEY_RECENTS: &str = "recentThemes";
/// Number of recently selected themes remembered.
pub const MAX_RECENTS: usize = 5;

/// Behavior switches for the store's open validation questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferencePolicy {
    /// Clamp numeric fields from imported settings into range.
    pub clamp_imports: bool,
    pub toggle: ToggleStrategy,
}

impl Default for PreferencePolicy {
    fn default() -> Self {
        Self {
            clamp_imports: true,
            toggle: ToggleStrategy::default(),
        }
    }
}

/// Outcome of `set_field_from_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChange {
    pub requested: FieldValue,
    pub stored: FieldValue,
}

impl FieldChange {
    /// The requested number fell outside its range.
    pub fn clamped(&self) -> bool {
        self.requested != self.stored
    }
}

/// Preference state bound to a loaded catalog and a durable store.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    catalog: Arc<ThemeCatalog>,
    storage: S,
    policy: PreferencePolicy,
    state: PreferenceState,
    favorites: Vec<String>,
    recents: Vec<String>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Build a store and restore persisted values.
    ///
    /// Taking the catalog by value means the store cannot exist while the
    /// catalog is still loading.
    pub fn new(catalog: Arc<ThemeCatalog>, storage: S, policy: PreferencePolicy) -> Self {
        let mut store = Self {
            catalog,
            storage,
            policy,
            state: PreferenceState::default(),
            favorites: Vec::new(),
            recents: Vec::new(),
        };
        store.initialize();
        store
    }

    /// Re-read every field from durable storage.
    ///
    /// Absent or unparsable values take their defaults, numbers are clamped,
    /// and a stored theme key missing from the catalog falls back to the
    /// default theme. Nothing is written.
    pub fn initialize(&mut self) {
        let mut state = PreferenceState {
            theme_key: self.restore_theme_key(),
            ..PreferenceState::default()
        };
        for field in PreferenceField::ALL {
            let Some(raw) = self.storage.get(field.key()) else {
                continue;
            };
            match FieldValue::parse(field, &raw) {
                Ok(value) => state.apply_clamped(value),
                Err(err) => debug!(field = %field, error = %err, "using default for stored value"),
            }
        }
        self.state = state;
        self.favorites = self.restore_key_list(KEY_FAVORITES);
        self.recents = self.restore_key_list(KEY_RECENTS);
        self.recents.truncate(MAX_RECENTS);
    }

    fn restore_theme_key(&self) -> String {
        let stored = self.storage.get(KEY_THEME);
        if let Some(key) = stored.as_deref().filter(|key| self.catalog.contains(key)) {
            return key.to_string();
        }
        if let Some(key) = stored {
            warn!(theme = %key, "stored theme is not in the catalog; using default");
        }
        if self.catalog.contains(DEFAULT_THEME_KEY) {
            return DEFAULT_THEME_KEY.to_string();
        }
        self.catalog
            .key_at(0)
            .unwrap_or(DEFAULT_THEME_KEY)
            .to_string()
    }

    fn restore_key_list(&self, storage_key: &str) -> Vec<String> {
        let Some(raw) = self.storage.get(storage_key) else {
            return Vec::new();
        };
        let keys = match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(keys) => keys,
            Err(err) => {
                debug!(key = storage_key, error = %err, "ignoring malformed stored list");
                return Vec::new();
            }
        };
        let mut restored: Vec<String> = Vec::with_capacity(keys.len());
        for key in keys {
            if self.catalog.contains(&key) && !restored.contains(&key) {
                restored.push(key);
            }
        }
        restored
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn theme_key(&self) -> &str {
        &self.state.theme_key
    }

    pub fn is_dark(&self) -> bool {
        self.state.is_dark()
    }

    /// Definition of the active theme.
    pub fn current_theme(&self) -> Option<&ThemeDefinition> {
        self.catalog.get(&self.state.theme_key)
    }

    pub fn catalog(&self) -> &Arc<ThemeCatalog> {
        &self.catalog
    }

    pub fn policy(&self) -> PreferencePolicy {
        self.policy
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Favorite keys in the order they were marked.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.iter().any(|k| k == key)
    }

    /// Recently selected keys, most recent first.
    pub fn recents(&self) -> &[String] {
        &self.recents
    }

    /// Switch the active theme.
    ///
    /// Returns `Ok(false)` without touching anything when `key` is not in the
    /// catalog.
    pub fn set_theme_key(&mut self, key: &str) -> Result<bool, StorageError> {
        if !self.catalog.contains(key) {
            debug!(theme = %key, "ignoring unknown theme key");
            return Ok(false);
        }
        self.apply_theme_key(key);
        self.persist()?;
        Ok(true)
    }

    /// Assign one customization field; numbers outside their range clamp.
    pub fn set_field(&mut self, value: FieldValue) -> Result<(), StorageError> {
        self.state.apply_clamped(value);
        debug!(field = %value.field(), value = %value, "preference updated");
        self.persist()
    }

    /// Parse `name`/`raw` as typed by a user and assign the field.
    ///
    /// Bad input leaves state untouched.
    pub fn set_field_from_str(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<FieldChange, SetFieldError> {
        let field: PreferenceField = name.parse()?;
        let requested = FieldValue::parse(field, raw)?;
        self.set_field(requested)?;
        let stored = self
            .state
            .field_values()
            .into_iter()
            .find(|value| value.field() == field)
            .unwrap_or(requested);
        Ok(FieldChange { requested, stored })
    }

    /// Switch to the current theme's dark/light counterpart.
    ///
    /// Returns `Ok(false)` when the catalog offers no counterpart.
    pub fn toggle_dark_light(&mut self) -> Result<bool, StorageError> {
        let Some(target) =
            toggle_target(&self.catalog, &self.state.theme_key, self.policy.toggle)
                .map(str::to_string)
        else {
            debug!(theme = %self.state.theme_key, "no dark/light counterpart");
            return Ok(false);
        };
        self.apply_theme_key(&target);
        self.persist()?;
        Ok(true)
    }

    /// Flip favorite status of `key`.
    ///
    /// Returns the new status, or `None` when `key` is not in the catalog.
    pub fn toggle_favorite(&mut self, key: &str) -> Result<Option<bool>, StorageError> {
        if !self.catalog.contains(key) {
            return Ok(None);
        }
        let now_favorite = if let Some(idx) = self.favorites.iter().position(|k| k == key) {
            self.favorites.remove(idx);
            false
        } else {
            self.favorites.push(key.to_string());
            true
        };
        self.persist()?;
        Ok(Some(now_favorite))
    }

    /// Serialize the current settings as a pretty JSON document.
    pub fn export_settings(&self) -> Result<Vec<u8>, serde_json::Error> {
        SettingsFile::from_state(&self.state).to_json_bytes()
    }

    /// Apply a document produced by `export_settings`.
    ///
    /// A document that fails to parse changes nothing. Otherwise every field
    /// is applied at once; a theme key missing from the catalog is ignored
    /// while the remaining fields still apply.
    pub fn import_settings(&mut self, bytes: &[u8]) -> Result<(), ImportError> {
        let file = match SettingsFile::from_json_slice(bytes) {
            Ok(file) => file,
            Err(err) => {
                warn!(error = %err, "error importing settings");
                return Err(ImportError::Parse(err));
            }
        };
        for value in file.field_values() {
            if self.policy.clamp_imports {
                self.state.apply_clamped(value);
            } else {
                self.state.apply_raw(value);
            }
        }
        match file.theme.as_deref() {
            Some(key) if self.catalog.contains(key) => self.apply_theme_key(key),
            Some(key) => warn!(theme = %key, "imported theme is not in the catalog; keeping current"),
            None => {}
        }
        self.persist()?;
        Ok(())
    }

    /// Read a settings file from disk and apply it like `import_settings`.
    pub fn import_settings_from_path(&mut self, path: &Path) -> Result<(), ImportError> {
        let bytes = std::fs::read(path)?;
        self.import_settings(&bytes)
    }

    fn apply_theme_key(&mut self, key: &str) {
        self.state.theme_key = key.to_string();
        push_recent(&mut self.recents, key);
        debug!(theme = %key, "theme selected");
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let mut entries: Vec<(&str, String)> = vec![(KEY_THEME, self.state.theme_key.clone())];
        for value in self.state.field_values() {
            entries.push((value.field().key(), value.to_string()));
        }
        entries.push((KEY_FAVORITES, serde_json::to_string(&self.favorites)?));
        entries.push((KEY_RECENTS, serde_json::to_string(&self.recents)?));
        self.storage.set_many(&entries)
    }
}

/// Move `key` to the front of `recents`, dropping duplicates and overflow.
pub fn push_recent(recents: &mut Vec<String>, key: &str) {
    recents.retain(|k| k != key);
    recents.insert(0, key.to_string());
    recents.truncate(MAX_RECENTS);
}
