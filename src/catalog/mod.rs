//! Theme catalog model.
//!
//! The catalog is an ordered `key -> definition` mapping decoded from the
//! external `themes.json` document. Iteration order is document order, which
//! the dark/light toggle depends on.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::error::CatalogError;

pub mod loader;

pub use loader::{load_catalog, CatalogFetcher, CatalogLoader, FileFetcher, HttpFetcher, LoadState};

/// Key prefix that marks a theme as dark.
pub const DARK_PREFIX: &str = "dark";
/// Key prefix that marks a theme as light.
pub const LIGHT_PREFIX: &str = "light";

/// One named theme with its semantic color slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Display name shown in the gallery.
    pub name: String,
    /// Open set of slots (`background`, `text`, `primary`, ...) to color values.
    pub colors: ColorMap,
}

impl ThemeDefinition {
    /// Color value for `slot`, if the theme defines it.
    pub fn color(&self, slot: &str) -> Option<&str> {
        self.colors.get(slot)
    }
}

/// Slot-to-color mapping kept in document order.
///
/// Serializes back as a JSON object with the slots in the order they were
/// read, so copied colors match the catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    slots: Vec<(String, String)>,
}

impl ColorMap {
    /// Set `slot`; an existing slot keeps its position.
    pub fn insert(&mut self, slot: impl Into<String>, value: impl Into<String>) {
        let slot = slot.into();
        let value = value.into();
        match self.slots.iter_mut().find(|(existing, _)| *existing == slot) {
            Some(entry) => entry.1 = value,
            None => self.slots.push((slot, value)),
        }
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(existing, _)| existing == slot)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .map(|(slot, value)| (slot.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut colors = Self::default();
        for (slot, value) in iter {
            colors.insert(slot, value);
        }
        colors
    }
}

impl Serialize for ColorMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ColorMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColorMapVisitor;

        impl<'de> Visitor<'de> for ColorMapVisitor {
            type Value = ColorMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of color slot to color value")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut colors = ColorMap::default();
                while let Some((slot, value)) = access.next_entry::<String, String>()? {
                    colors.insert(slot, value);
                }
                Ok(colors)
            }
        }

        deserializer.deserialize_map(ColorMapVisitor)
    }
}

/// Read-only, insertion-ordered mapping of theme key to definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCatalog {
    entries: Vec<(String, ThemeDefinition)>,
    index: HashMap<String, usize>,
}

impl ThemeCatalog {
    /// Build a catalog from `(key, definition)` pairs, preserving order.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ThemeDefinition)>,
        K: Into<String>,
    {
        let mut catalog = Self::default();
        for (key, theme) in entries {
            catalog.insert(key.into(), theme);
        }
        catalog
    }

    /// Decode a catalog document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    // A repeated key keeps its first position and takes the later definition.
    fn insert(&mut self, key: String, theme: ThemeDefinition) {
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1 = theme;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, theme));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ThemeDefinition> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// Position of `key` in catalog order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Key at catalog position `idx`.
    pub fn key_at(&self, idx: usize) -> Option<&str> {
        self.entries.get(idx).map(|(key, _)| key.as_str())
    }

    /// Keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeDefinition)> {
        self.entries.iter().map(|(key, theme)| (key.as_str(), theme))
    }

    /// Distinct key categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for key in self.keys() {
            let category = category(key);
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

/// True when a theme key names a dark theme.
pub fn is_dark_key(key: &str) -> bool {
    key.starts_with(DARK_PREFIX)
}

/// Category prefix of a `<category><index>` key (`seasonal3` -> `seasonal`).
pub fn category(key: &str) -> &str {
    let end = key
        .char_indices()
        .find(|(_, ch)| ch.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(key.len());
    &key[..end]
}

impl<'de> Deserialize<'de> for ThemeCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ThemeCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of theme key to { name, colors }")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = ThemeCatalog::default();
                while let Some((key, theme)) = access.next_entry::<String, ThemeDefinition>()? {
                    catalog.insert(key, theme);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
