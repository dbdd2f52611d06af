//! Gallery filtering, search, and ordering over the catalog.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{ThemeCatalog, ThemeDefinition};

/// Which themes the gallery shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryFilter {
    #[default]
    All,
    Favorites,
    /// Keys starting with this prefix (`light`, `seasonal`, ...).
    Category(String),
}

impl FromStr for GalleryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Ok(match normalized.as_str() {
            "" | "all" => Self::All,
            "favorites" | "favourites" | "fav" => Self::Favorites,
            _ => Self::Category(normalized),
        })
    }
}

impl fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Favorites => f.write_str("favorites"),
            Self::Category(prefix) => f.write_str(prefix),
        }
    }
}

/// Gallery ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Theme display name, case-insensitive.
    #[default]
    Name,
    /// Theme key, which groups by category.
    Type,
    /// Most recently selected first; never-selected themes last.
    Recent,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" | "key" => Ok(Self::Type),
            "recent" => Ok(Self::Recent),
            other => Err(format!("unknown sort order `{other}` (use name, type, or recent)")),
        }
    }
}

/// Gallery layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(format!("unknown view `{other}` (use grid or list)")),
        }
    }
}

/// Filter + search + sort applied to one catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryQuery {
    pub filter: GalleryFilter,
    pub search: String,
    pub sort: SortOrder,
}

impl GalleryQuery {
    /// Matching entries in display order.
    pub fn apply<'a>(
        &self,
        catalog: &'a ThemeCatalog,
        favorites: &[String],
        recents: &[String],
    ) -> Vec<(&'a str, &'a ThemeDefinition)> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<(&str, &ThemeDefinition)> = catalog
            .iter()
            .filter(|(key, _)| self.matches_filter(key, favorites))
            .filter(|(key, theme)| {
                needle.is_empty()
                    || theme.name.to_lowercase().contains(&needle)
                    || key.to_lowercase().contains(&needle)
            })
            .collect();

        match self.sort {
            SortOrder::Name => rows.sort_by(|a, b| {
                a.1.name
                    .to_lowercase()
                    .cmp(&b.1.name.to_lowercase())
                    .then_with(|| a.0.cmp(b.0))
            }),
            SortOrder::Type => rows.sort_by(|a, b| a.0.cmp(b.0)),
            SortOrder::Recent => {
                let rank = |key: &str| recents.iter().position(|k| k == key);
                rows.sort_by(|a, b| match (rank(a.0), rank(b.0)) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                });
            }
        }
        rows
    }

    fn matches_filter(&self, key: &str, favorites: &[String]) -> bool {
        match &self.filter {
            GalleryFilter::All => true,
            GalleryFilter::Favorites => favorites.iter().any(|k| k == key),
            GalleryFilter::Category(prefix) => key.starts_with(prefix.as_str()),
        }
    }
}
