//! Unified error types for catalog loading, storage, and preferences.

use std::fmt;

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Errors raised while fetching or decoding the theme catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Local catalog file could not be read.
    Io(std::io::Error),
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the catalog endpoint.
    Status(u16),
    /// Catalog document is not a `{ key: { name, colors } }` object.
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code) => write!(f, "HTTP error! status: {code}"),
            Self::Parse(e) => write!(f, "malformed catalog: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors from a durable key/value backend.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// ImportError
// ---------------------------------------------------------------------------

/// Errors when reading a settings file produced by `export`.
#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Settings were applied but could not be persisted.
    Storage(StorageError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "invalid settings file: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<StorageError> for ImportError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

// ---------------------------------------------------------------------------
// PreferenceError
// ---------------------------------------------------------------------------

/// Errors when turning user-typed text into a preference change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// No preference field carries this name.
    UnknownField(String),
    /// The value does not parse for the named field.
    InvalidValue { field: &'static str, value: String },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown preference field `{name}`"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value `{value}` for {field}")
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Failure of a textual preference change: bad input or a failed write.
#[derive(Debug)]
pub enum SetFieldError {
    Input(PreferenceError),
    Storage(StorageError),
}

impl fmt::Display for SetFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{e}"),
            Self::Storage(e) => write!(f, "failed to save preferences: {e}"),
        }
    }
}

impl std::error::Error for SetFieldError {}

impl From<PreferenceError> for SetFieldError {
    fn from(e: PreferenceError) -> Self {
        Self::Input(e)
    }
}

impl From<StorageError> for SetFieldError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
