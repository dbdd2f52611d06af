//! Environment overrides.
//!
//! Blank values are treated as unset.

use std::path::PathBuf;

use super::defaults::{ENV_CATALOG, ENV_STORE};
use super::{CatalogSource, Config};

pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(source) = non_blank(env_lookup, ENV_CATALOG) {
        config.catalog.source = CatalogSource::parse(&source);
    }
    if let Some(path) = non_blank(env_lookup, ENV_STORE) {
        config.storage.path = Some(PathBuf::from(path));
    }
}

fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
