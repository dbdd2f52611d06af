//! Preference inspection, editing, and settings-file transfer.

use std::path::Path;

use themeshift::error::{PreferenceError, SetFieldError};
use themeshift::prefs::{PreferenceField, PreferenceStore};
use themeshift::storage::KeyValueStore;
use themeshift::style::StyleTokens;
use themeshift::ui::RenderSink;

use super::CommandResult;

/// Export target that prints to stdout instead of writing a file.
const STDOUT_PATH: &str = "-";

pub(crate) fn handle_show<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &PreferenceStore<S>,
) -> CommandResult {
    let theme = store.current_theme();
    renderer.section("theme");
    renderer.field("key", store.theme_key());
    if let Some(theme) = theme {
        renderer.field("name", &theme.name);
    }
    renderer.field("mode", if store.is_dark() { "dark" } else { "light" });
    if let Some(theme) = theme {
        for (slot, value) in theme.colors.iter() {
            renderer.color_field(slot, value);
        }
    }

    renderer.section("preferences");
    for value in store.state().field_values() {
        renderer.field(value.field().key(), &value.to_string());
    }
    renderer.field("favorites", &store.favorites().join(", "));

    renderer.section("styles");
    let tokens = StyleTokens::derive(store.state(), theme);
    for (name, value) in tokens.rows() {
        renderer.field(name, value);
    }
    Ok(())
}

/// Set one field from user text and report the value actually stored.
pub(crate) fn handle_field<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &mut PreferenceStore<S>,
    name: &str,
    raw: &str,
) -> CommandResult {
    let change = store.set_field_from_str(name, raw).map_err(|e| match e {
        SetFieldError::Input(PreferenceError::UnknownField(_)) => format!(
            "{e}. Fields: {}.",
            PreferenceField::ALL.map(PreferenceField::key).join(", ")
        ),
        other => other.to_string(),
    })?;

    let field = change.stored.field();
    renderer.field(field.key(), &change.stored.to_string());
    if change.clamped() {
        if let Some(range) = field.range() {
            renderer.detail(&format!(
                "clamped to {}..={}",
                range.start(),
                range.end()
            ));
        }
    }
    Ok(())
}

pub(crate) fn handle_export<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &PreferenceStore<S>,
    path: &Path,
) -> CommandResult {
    let bytes = store
        .export_settings()
        .map_err(|e| format!("failed to encode settings: {e}"))?;
    if path.as_os_str() == STDOUT_PATH {
        renderer.output(&String::from_utf8_lossy(&bytes));
        return Ok(());
    }
    std::fs::write(path, &bytes)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    renderer.section("exported settings");
    renderer.field("path", &path.display().to_string());
    Ok(())
}

pub(crate) fn handle_import<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &mut PreferenceStore<S>,
    path: &Path,
) -> CommandResult {
    store
        .import_settings_from_path(path)
        .map_err(|e| format!("Error importing settings from {}: {e}", path.display()))?;
    renderer.section("imported settings");
    renderer.field("theme", store.theme_key());
    for value in store.state().field_values() {
        renderer.field(value.field().key(), &value.to_string());
    }
    Ok(())
}
