//! Theme selection commands.

use themeshift::catalog::ThemeCatalog;
use themeshift::clipboard::{copy_theme_colors, Clipboard};
use themeshift::prefs::PreferenceStore;
use themeshift::storage::KeyValueStore;
use themeshift::ui::RenderSink;

use super::CommandResult;

/// Resolve a selector as a 1-based catalog index, a key, or a theme name.
///
/// Keys and names match case-insensitively; an exact key wins.
pub(crate) fn resolve_theme_selector(
    catalog: &ThemeCatalog,
    selector: &str,
) -> Result<String, String> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err("Usage: themeshift set <key|name|index>".to_string());
    }

    if let Ok(index) = trimmed.parse::<usize>() {
        return match index.checked_sub(1).and_then(|idx| catalog.key_at(idx)) {
            Some(key) => Ok(key.to_string()),
            None => Err(format!(
                "Theme index out of range: {index}. Choose 1-{}.",
                catalog.len()
            )),
        };
    }

    if catalog.contains(trimmed) {
        return Ok(trimmed.to_string());
    }
    let normalized = trimmed.to_lowercase();
    catalog
        .iter()
        .find(|(key, _)| key.to_lowercase() == normalized)
        .or_else(|| {
            catalog
                .iter()
                .find(|(_, theme)| theme.name.to_lowercase() == normalized)
        })
        .map(|(key, _)| key.to_string())
        .ok_or_else(|| {
            format!("Unknown theme `{trimmed}`. Run `themeshift list` to see available themes.")
        })
}

pub(crate) fn handle_set<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &mut PreferenceStore<S>,
    selector: &str,
) -> CommandResult {
    let key = resolve_theme_selector(store.catalog(), selector)?;
    let changed = store
        .set_theme_key(&key)
        .map_err(|e| format!("failed to save preferences: {e}"))?;
    if !changed {
        return Err(format!("Unknown theme `{key}`."));
    }
    render_switched(renderer, store);
    Ok(())
}

pub(crate) fn handle_toggle<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &mut PreferenceStore<S>,
) -> CommandResult {
    let switched = store
        .toggle_dark_light()
        .map_err(|e| format!("failed to save preferences: {e}"))?;
    if switched {
        render_switched(renderer, store);
    } else {
        renderer.warn(&format!(
            "no dark/light counterpart for `{}`",
            store.theme_key()
        ));
    }
    Ok(())
}

pub(crate) fn handle_favorite<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &mut PreferenceStore<S>,
    selector: &str,
) -> CommandResult {
    let key = resolve_theme_selector(store.catalog(), selector)?;
    match store.toggle_favorite(&key) {
        Ok(Some(true)) => renderer.section(&format!("added `{key}` to favorites")),
        Ok(Some(false)) => renderer.section(&format!("removed `{key}` from favorites")),
        Ok(None) => return Err(format!("Unknown theme `{key}`.")),
        Err(e) => return Err(format!("failed to save preferences: {e}")),
    }
    renderer.field("favorites", &store.favorites().len().to_string());
    Ok(())
}

/// Copy a theme's color map as JSON; defaults to the active theme.
pub(crate) fn handle_copy<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &PreferenceStore<S>,
    clipboard: &mut dyn Clipboard,
    selector: Option<&str>,
) -> CommandResult {
    let key = match selector {
        Some(selector) => resolve_theme_selector(store.catalog(), selector)?,
        None => store.theme_key().to_string(),
    };
    let copied = copy_theme_colors(store.catalog(), &key, clipboard)
        .map_err(|e| format!("failed to copy to clipboard: {e}"))?;
    if !copied {
        return Err(format!("Unknown theme `{key}`."));
    }
    renderer.section(&format!("copied colors: {key}"));
    renderer.detail("Colors copied to clipboard!");
    Ok(())
}

fn render_switched<S: KeyValueStore>(renderer: &dyn RenderSink, store: &PreferenceStore<S>) {
    renderer.section(&format!("switched theme: {}", store.theme_key()));
    if let Some(theme) = store.current_theme() {
        renderer.field("name", &theme.name);
    }
    renderer.field("mode", if store.is_dark() { "dark" } else { "light" });
}
