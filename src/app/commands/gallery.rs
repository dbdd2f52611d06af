//! Gallery listing commands.

use themeshift::gallery::{GalleryQuery, ViewMode};
use themeshift::prefs::PreferenceStore;
use themeshift::storage::KeyValueStore;
use themeshift::ui::{GalleryEntry, RenderSink};

use super::CommandResult;

pub(crate) fn handle_list<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &PreferenceStore<S>,
    query: &GalleryQuery,
    view: ViewMode,
) -> CommandResult {
    let catalog = store.catalog();
    let rows = query.apply(catalog, store.favorites(), store.recents());
    if rows.is_empty() {
        renderer.detail(&format!(
            "No themes match (filter: {}, search: `{}`).",
            query.filter, query.search
        ));
        renderer.detail(&format!(
            "Categories: {}.",
            catalog.categories().join(", ")
        ));
        return Ok(());
    }
    let entries: Vec<GalleryEntry<'_>> = rows
        .into_iter()
        .map(|(key, theme)| GalleryEntry {
            index: catalog.position(key).map_or(0, |idx| idx + 1),
            key,
            theme,
            active: key == store.theme_key(),
            favorite: store.is_favorite(key),
        })
        .collect();
    renderer.gallery(&entries, view);
    Ok(())
}

pub(crate) fn handle_recent<S: KeyValueStore>(
    renderer: &dyn RenderSink,
    store: &PreferenceStore<S>,
) -> CommandResult {
    if store.recents().is_empty() {
        renderer.detail("No recently used themes.");
        return Ok(());
    }
    renderer.section("recent themes");
    for (idx, key) in store.recents().iter().enumerate() {
        let name = store
            .catalog()
            .get(key)
            .map(|theme| theme.name.as_str())
            .unwrap_or("?");
        renderer.field(&(idx + 1).to_string(), &format!("{key} ({name})"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testsupport::{sample_store, RecordingSink};
    use themeshift::gallery::{GalleryFilter, SortOrder};

    #[test]
    fn list_marks_active_and_favorite_rows() {
        let sink = RecordingSink::default();
        let mut store = sample_store();
        store.toggle_favorite("dark2").unwrap();
        let query = GalleryQuery {
            sort: SortOrder::Type,
            ..GalleryQuery::default()
        };
        handle_list(&sink, &store, &query, ViewMode::List).unwrap();
        let lines = sink.lines.borrow();
        assert_eq!(
            *lines,
            [
                "row(List): 3.dark1 ",
                "row(List): 4.dark2 +",
                "row(List): 1.light1 *",
                "row(List): 2.light2 ",
            ]
        );
    }

    #[test]
    fn list_with_no_matches_says_so() {
        let sink = RecordingSink::default();
        let store = sample_store();
        let query = GalleryQuery {
            filter: GalleryFilter::Favorites,
            ..GalleryQuery::default()
        };
        handle_list(&sink, &store, &query, ViewMode::Grid).unwrap();
        assert!(sink.contains("No themes match"));
        assert!(sink.contains("detail: Categories: light, dark."));
        assert_eq!(sink.count("row"), 0);
    }

    #[test]
    fn recent_lists_most_recent_first() {
        let sink = RecordingSink::default();
        let mut store = sample_store();
        store.set_theme_key("dark1").unwrap();
        store.set_theme_key("light2").unwrap();
        handle_recent(&sink, &store).unwrap();
        assert!(sink.contains("field: 1=light2 (Paper)"));
        assert!(sink.contains("field: 2=dark1 (Midnight)"));
    }

    #[test]
    fn recent_when_empty() {
        let sink = RecordingSink::default();
        handle_recent(&sink, &sample_store()).unwrap();
        assert!(sink.contains("No recently used themes."));
    }
}
