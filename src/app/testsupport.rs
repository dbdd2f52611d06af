//! Recording render sink and store fixtures for command handler tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use themeshift::catalog::{ThemeCatalog, ThemeDefinition};
use themeshift::gallery::ViewMode;
use themeshift::prefs::{PreferencePolicy, PreferenceStore};
use themeshift::storage::MemoryStore;
use themeshift::ui::{GalleryEntry, RenderSink};

/// Captures every rendered line as `kind: text`.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    fn push(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line.contains(needle))
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.lines
            .borrow()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn section(&self, title: &str) {
        self.push(format!("section: {title}"));
    }

    fn field(&self, key: &str, value: &str) {
        self.push(format!("field: {key}={value}"));
    }

    fn color_field(&self, key: &str, value: &str) {
        self.push(format!("color: {key}={value}"));
    }

    fn detail(&self, text: &str) {
        self.push(format!("detail: {text}"));
    }

    fn warn(&self, msg: &str) {
        self.push(format!("warn: {msg}"));
    }

    fn error(&self, msg: &str) {
        self.push(format!("error: {msg}"));
    }

    fn gallery(&self, entries: &[GalleryEntry<'_>], view: ViewMode) {
        for entry in entries {
            let active = if entry.active { "*" } else { "" };
            let favorite = if entry.favorite { "+" } else { "" };
            self.push(format!(
                "row({view:?}): {}.{} {active}{favorite}",
                entry.index, entry.key
            ));
        }
    }

    fn output(&self, text: &str) {
        self.push(format!("output: {text}"));
    }
}

pub(crate) fn theme(name: &str, background: &str) -> ThemeDefinition {
    ThemeDefinition {
        name: name.to_string(),
        colors: [
            ("background", background),
            ("text", "#111111"),
            ("primary", "#3366ff"),
        ]
        .into_iter()
        .map(|(slot, value)| (slot.to_string(), value.to_string()))
        .collect(),
    }
}

/// `light1 Snow, light2 Paper, dark1 Midnight, dark2 Coal`.
pub(crate) fn sample_store() -> PreferenceStore<MemoryStore> {
    let catalog = ThemeCatalog::from_entries([
        ("light1", theme("Snow", "#ffffff")),
        ("light2", theme("Paper", "#fafafa")),
        ("dark1", theme("Midnight", "#000000")),
        ("dark2", theme("Coal", "#222222")),
    ]);
    PreferenceStore::new(
        Arc::new(catalog),
        MemoryStore::new(),
        PreferencePolicy::default(),
    )
}

/// Temp directory for file-based command tests, removed on drop even when an
/// assertion fails first.
pub(crate) struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        static SEQ: AtomicU64 = AtomicU64::new(0);
        let path = std::env::temp_dir().join(format!(
            "themeshift-cmd-{label}-{}-{}",
            std::process::id(),
            SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
