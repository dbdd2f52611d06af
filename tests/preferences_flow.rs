//! End-to-end flow over the public API: load a catalog from disk, restore
//! preferences from a file store, mutate, and reopen.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use themeshift::catalog::{CatalogLoader, FileFetcher};
use themeshift::prefs::{FieldValue, PreferencePolicy, PreferenceStore, ToggleStrategy};
use themeshift::storage::{FileStore, KeyValueStore};

const CATALOG: &str = r##"{
    "light1": { "name": "Snow", "colors": { "background": "#ffffff", "primary": "#3366ff" } },
    "light2": { "name": "Paper", "colors": { "background": "#fafafa", "primary": "#aa5500" } },
    "dark1": { "name": "Midnight", "colors": { "background": "#000000", "primary": "#88aaff" } },
    "dark2": { "name": "Coal", "colors": { "background": "#222222", "primary": "#ffaa55" } }
}"##;

struct Scratch(PathBuf);

impl Scratch {
    fn new(label: &str) -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let dir = std::env::temp_dir().join(format!(
            "themeshift-it-{label}-{}-{nanos}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&dir).expect("scratch dir");
        Self(dir)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

async fn load(scratch: &Scratch) -> Arc<themeshift::catalog::ThemeCatalog> {
    let path = scratch.0.join("themes.json");
    fs::write(&path, CATALOG).expect("write catalog");
    let mut loader = CatalogLoader::spawn(Arc::new(FileFetcher::new(path)));
    loader.wait_ready().await.expect("catalog ready")
}

#[tokio::test]
async fn preferences_survive_reopen() {
    let scratch = Scratch::new("reopen");
    let catalog = load(&scratch).await;
    let store_path = scratch.0.join("prefs").join("preferences.json");

    {
        let storage = FileStore::open(&store_path).expect("open");
        let mut store = PreferenceStore::new(catalog.clone(), storage, PreferencePolicy::default());
        assert_eq!(store.theme_key(), "light1");
        assert!(store.toggle_dark_light().expect("toggle"));
        assert_eq!(store.theme_key(), "dark1");
        store.set_field(FieldValue::Spacing(99)).expect("spacing");
        store.toggle_favorite("light2").expect("favorite");
    }

    let storage = FileStore::open(&store_path).expect("reopen");
    assert_eq!(storage.get("theme").as_deref(), Some("dark1"));
    assert_eq!(storage.get("spacing").as_deref(), Some("8"));
    assert_eq!(storage.get("favoriteThemes").as_deref(), Some(r#"["light2"]"#));

    let store = PreferenceStore::new(catalog, storage, PreferencePolicy::default());
    assert_eq!(store.theme_key(), "dark1");
    assert!(store.is_dark());
    assert_eq!(store.state().spacing, 8);
    assert!(store.is_favorite("light2"));
    assert_eq!(store.recents(), ["dark1"]);
}

#[tokio::test]
async fn export_import_moves_settings_between_stores() {
    let scratch = Scratch::new("transfer");
    let catalog = load(&scratch).await;

    let mut source = PreferenceStore::new(
        catalog.clone(),
        FileStore::open(scratch.0.join("a.json")).expect("open a"),
        PreferencePolicy::default(),
    );
    source.set_theme_key("dark2").expect("set");
    source
        .set_field(FieldValue::Contrast(110))
        .expect("contrast");
    let exported = source.export_settings().expect("export");
    fs::write(scratch.0.join("theme-settings.json"), &exported).expect("write export");

    let mut target = PreferenceStore::new(
        catalog,
        FileStore::open(scratch.0.join("b.json")).expect("open b"),
        PreferencePolicy::default(),
    );
    let bytes = fs::read(scratch.0.join("theme-settings.json")).expect("read export");
    target.import_settings(&bytes).expect("import");
    assert_eq!(target.state(), source.state());
    assert_eq!(target.storage().get("contrast").as_deref(), Some("110"));
}

#[tokio::test]
async fn prefix_toggle_policy_pairs_by_prefix_position() {
    let scratch = Scratch::new("prefix");
    let catalog = load(&scratch).await;
    let policy = PreferencePolicy {
        toggle: ToggleStrategy::Prefix,
        ..PreferencePolicy::default()
    };
    let mut store = PreferenceStore::new(
        catalog,
        FileStore::open(scratch.0.join("p.json")).expect("open"),
        policy,
    );
    store.set_theme_key("light2").expect("set");
    assert!(store.toggle_dark_light().expect("toggle"));
    assert_eq!(store.theme_key(), "dark2");
}

#[tokio::test]
async fn missing_catalog_never_becomes_ready() {
    let scratch = Scratch::new("missing");
    let mut loader =
        CatalogLoader::spawn(Arc::new(FileFetcher::new(scratch.0.join("absent.json"))));
    assert!(loader.wait_ready().await.is_none());
    assert!(!loader.state().is_ready());
}
