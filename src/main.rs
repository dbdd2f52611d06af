//! CLI entry point for themeshift.

mod app;
mod build_info;
mod cli;

use app::commands::{gallery, settings, theme, CommandResult};
use app::startup;
use clap::Parser;
use themeshift::catalog::CatalogLoader;
use themeshift::clipboard::Osc52Clipboard;
use themeshift::config::{load_config_with_source, CatalogSource};
use themeshift::gallery::GalleryQuery;
use themeshift::prefs::PreferenceStore;
use themeshift::storage::FileStore;
use themeshift::ui::{RenderSink, Renderer};
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    startup::init_logging(args.verbose);

    // Load config.
    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    debug!(source = %loaded.source, "configuration loaded");
    let mut config = loaded.config;

    // Apply CLI overrides.
    if let Some(source) = &args.catalog {
        config.catalog.source = CatalogSource::parse(source);
    }
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);

    let fetcher = match startup::catalog_fetcher(&config) {
        Ok(fetcher) => fetcher,
        Err(msg) => {
            renderer.error(&msg);
            std::process::exit(1);
        }
    };
    let mut loader = CatalogLoader::spawn(fetcher);
    let Some(catalog) = loader.wait_ready().await else {
        renderer.error(&format!(
            "theme catalog unavailable from {}; run with --verbose for details",
            config.catalog.source
        ));
        std::process::exit(1);
    };

    let store_path = match startup::store_path(args.store.clone(), &config) {
        Ok(path) => path,
        Err(msg) => {
            renderer.error(&msg);
            std::process::exit(1);
        }
    };
    let storage = match FileStore::open(&store_path) {
        Ok(storage) => storage,
        Err(e) => {
            renderer.error(&format!(
                "failed to open preferences at {}: {e}",
                store_path.display()
            ));
            std::process::exit(1);
        }
    };
    let mut store = PreferenceStore::new(catalog, storage, config.policy);

    let command = args.command.unwrap_or(cli::Command::Show);
    let result: CommandResult = match command {
        cli::Command::List {
            filter,
            search,
            sort,
            view,
        } => {
            let query = GalleryQuery {
                filter,
                search,
                sort,
            };
            gallery::handle_list(
                &renderer,
                &store,
                &query,
                view.unwrap_or(config.display.view),
            )
        }
        cli::Command::Show => settings::handle_show(&renderer, &store),
        cli::Command::Set { theme: selector } => {
            theme::handle_set(&renderer, &mut store, &selector)
        }
        cli::Command::Toggle => theme::handle_toggle(&renderer, &mut store),
        cli::Command::Field { name, value } => {
            settings::handle_field(&renderer, &mut store, &name, &value)
        }
        cli::Command::Favorite { theme: selector } => {
            theme::handle_favorite(&renderer, &mut store, &selector)
        }
        cli::Command::Recent => gallery::handle_recent(&renderer, &store),
        cli::Command::Export { path } => settings::handle_export(&renderer, &store, &path),
        cli::Command::Import { path } => settings::handle_import(&renderer, &mut store, &path),
        cli::Command::Copy { theme: selector } => {
            let mut clipboard = Osc52Clipboard::stdout();
            theme::handle_copy(&renderer, &store, &mut clipboard, selector.as_deref())
        }
    };

    if let Err(msg) = result {
        renderer.error(&msg);
        std::process::exit(1);
    }
}
