//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use themeshift::gallery::{GalleryFilter, SortOrder, ViewMode};

/// Browse themes and manage display preferences from the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "themeshift",
    version = crate::build_info::VERSION,
    long_version = crate::build_info::LONG_VERSION,
    after_help = crate::build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./themeshift.toml or
    /// ~/.config/themeshift/themeshift.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Catalog location: a URL or a local JSON file.
    #[arg(long = "catalog", global = true)]
    pub catalog: Option<String>,

    /// Preferences file to read and write.
    #[arg(long = "store", global = true)]
    pub store: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Log debug output to stderr.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Show the theme gallery.
    List {
        /// all, favorites, or a key prefix such as light, dark, seasonal.
        #[arg(short = 'f', long = "filter", default_value = "all")]
        filter: GalleryFilter,
        /// Case-insensitive match on theme name or key.
        #[arg(short = 's', long = "search", default_value = "")]
        search: String,
        /// name, type, or recent.
        #[arg(long = "sort", default_value = "name")]
        sort: SortOrder,
        /// grid or list; defaults to the configured view.
        #[arg(long = "view")]
        view: Option<ViewMode>,
    },
    /// Show the active theme, preferences, and derived styles.
    Show,
    /// Select a theme by key or gallery index.
    Set { theme: String },
    /// Switch between the dark and light variant of the active theme.
    Toggle,
    /// Change one customization field, e.g. `field spacing 6`.
    Field {
        name: String,
        /// Out-of-range numbers, negative ones included, are clamped.
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Add or remove a theme from favorites.
    Favorite { theme: String },
    /// List recently selected themes.
    Recent,
    /// Write current settings as JSON; `-` prints to stdout.
    Export {
        #[arg(default_value = themeshift::prefs::EXPORT_FILE_NAME)]
        path: PathBuf,
    },
    /// Apply settings from a JSON file.
    Import { path: PathBuf },
    /// Copy a theme's colors (default: the active theme) to the clipboard.
    Copy { theme: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;
    use themeshift::gallery::{GalleryFilter, SortOrder, ViewMode};

    #[test]
    fn no_subcommand_is_allowed() {
        let args = Args::parse_from(["themeshift"]);
        assert!(args.command.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn list_parses_filter_sort_and_view() {
        let args = Args::parse_from([
            "themeshift",
            "list",
            "--filter",
            "seasonal",
            "--sort",
            "recent",
            "--view",
            "list",
        ]);
        assert_eq!(
            args.command,
            Some(Command::List {
                filter: GalleryFilter::Category("seasonal".into()),
                search: String::new(),
                sort: SortOrder::Recent,
                view: Some(ViewMode::List),
            })
        );
    }

    #[test]
    fn list_rejects_unknown_sort() {
        assert!(Args::try_parse_from(["themeshift", "list", "--sort", "size"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::parse_from(["themeshift", "toggle", "--no-color", "--store", "p.json"]);
        assert_eq!(args.command, Some(Command::Toggle));
        assert!(args.no_color);
        assert_eq!(args.store.as_deref(), Some(std::path::Path::new("p.json")));
    }

    #[test]
    fn export_defaults_to_settings_file_name() {
        let args = Args::parse_from(["themeshift", "export"]);
        assert_eq!(
            args.command,
            Some(Command::Export {
                path: "theme-settings.json".into()
            })
        );
    }

    #[test]
    fn field_takes_name_and_value() {
        let args = Args::parse_from(["themeshift", "field", "borderRadius", "12"]);
        assert_eq!(
            args.command,
            Some(Command::Field {
                name: "borderRadius".into(),
                value: "12".into()
            })
        );
    }

    #[test]
    fn field_accepts_negative_numbers() {
        let args = Args::try_parse_from(["themeshift", "field", "shadow", "-5"])
            .expect("negative value parses");
        assert_eq!(
            args.command,
            Some(Command::Field {
                name: "shadow".into(),
                value: "-5".into()
            })
        );
    }
}
