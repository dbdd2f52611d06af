//! Terminal renderer for status lines and the theme gallery.
//!
//! Status output (sections, fields, warnings) goes to stderr; gallery rows
//! and exported payloads go to stdout so they can be piped.

use crossterm::style::{Color, Stylize};
use crossterm::terminal;

use super::swatch::swatch;
use crate::catalog::ThemeDefinition;
use crate::gallery::ViewMode;

const INDENT: &str = "  ";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const GLYPH_SECTION_BULLET: &str = "•";
const MARK_ACTIVE: char = '*';
const MARK_FAVORITE: char = '+';
const GRID_CELL_WIDTH: usize = 28;
const FALLBACK_COLUMNS: usize = 80;
const LIST_KEY_WIDTH: usize = 14;

/// Color slots previewed next to each gallery entry.
pub const PREVIEW_SLOTS: [&str; 4] = ["background", "text", "primary", "secondary"];

/// One gallery row.
#[derive(Debug, Clone, Copy)]
pub struct GalleryEntry<'a> {
    /// 1-based catalog position, accepted by `set`.
    pub index: usize,
    pub key: &'a str,
    pub theme: &'a ThemeDefinition,
    pub active: bool,
    pub favorite: bool,
}

impl GalleryEntry<'_> {
    fn markers(&self) -> String {
        let active = if self.active { MARK_ACTIVE } else { ' ' };
        let favorite = if self.favorite { MARK_FAVORITE } else { ' ' };
        format!("{active}{favorite}")
    }
}

/// Injectable rendering interface used by command handlers.
///
/// `Renderer` is the terminal implementation; tests substitute a recording
/// sink without touching stderr.
pub trait RenderSink {
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render a key/value row whose value is a color, previewed as a swatch.
    fn color_field(&self, key: &str, value: &str);
    /// Render additional detail text.
    fn detail(&self, text: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render gallery entries in the given layout.
    fn gallery(&self, entries: &[GalleryEntry<'_>], view: ViewMode);
    /// Render a raw payload destined for stdout.
    fn output(&self, text: &str);
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn terminal_columns() -> usize {
        terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(FALLBACK_COLUMNS)
    }
}

impl RenderSink for Renderer {
    fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::Cyan).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{INDENT}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White),
            );
        } else {
            eprintln!("{INDENT}{key}: {value}");
        }
    }

    fn color_field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{INDENT}{} {} {value}",
                format!("{key}:").with(Color::DarkGrey),
                swatch(value, true),
            );
        } else {
            eprintln!("{INDENT}{key}: {value}");
        }
    }

    fn detail(&self, text: &str) {
        if self.color {
            eprintln!("{INDENT}{}", text.with(Color::Grey));
        } else {
            eprintln!("{INDENT}{text}");
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    fn gallery(&self, entries: &[GalleryEntry<'_>], view: ViewMode) {
        match view {
            ViewMode::List => {
                for entry in entries {
                    println!("{}", list_line(entry, self.color));
                }
            }
            ViewMode::Grid => {
                for row in grid_lines(entries, Self::terminal_columns(), self.color) {
                    println!("{row}");
                }
            }
        }
    }

    fn output(&self, text: &str) {
        println!("{text}");
    }
}

/// `*+  3. ██████████ light3         Paper`
pub fn list_line(entry: &GalleryEntry<'_>, color: bool) -> String {
    let swatches: Vec<String> = PREVIEW_SLOTS
        .iter()
        .filter_map(|slot| entry.theme.color(slot))
        .map(|value| swatch(value, color))
        .collect();
    format!(
        "{} {:>3}. {} {:<width$} {}",
        entry.markers(),
        entry.index,
        swatches.join(""),
        entry.key,
        entry.theme.name,
        width = LIST_KEY_WIDTH,
    )
}

/// Number of grid cells per terminal row.
pub fn grid_columns(width: usize) -> usize {
    (width / GRID_CELL_WIDTH).max(1)
}

/// Gallery packed into fixed-width cells, `grid_columns(width)` per line.
pub fn grid_lines(entries: &[GalleryEntry<'_>], width: usize, color: bool) -> Vec<String> {
    entries
        .chunks(grid_columns(width))
        .map(|chunk| {
            chunk
                .iter()
                .map(|entry| grid_cell(entry, color))
                .collect::<Vec<_>>()
                .join("")
                .trim_end()
                .to_string()
        })
        .collect()
}

fn grid_cell(entry: &GalleryEntry<'_>, color: bool) -> String {
    // Swatch is two cells plus a space when colored.
    let label_width = if color {
        GRID_CELL_WIDTH - 3
    } else {
        GRID_CELL_WIDTH
    };
    let label = truncate(
        &format!("{}{}. {}", entry.markers(), entry.index, entry.theme.name),
        label_width - 1,
    );
    let padded = format!("{label:<label_width$}");
    match entry.theme.color("background") {
        Some(background) if color => format!("{} {padded}", swatch(background, true)),
        _ => padded,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('~');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::theme;

    fn entry<'a>(key: &'a str, theme: &'a ThemeDefinition) -> GalleryEntry<'a> {
        GalleryEntry {
            index: 1,
            key,
            theme,
            active: false,
            favorite: false,
        }
    }

    #[test]
    fn list_line_plain_shows_markers_key_and_name() {
        let snow = theme("Snow", "#ffffff");
        let mut row = entry("light1", &snow);
        row.active = true;
        row.favorite = true;
        let line = list_line(&row, false);
        assert!(line.starts_with("*+   1. "), "got: {line}");
        assert!(line.contains("[#ffffff][#111111][#3366ff][#eeeeee]"));
        assert!(line.contains("light1"));
        assert!(line.ends_with("Snow"));
    }

    #[test]
    fn grid_columns_never_zero() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(GRID_CELL_WIDTH * 3 + 5), 3);
    }

    #[test]
    fn grid_lines_pack_cells_per_row() {
        let snow = theme("Snow", "#ffffff");
        let rows: Vec<GalleryEntry<'_>> = (0..5).map(|_| entry("light1", &snow)).collect();
        let lines = grid_lines(&rows, GRID_CELL_WIDTH * 2, false);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches("Snow").count(), 2);
        assert_eq!(lines[2].matches("Snow").count(), 1);
    }

    #[test]
    fn long_names_are_truncated_in_grid() {
        let long = theme(&"x".repeat(60), "#000000");
        let lines = grid_lines(&[entry("dark1", &long)], 80, false);
        assert!(lines[0].chars().count() <= GRID_CELL_WIDTH);
        assert!(lines[0].ends_with('~'));
    }
}
