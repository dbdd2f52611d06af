//! Copying theme colors to the system clipboard.
//!
//! The terminal owns the clipboard, so copies go out as an OSC 52 sequence.

use base64::Engine;
use std::io::{self, Write};

use crate::catalog::{ThemeCatalog, ThemeDefinition};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// Writes `ESC ] 52 ; c ; <base64> BEL` to the wrapped stream.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{encoded}\x07")?;
        self.out.flush()
    }
}

/// Keeps the last copied text; used where no terminal is attached.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// The theme's color map as pretty JSON.
pub fn colors_json(theme: &ThemeDefinition) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&theme.colors)
}

/// Copy the colors of catalog entry `key`.
///
/// Returns `Ok(false)` and copies nothing when the key is unknown.
pub fn copy_theme_colors(
    catalog: &ThemeCatalog,
    key: &str,
    clipboard: &mut dyn Clipboard,
) -> io::Result<bool> {
    let Some(theme) = catalog.get(key) else {
        return Ok(false);
    };
    let json = colors_json(theme).map_err(io::Error::other)?;
    clipboard.copy(&json)?;
    Ok(true)
}
