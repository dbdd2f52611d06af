//! Subcommand handlers.
//!
//! Handlers render through `RenderSink` and return a user-facing message on
//! failure; `main` prints it and exits non-zero.

/// `list` and `recent`.
pub(crate) mod gallery;
/// `show`, `field`, `export`, `import`.
pub(crate) mod settings;
/// `set`, `toggle`, `favorite`, `copy`.
pub(crate) mod theme;

/// Result type shared by all handlers.
pub(crate) type CommandResult = Result<(), String>;
