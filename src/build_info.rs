//! Compile-time build metadata for `themeshift --version`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `--version` block: version, commit, and build time.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("THEMESHIFT_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("THEMESHIFT_BUILD_TIMESTAMP")
);

/// Help trailer shown under `themeshift --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("THEMESHIFT_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("THEMESHIFT_BUILD_TIMESTAMP")
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_includes_expected_lines() {
        assert!(LONG_VERSION.starts_with(VERSION));
        assert!(LONG_VERSION.contains("\ncommit: "));
        assert!(LONG_VERSION.contains("\nbuilt: "));
    }
}
