//! Embeds commit and build time for `themeshift --version`.
//!
//! Either value can be pinned through the environment for reproducible
//! builds; missing git/date tooling degrades to `unknown`.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "THEMESHIFT_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "THEMESHIFT_BUILD_TIMESTAMP";

fn main() {
    watch_git_head();
    for var in [GIT_HASH_VAR, TIMESTAMP_VAR] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let commit = env::var(GIT_HASH_VAR).unwrap_or_else(|_| commit_label());
    let built = env::var(TIMESTAMP_VAR).unwrap_or_else(|_| utc_now());
    println!("cargo:rustc-env={GIT_HASH_VAR}={commit}");
    println!("cargo:rustc-env={TIMESTAMP_VAR}={built}");
}

fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let reference = fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_string));
    if let Some(reference) = reference {
        println!("cargo:rerun-if-changed=.git/{reference}");
    }
}

/// Short hash, suffixed with `-dirty` when the work tree has changes.
fn commit_label() -> String {
    let Some(hash) = capture("git", &["rev-parse", "--short=12", "HEAD"]) else {
        return "unknown".to_string();
    };
    match capture("git", &["status", "--porcelain", "--untracked-files=no"]) {
        Some(_) => format!("{hash}-dirty"),
        None => hash,
    }
}

fn utc_now() -> String {
    capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        format!("unix:{secs}")
    })
}

/// Trimmed stdout of a successful command; `None` for failure or no output.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
