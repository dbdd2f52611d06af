//! Binary-local application orchestration helpers.
//!
//! `main.rs` does the wiring; this module hosts startup and command handlers
//! so the entrypoint stays small.

pub(crate) mod commands;
pub(crate) mod startup;

#[cfg(test)]
pub(crate) mod testsupport;
