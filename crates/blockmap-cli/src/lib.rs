//! blockmap CLI
//!
//! Inspect a component catalog, resolve block names and audit CMS stories
//! against it.
//!
//! # Subcommands
//!
//! - `aliases [--json]`: every alias and its component
//! - `resolve <name>...`: per-name lookup, exit code 1 on any miss
//! - `audit <story.json> [--json]`: blocks that would render as placeholders
//! - `check`: collision check with the fail-fast policy

#![warn(missing_docs)]

pub mod audit;
pub mod cli;
pub mod commands;
pub mod run;
pub mod tracing_setup;

pub use audit::{audit_story, collect_blocks, AuditReport, BlockRef};
pub use run::{run, Outcome};
pub use commands::{alias_rows, check, load_document, load_registry, resolve_names, GlobalOptions};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
