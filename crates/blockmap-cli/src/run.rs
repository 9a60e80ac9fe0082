//! Subcommand dispatch
//!
//! Output goes to the supplied writer; `main.rs` turns the [`Outcome`] into
//! the process exit code.

use crate::audit::audit_story;
use crate::commands::{alias_rows, check, load_document, load_registry, resolve_names, GlobalOptions};
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Result of a subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit code 0
    Success,
    /// Exit code 1: unknown names, unknown blocks
    Failure,
}

impl Outcome {
    fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run the subcommand in `matches`, writing its output to `out`
///
/// # Errors
/// Returns error if the catalog or story can't be loaded, the registry
/// rejects an entry, or `check` finds a collision
pub fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<Outcome> {
    let options = GlobalOptions {
        catalog: matches.get_one::<PathBuf>("catalog").map(PathBuf::as_path),
        fail_fast: matches.get_flag("fail-fast"),
    };

    match matches.subcommand() {
        Some(("aliases", args)) => {
            let registry = load_registry(&options)?;
            let rows = alias_rows(&registry);

            if args.get_flag("json") {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                for row in &rows {
                    writeln!(out, "{:<28} {:<28} {}", row.alias, row.canonical, row.handle)?;
                }
            }
            Ok(Outcome::Success)
        }
        Some(("resolve", args)) => {
            let registry = load_registry(&options)?;
            let names: Vec<&String> = args.get_many::<String>("names").into_iter().flatten().collect();

            let mut missing = false;
            for (name, handle) in resolve_names(&registry, &names[..]) {
                match handle {
                    Some(handle) => writeln!(out, "{name} -> {handle}")?,
                    None => {
                        missing = true;
                        writeln!(out, "{name} -> not found")?;
                    }
                }
            }
            Ok(Outcome::from_passed(!missing))
        }
        Some(("audit", args)) => {
            let registry = load_registry(&options)?;
            let path = args
                .get_one::<PathBuf>("story")
                .context("missing story path")?;

            let input = fs::read_to_string(path)
                .with_context(|| format!("Failed to read story {}", path.display()))?;
            let story: serde_json::Value = serde_json::from_str(&input)
                .with_context(|| format!("Invalid story JSON in {}", path.display()))?;

            let report = audit_story(&registry, &story);
            if args.get_flag("json") {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", report.generate_text())?;
            }
            Ok(Outcome::from_passed(report.passed()))
        }
        Some(("check", _)) => {
            let document = load_document(&options)?;
            let summary = check(&document)?;
            writeln!(
                out,
                "OK: {} entries, {} aliases, no collisions",
                summary.entries, summary.aliases
            )?;
            Ok(Outcome::Success)
        }
        _ => Ok(Outcome::Success),
    }
}
