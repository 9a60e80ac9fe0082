//! Subcommand implementations
//!
//! Each function returns data; printing and exit outcomes live in `run.rs`.

use anyhow::{Context, Result};
use blockmap_catalog::{load_catalog, CatalogDocument};
use blockmap_registry::{BlockResolver, CollisionPolicy, ComponentRegistry};
use serde::Serialize;
use std::path::Path;

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions<'a> {
    /// Catalog file; the built-in site catalog when `None`
    pub catalog: Option<&'a Path>,
    /// Force [`CollisionPolicy::FailFast`]
    pub fail_fast: bool,
}

/// Load the catalog document and apply CLI overrides
///
/// # Errors
/// Returns error if the catalog file can't be loaded
pub fn load_document(options: &GlobalOptions<'_>) -> Result<CatalogDocument> {
    let mut document = match options.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => {
            tracing::debug!("Using built-in site catalog");
            CatalogDocument::site()
        }
    };

    if options.fail_fast {
        document.registry.collision_policy = CollisionPolicy::FailFast;
    }

    Ok(document)
}

/// Load the catalog and build its registry
///
/// # Errors
/// Returns error if loading fails or the registry rejects an entry
pub fn load_registry(options: &GlobalOptions<'_>) -> Result<ComponentRegistry<String>> {
    let document = load_document(options)?;
    document
        .build_registry()
        .context("Failed to build component registry")
}

/// Row of the `aliases` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasRow {
    /// Registered spelling
    pub alias: String,
    /// Canonical name that produced it
    pub canonical: String,
    /// Component handle
    pub handle: String,
}

/// Every alias in registration order
#[must_use]
pub fn alias_rows(registry: &ComponentRegistry<String>) -> Vec<AliasRow> {
    registry
        .aliases()
        .map(|entry| AliasRow {
            alias: entry.alias.to_string(),
            canonical: entry.canonical.to_string(),
            handle: entry.handle.clone(),
        })
        .collect()
}

/// Resolve each name; `None` for unknown names
pub fn resolve_names<R, S>(resolver: &R, names: &[S]) -> Vec<(String, Option<String>)>
where
    R: BlockResolver<String> + ?Sized,
    S: AsRef<str>,
{
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), resolver.resolve_block(name).cloned())
        })
        .collect()
}

/// Outcome of `check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Catalog entries registered
    pub entries: usize,
    /// Aliases in the finished registry
    pub aliases: usize,
}

/// Build the registry with [`CollisionPolicy::FailFast`]
///
/// # Errors
/// Returns the first collision or invalid entry
pub fn check(document: &CatalogDocument) -> Result<CheckSummary> {
    let mut strict = document.clone();
    strict.registry.collision_policy = CollisionPolicy::FailFast;

    let registry = strict
        .build_registry()
        .context("Catalog check failed")?;

    Ok(CheckSummary {
        entries: document.components.len(),
        aliases: registry.len(),
    })
}
