//! Catalog documents
//!
//! TOML (or JSON) files holding the registry configuration and the
//! component table:
//!
//! ```toml
//! [registry]
//! collision_policy = "fail_fast"
//!
//! [[component]]
//! name = "hero_teaser"
//! handle = "HeroTeaser"
//! ```

use crate::config::RegistryConfig;
use crate::entry::Catalog;
use crate::site;
use blockmap_registry::{ComponentRegistry, RegistryError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed catalog file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Registry settings
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Component table, in registration order
    #[serde(default, rename = "component", alias = "components")]
    pub components: Catalog,
}

impl CatalogDocument {
    /// Create document from config and catalog
    #[inline]
    #[must_use]
    pub fn new(registry: RegistryConfig, components: Catalog) -> Self {
        Self {
            registry,
            components,
        }
    }

    /// The site's built-in catalog with default settings
    #[must_use]
    pub fn site() -> Self {
        Self::new(RegistryConfig::default(), site::site_catalog())
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid or doesn't match the document shape
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(input)?)
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or doesn't match the document shape
    pub fn from_json_str(input: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Build the component registry
    ///
    /// # Errors
    /// Returns error if an entry has an empty name, or if the collision
    /// policy rejects an overwrite
    pub fn build_registry(&self) -> Result<ComponentRegistry<String>, CatalogError> {
        let mut builder = self.registry.builder();
        builder.register_catalog(self.components.pairs())?;
        Ok(builder.build())
    }
}

/// Load catalog document from disk
///
/// The format is picked from the file extension (`.toml` or `.json`).
///
/// # Errors
/// Returns error if the file can't be read, has an unknown extension, or
/// fails to parse
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CatalogDocument, CatalogError> {
    let path = path.as_ref();

    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Format::Toml,
        Some("json") => Format::Json,
        _ => {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let input = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = match format {
        Format::Toml => CatalogDocument::from_toml_str(&input)?,
        Format::Json => CatalogDocument::from_json_str(&input)?,
    };

    if document.components.is_empty() {
        tracing::warn!("Catalog {} has no components", path.display());
    }
    tracing::info!(
        "Loaded {} catalog entries from {}",
        document.components.len(),
        path.display()
    );

    Ok(document)
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Toml,
    Json,
}

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file couldn't be read
    #[error("failed to read catalog {}", path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported catalog format: {}", path.display())]
    UnsupportedFormat {
        /// File path
        path: PathBuf,
    },

    /// Invalid TOML document
    #[error("invalid TOML catalog")]
    InvalidToml(#[from] toml::de::Error),

    /// Invalid JSON document
    #[error("invalid JSON catalog")]
    InvalidJson(#[from] serde_json::Error),

    /// Registry rejected an entry
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
