//! blockmap Catalog
//!
//! Declarative component tables and the configuration the registry is built
//! with.
//!
//! # Core Concepts
//!
//! - [`Catalog`]: ordered `(block name, component handle)` table
//! - [`RegistryConfig`]: collision policy and naming convention
//! - [`CatalogDocument`]: both of the above, parsed from TOML or JSON
//! - [`site::SITE_CATALOG`]: the site's built-in table
//!
//! # Example
//!
//! ```rust
//! use blockmap_catalog::CatalogDocument;
//!
//! let registry = CatalogDocument::site().build_registry().unwrap();
//! assert_eq!(registry.resolve("booking-form").map(String::as_str), Some("BookingForm"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod entry;
pub mod site;

// Re-exports
pub use config::RegistryConfig;
pub use document::{load_catalog, CatalogDocument, CatalogError};
pub use entry::{Catalog, CatalogEntry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
