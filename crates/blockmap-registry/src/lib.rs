//! blockmap Component Registry
//!
//! Maps CMS content-block names onto UI component handles under every
//! spelling the template resolver may use.
//!
//! # Overview
//!
//! The registry provides:
//! - **NamingConvention**: derives the resolver spelling (`hero-teaser`) from
//!   the authoring name (`hero_teaser`)
//! - **RegistryBuilder**: startup-time registration with a [`CollisionPolicy`]
//! - **ComponentRegistry**: immutable, exact-match lookup
//! - **BlockResolver**: the seam the rendering layer queries
//!
//! # Example
//!
//! ```rust
//! use blockmap_registry::{CollisionPolicy, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new().with_policy(CollisionPolicy::FailFast);
//! builder.register_catalog([("hero_teaser", "HeroTeaser"), ("footer", "Footer")]).unwrap();
//! let registry = builder.build();
//!
//! assert_eq!(registry.resolve("hero-teaser"), Some(&"HeroTeaser"));
//! assert_eq!(registry.resolve("hero_teaser"), Some(&"HeroTeaser"));
//! assert!(registry.resolve("footer-teaser").is_none());
//! ```

#![warn(missing_docs)]

pub mod alias;
pub mod registry;
pub mod resolver;
pub mod validation;

// Re-exports
pub use alias::{alternate_spelling, Aliases, NamingConvention, AUTHORING_SEPARATOR, RESOLVER_SEPARATOR};
pub use registry::{AliasEntry, ComponentRegistry, RegistryBuilder};
pub use resolver::BlockResolver;
pub use validation::{CollisionPolicy, RegistryError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for registry setup and lookup
    pub use crate::{
        BlockResolver, CollisionPolicy, ComponentRegistry, NamingConvention, RegistryBuilder,
        RegistryError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
