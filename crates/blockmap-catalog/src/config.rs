//! Registry configuration
//!
//! The `[registry]` table of a catalog document.

use blockmap_registry::{
    CollisionPolicy, NamingConvention, RegistryBuilder, AUTHORING_SEPARATOR, RESOLVER_SEPARATOR,
};
use serde::{Deserialize, Serialize};

/// Registry configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// What to do when an alias would be overwritten
    pub collision_policy: CollisionPolicy,
    /// Separator used in CMS block names
    pub authoring_separator: char,
    /// Separator the template resolver looks names up with
    pub resolver_separator: char,
}

impl RegistryConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With collision policy
    #[inline]
    #[must_use]
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// With naming convention
    #[inline]
    #[must_use]
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.authoring_separator = naming.authoring;
        self.resolver_separator = naming.resolver;
        self
    }

    /// Naming convention described by this config
    #[inline]
    #[must_use]
    pub fn naming(&self) -> NamingConvention {
        NamingConvention::new(self.authoring_separator, self.resolver_separator)
    }

    /// Empty builder configured from this config
    #[must_use]
    pub fn builder<H>(&self) -> RegistryBuilder<H> {
        RegistryBuilder::new()
            .with_naming(self.naming())
            .with_policy(self.collision_policy)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            collision_policy: CollisionPolicy::default(),
            authoring_separator: AUTHORING_SEPARATOR,
            resolver_separator: RESOLVER_SEPARATOR,
        }
    }
}
