//! Component registry and its builder
//!
//! [`RegistryBuilder`] collects registrations during startup and
//! [`ComponentRegistry`] serves read-only lookups afterwards.

use crate::alias::NamingConvention;
use crate::validation::{validate_name, CollisionPolicy, RegistryError};
use indexmap::IndexMap;

/// Alias slot: the handle plus the canonical name that claimed it
#[derive(Debug, Clone)]
struct Slot<H> {
    canonical: String,
    handle: H,
}

/// Mutable registry used while the catalog is being loaded
///
/// Each registration inserts the canonical name and, when it contains the
/// authoring separator, its alternate spelling. Call [`build`](Self::build)
/// once every entry is in.
#[derive(Debug, Clone)]
pub struct RegistryBuilder<H> {
    slots: IndexMap<String, Slot<H>>,
    naming: NamingConvention,
    policy: CollisionPolicy,
}

impl<H> RegistryBuilder<H> {
    /// Create empty builder with the default `_` to `-` convention
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
            naming: NamingConvention::default(),
            policy: CollisionPolicy::default(),
        }
    }

    /// With naming convention
    #[inline]
    #[must_use]
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// With collision policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of aliases registered so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if nothing has been registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Freeze into a read-only registry
    #[must_use]
    pub fn build(self) -> ComponentRegistry<H> {
        tracing::info!("Component registry built with {} aliases", self.slots.len());
        ComponentRegistry {
            slots: self.slots,
            naming: self.naming,
        }
    }
}

impl<H: Clone + PartialEq> RegistryBuilder<H> {
    /// Register a component under its canonical name and derived alias
    ///
    /// Under [`CollisionPolicy::FailFast`] a rejected registration leaves the
    /// builder unchanged.
    ///
    /// # Errors
    /// - [`RegistryError::EmptyName`] if `name` is empty
    /// - [`RegistryError::AliasCollision`] if the policy rejects an overwrite
    pub fn register(&mut self, name: impl Into<String>, handle: H) -> Result<(), RegistryError> {
        let name = name.into();
        validate_name(&name)?;

        let aliases = self.naming.aliases_for(&name);

        for alias in aliases.iter() {
            let existing = self
                .slots
                .get(alias)
                .map(|slot| (slot.canonical.as_str(), &slot.handle));
            self.policy.admit(alias, &name, &handle, existing)?;
        }

        for alias in aliases.iter() {
            tracing::debug!("Registered alias '{}' for '{}'", alias, name);
            self.slots.insert(
                alias.to_string(),
                Slot {
                    canonical: name.clone(),
                    handle: handle.clone(),
                },
            );
        }

        Ok(())
    }

    /// Register every `(name, handle)` pair in order
    ///
    /// Stops at the first failing entry; entries before it stay registered.
    ///
    /// # Errors
    /// Same as [`register`](Self::register)
    pub fn register_catalog<I, N>(&mut self, entries: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
    {
        for (name, handle) in entries {
            self.register(name, handle)?;
        }
        Ok(())
    }
}

impl<H> Default for RegistryBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only alias to component mapping
///
/// Lookups are exact and case-sensitive against the registered spellings.
///
/// # Example
/// ```
/// use blockmap_registry::ComponentRegistry;
///
/// let registry = ComponentRegistry::from_catalog([("hero_teaser", "HeroTeaser"), ("footer", "Footer")]).unwrap();
///
/// assert_eq!(registry.resolve("hero-teaser"), Some(&"HeroTeaser"));
/// assert_eq!(registry.resolve("footer-teaser"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ComponentRegistry<H> {
    slots: IndexMap<String, Slot<H>>,
    naming: NamingConvention,
}

impl<H> ComponentRegistry<H> {
    /// Resolve a block name to its component handle
    #[inline]
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&H> {
        self.slots.get(name).map(|slot| &slot.handle)
    }

    /// Resolve, treating a miss as an error
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownBlock`] if no alias matches
    pub fn lookup(&self, name: &str) -> Result<&H, RegistryError> {
        self.resolve(name).ok_or_else(|| RegistryError::UnknownBlock {
            name: name.to_string(),
        })
    }

    /// Check if alias is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Canonical name that registered `alias`
    #[inline]
    #[must_use]
    pub fn canonical_name(&self, alias: &str) -> Option<&str> {
        self.slots.get(alias).map(|slot| slot.canonical.as_str())
    }

    /// All aliases in first-registration order
    pub fn aliases(&self) -> impl Iterator<Item = AliasEntry<'_, H>> {
        self.slots.iter().map(|(alias, slot)| AliasEntry {
            alias,
            canonical: &slot.canonical,
            handle: &slot.handle,
        })
    }

    /// Naming convention aliases were derived with
    #[inline]
    #[must_use]
    pub fn naming(&self) -> NamingConvention {
        self.naming
    }

    /// Number of aliases
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<H: Clone + PartialEq> ComponentRegistry<H> {
    /// Build from a catalog with the default convention and policy
    ///
    /// # Errors
    /// Returns [`RegistryError::EmptyName`] for an empty catalog name
    pub fn from_catalog<I, N>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
    {
        let mut builder = RegistryBuilder::new();
        builder.register_catalog(entries)?;
        Ok(builder.build())
    }
}

/// Entry returned from [`ComponentRegistry::aliases`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasEntry<'a, H> {
    /// Registered spelling
    pub alias: &'a str,

    /// Canonical name that produced the alias
    pub canonical: &'a str,

    /// Component handle
    pub handle: &'a H,
}
