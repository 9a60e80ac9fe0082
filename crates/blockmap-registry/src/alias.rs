//! Alias derivation for component names
//!
//! Provides [`NamingConvention`] and [`alternate_spelling`] for turning an
//! authoring-side block name (`hero_teaser`) into the spelling the template
//! resolver looks up (`hero-teaser`).

use serde::{Deserialize, Serialize};

/// Separator used by the content-authoring side
pub const AUTHORING_SEPARATOR: char = '_';

/// Separator the template resolver expects
pub const RESOLVER_SEPARATOR: char = '-';

/// Word-separator pair used to derive alternate spellings
///
/// The derivation is a full-string transform: every occurrence of
/// `authoring` is replaced by `resolver` at once, producing exactly one
/// alternate spelling regardless of how many separators the name holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamingConvention {
    /// Separator found in canonical (authoring) names
    pub authoring: char,

    /// Separator the resolver uses when looking names up
    pub resolver: char,
}

impl NamingConvention {
    /// Create convention from a separator pair
    #[inline]
    #[must_use]
    pub const fn new(authoring: char, resolver: char) -> Self {
        Self {
            authoring,
            resolver,
        }
    }

    /// Derive the alternate spelling of `name`
    ///
    /// Returns `None` when `name` has no authoring separator, or when both
    /// separators are the same character.
    #[must_use]
    pub fn alternate_spelling(&self, name: &str) -> Option<String> {
        if self.authoring == self.resolver || !name.contains(self.authoring) {
            return None;
        }

        let mut buf = [0u8; 4];
        let to = self.resolver.encode_utf8(&mut buf);
        Some(name.replace(self.authoring, to))
    }

    /// Every alias `name` is registered under
    #[must_use]
    pub fn aliases_for(&self, name: &str) -> Aliases {
        Aliases {
            canonical: name.to_string(),
            alternate: self.alternate_spelling(name),
        }
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new(AUTHORING_SEPARATOR, RESOLVER_SEPARATOR)
    }
}

/// Derive the alternate spelling using the default `_` to `-` convention
///
/// # Example
/// ```
/// use blockmap_registry::alternate_spelling;
///
/// assert_eq!(alternate_spelling("image_text_section").as_deref(), Some("image-text-section"));
/// assert_eq!(alternate_spelling("footer"), None);
/// ```
#[inline]
#[must_use]
pub fn alternate_spelling(name: &str) -> Option<String> {
    NamingConvention::default().alternate_spelling(name)
}

/// Aliases derived from one canonical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aliases {
    canonical: String,
    alternate: Option<String>,
}

impl Aliases {
    /// The canonical name itself
    #[inline]
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Derived alternate spelling, if the name had separators
    #[inline]
    #[must_use]
    pub fn alternate(&self) -> Option<&str> {
        self.alternate.as_deref()
    }

    /// Canonical name first, then the alternate
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.alternate.as_deref())
    }

    /// Number of aliases (1 or 2)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        1 + usize::from(self.alternate.is_some())
    }

    /// Always false; a canonical name is its own alias
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
