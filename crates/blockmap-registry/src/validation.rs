//! Collision handling and registry errors
//!
//! Decides what happens when a registration would overwrite an alias that
//! already points at a different component.

use serde::{Deserialize, Serialize};

/// What to do when an alias is about to be overwritten with a different handle
///
/// Re-registering an equal handle is never a collision, under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Later registration wins; a warning is logged
    #[default]
    LastWriteWins,

    /// Registration fails with [`RegistryError::AliasCollision`]
    FailFast,
}

impl CollisionPolicy {
    /// Check whether `incoming` may take `alias` over from `existing`
    ///
    /// `existing` is the canonical name and handle currently holding the alias.
    ///
    /// # Errors
    /// Returns [`RegistryError::AliasCollision`] under [`CollisionPolicy::FailFast`]
    /// when the handles differ.
    pub fn admit<H: PartialEq>(
        self,
        alias: &str,
        incoming: &str,
        handle: &H,
        existing: Option<(&str, &H)>,
    ) -> Result<(), RegistryError> {
        let Some((existing_name, existing_handle)) = existing else {
            return Ok(());
        };

        if existing_handle == handle {
            return Ok(());
        }

        match self {
            Self::LastWriteWins => {
                tracing::warn!(
                    "Alias '{}' of '{}' overwrites component registered by '{}'",
                    alias,
                    incoming,
                    existing_name
                );
                Ok(())
            }
            Self::FailFast => Err(RegistryError::AliasCollision {
                alias: alias.to_string(),
                existing: existing_name.to_string(),
                incoming: incoming.to_string(),
            }),
        }
    }
}

/// Check that a canonical name is usable
///
/// # Errors
/// Returns [`RegistryError::EmptyName`] for an empty name
#[inline]
pub fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    Ok(())
}

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Canonical name was empty
    #[error("component name must not be empty")]
    EmptyName,

    /// Two catalog entries derive the same alias for different handles
    #[error("alias '{alias}' of '{incoming}' collides with component registered by '{existing}'")]
    AliasCollision {
        /// The contested alias
        alias: String,
        /// Canonical name that registered the alias first
        existing: String,
        /// Canonical name being registered
        incoming: String,
    },

    /// No alias matches the requested block name
    #[error("unknown block type: {name}")]
    UnknownBlock {
        /// Name the resolver asked for
        name: String,
    },
}

impl RegistryError {
    /// Check if error is a startup configuration defect
    ///
    /// Unknown blocks are expected at render time; everything else should
    /// stop startup.
    #[inline]
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::UnknownBlock { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacant_alias_is_admitted() {
        for policy in [CollisionPolicy::LastWriteWins, CollisionPolicy::FailFast] {
            assert!(policy.admit("hero", "hero", &1, None).is_ok());
        }
    }

    #[test]
    fn equal_handle_is_not_a_collision() {
        let result = CollisionPolicy::FailFast.admit("nav-item", "nav-item", &7, Some(("nav_item", &7)));
        assert!(result.is_ok());
    }

    #[test]
    fn last_write_wins_admits_different_handle() {
        let result =
            CollisionPolicy::LastWriteWins.admit("hero-teaser", "hero-teaser", &2, Some(("hero_teaser", &1)));
        assert!(result.is_ok());
    }

    #[test]
    fn fail_fast_rejects_different_handle() {
        let result =
            CollisionPolicy::FailFast.admit("hero-teaser", "hero-teaser", &2, Some(("hero_teaser", &1)));

        assert_eq!(
            result,
            Err(RegistryError::AliasCollision {
                alias: "hero-teaser".to_string(),
                existing: "hero_teaser".to_string(),
                incoming: "hero-teaser".to_string(),
            })
        );
    }

    #[test]
    fn default_policy_is_last_write_wins() {
        assert_eq!(CollisionPolicy::default(), CollisionPolicy::LastWriteWins);
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(validate_name(""), Err(RegistryError::EmptyName));
        assert!(validate_name("page").is_ok());
    }

    #[test]
    fn unknown_block_is_not_a_configuration_error() {
        let err = RegistryError::UnknownBlock {
            name: "footer-teaser".to_string(),
        };
        assert!(!err.is_configuration_error());
        assert!(RegistryError::EmptyName.is_configuration_error());
    }
}
