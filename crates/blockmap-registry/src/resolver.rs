//! Resolver seam for the rendering layer

use crate::registry::ComponentRegistry;
use std::sync::Arc;

/// Lookup interface the template resolver depends on
///
/// The rendering layer receives a `&dyn BlockResolver<H>` (or a generic
/// `R: BlockResolver<H>`) instead of reaching for global state.
pub trait BlockResolver<H> {
    /// Resolve a block's declared type name
    fn resolve_block(&self, name: &str) -> Option<&H>;

    /// Resolve, falling back to a placeholder for unknown block types
    fn resolve_or<'a>(&'a self, name: &str, placeholder: &'a H) -> &'a H {
        match self.resolve_block(name) {
            Some(handle) => handle,
            None => {
                tracing::debug!("Unknown block type '{}', rendering placeholder", name);
                placeholder
            }
        }
    }
}

impl<H> BlockResolver<H> for ComponentRegistry<H> {
    #[inline]
    fn resolve_block(&self, name: &str) -> Option<&H> {
        self.resolve(name)
    }
}

impl<H, R: BlockResolver<H> + ?Sized> BlockResolver<H> for Arc<R> {
    #[inline]
    fn resolve_block(&self, name: &str) -> Option<&H> {
        (**self).resolve_block(name)
    }
}
