//! Story audit
//!
//! Walks a CMS story document and checks every block's `component` name
//! against the registry, so blocks that would render as placeholders show
//! up before a deploy.

use blockmap_registry::BlockResolver;
use serde::Serialize;
use serde_json::Value;

/// A block found in a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockRef {
    /// Declared block type
    pub component: String,
    /// Block `_uid`, when present
    pub uid: Option<String>,
    /// JSON pointer to the block
    pub pointer: String,
}

/// Block with the handle it resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBlock {
    /// The block
    #[serde(flatten)]
    pub block: BlockRef,
    /// Component handle
    pub handle: String,
}

/// Audit outcome
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Blocks with a registered component
    pub resolved: Vec<ResolvedBlock>,
    /// Blocks that would render as placeholders
    pub unknown: Vec<BlockRef>,
}

impl AuditReport {
    /// Total number of blocks seen
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.resolved.len() + self.unknown.len()
    }

    /// True if every block resolved
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        self.unknown.is_empty()
    }

    /// Human-readable report
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut out = format!(
            "Blocks: {} ({} resolved, {} unknown)\n",
            self.total(),
            self.resolved.len(),
            self.unknown.len()
        );
        for block in &self.unknown {
            out.push_str(&format!("  unknown '{}' at {}\n", block.component, block.pointer));
        }
        out
    }
}

/// Collect every block in document order
///
/// Object keys are walked in the order they appear in the source JSON.
#[must_use]
pub fn collect_blocks(story: &Value) -> Vec<BlockRef> {
    let mut blocks = Vec::new();
    walk(story, String::new(), &mut blocks);
    blocks
}

fn walk(value: &Value, pointer: String, blocks: &mut Vec<BlockRef>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(component)) = map.get("component") {
                blocks.push(BlockRef {
                    component: component.clone(),
                    uid: map.get("_uid").and_then(Value::as_str).map(str::to_string),
                    pointer: if pointer.is_empty() { "/".to_string() } else { pointer.clone() },
                });
            }
            for (key, child) in map {
                walk(child, format!("{}/{}", pointer, escape(key)), blocks);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                walk(child, format!("{}/{}", pointer, i), blocks);
            }
        }
        _ => {}
    }
}

// RFC 6901 token escaping
fn escape(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

/// Resolve every block of `story`
pub fn audit_story<R>(resolver: &R, story: &Value) -> AuditReport
where
    R: BlockResolver<String> + ?Sized,
{
    let mut report = AuditReport::default();

    for block in collect_blocks(story) {
        match resolver.resolve_block(&block.component) {
            Some(handle) => report.resolved.push(ResolvedBlock {
                handle: handle.clone(),
                block,
            }),
            None => {
                tracing::warn!("Block '{}' at {} has no component", block.component, block.pointer);
                report.unknown.push(block);
            }
        }
    }

    report
}
