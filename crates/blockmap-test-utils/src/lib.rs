//! Testing utilities for blockmap workspace
//!
//! Shared test helpers, fixtures, and assertions.

#![allow(missing_docs)]

use blockmap_catalog::CatalogDocument;
use blockmap_registry::ComponentRegistry;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SAMPLE_CATALOG_TOML: &str = r#"
[registry]
collision_policy = "last_write_wins"

[[component]]
name = "hero_teaser"
handle = "HeroTeaser"

[[component]]
name = "footer"
handle = "Footer"

[[component]]
name = "nav_item"
handle = "NavItem"
"#;

pub const COLLIDING_CATALOG_TOML: &str = r#"
[[component]]
name = "cta_banner"
handle = "CtaBanner"

[[component]]
name = "cta-banner"
handle = "PromoBanner"
"#;

/// Write `contents` to `file_name` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_catalog(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file_name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

pub fn site_registry() -> ComponentRegistry<String> {
    CatalogDocument::site().build_registry().unwrap()
}

pub fn sample_registry() -> ComponentRegistry<String> {
    CatalogDocument::from_toml_str(SAMPLE_CATALOG_TOML)
        .unwrap()
        .build_registry()
        .unwrap()
}

/// CMS story with nested blocks; `fleet_carousel` is not in the site catalog.
pub fn sample_story() -> Value {
    json!({
        "story": {
            "name": "Home",
            "content": {
                "_uid": "root",
                "component": "page",
                "body": [
                    { "_uid": "a1", "component": "hero_teaser", "headline": "Busvermietung" },
                    {
                        "_uid": "a2",
                        "component": "tab_module",
                        "tabs": [
                            { "_uid": "b1", "component": "tab_item", "title": "Reisebus" },
                            { "_uid": "b2", "component": "fleet_carousel", "title": "Flotte" }
                        ]
                    },
                    { "_uid": "a3", "component": "cta-button", "label": "Anfrage" }
                ]
            }
        }
    })
}
