//! Subcommand dispatch: printed output and exit outcome

use blockmap_cli::{cli, run, Outcome};
use blockmap_test_utils::{sample_story, write_catalog, COLLIDING_CATALOG_TOML, SAMPLE_CATALOG_TOML};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn run_cli(args: &[&str]) -> (anyhow::Result<Outcome>, String) {
    let matches = cli::command()
        .try_get_matches_from(std::iter::once("blockmap").chain(args.iter().copied()))
        .unwrap();

    let mut out = Vec::new();
    let result = run(&matches, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_resolve_fails_on_unknown_name() {
    let (result, output) = run_cli(&["resolve", "hero_teaser", "nav-item", "nav item"]);

    assert_eq!(result.unwrap(), Outcome::Failure);
    assert_eq!(
        output,
        "hero_teaser -> HeroTeaser\nnav-item -> NavItem\nnav item -> not found\n"
    );
}

#[test]
fn test_resolve_succeeds_when_all_known() {
    let (result, output) = run_cli(&["resolve", "booking-form", "footer"]);

    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(output, "booking-form -> BookingForm\nfooter -> Footer\n");
}

#[test]
fn test_resolve_uses_catalog_file() {
    let (_dir, path) = write_catalog("blocks.toml", SAMPLE_CATALOG_TOML);
    let (result, output) = run_cli(&["--catalog", path.to_str().unwrap(), "resolve", "booking_form"]);

    assert_eq!(result.unwrap(), Outcome::Failure);
    assert_eq!(output, "booking_form -> not found\n");
}

#[test]
fn test_audit_fails_on_unknown_block() {
    let (_dir, path) = write_catalog("story.json", &sample_story().to_string());
    let (result, output) = run_cli(&["audit", path.to_str().unwrap()]);

    assert_eq!(result.unwrap(), Outcome::Failure);
    assert!(output.starts_with("Blocks: 6 (5 resolved, 1 unknown)\n"));
    assert!(output.contains("unknown 'fleet_carousel' at /story/content/body/1/tabs/1"));
}

#[test]
fn test_audit_passes_clean_story() {
    let story = json!({ "component": "page", "body": [ { "component": "hero_teaser" } ] });
    let (_dir, path) = write_catalog("story.json", &story.to_string());
    let (result, output) = run_cli(&["audit", path.to_str().unwrap()]);

    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(output, "Blocks: 2 (2 resolved, 0 unknown)\n");
}

#[test]
fn test_audit_json_output() {
    let (_dir, path) = write_catalog("story.json", &sample_story().to_string());
    let (result, output) = run_cli(&["audit", "--json", path.to_str().unwrap()]);

    assert_eq!(result.unwrap(), Outcome::Failure);
    let report: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["unknown"][0]["uid"], "b2");
    assert_eq!(report["resolved"].as_array().unwrap().len(), 5);
}

#[test]
fn test_audit_rejects_invalid_story() {
    let (_dir, path) = write_catalog("story.json", "{ not json");
    let (result, _) = run_cli(&["audit", path.to_str().unwrap()]);

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("Invalid story JSON"));
}

#[test]
fn test_aliases_json_output() {
    let (_dir, path) = write_catalog("blocks.toml", SAMPLE_CATALOG_TOML);
    let (result, output) = run_cli(&["aliases", "--json", "--catalog", path.to_str().unwrap()]);

    assert_eq!(result.unwrap(), Outcome::Success);
    let rows: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        rows,
        json!([
            { "alias": "hero_teaser", "canonical": "hero_teaser", "handle": "HeroTeaser" },
            { "alias": "hero-teaser", "canonical": "hero_teaser", "handle": "HeroTeaser" },
            { "alias": "footer", "canonical": "footer", "handle": "Footer" },
            { "alias": "nav_item", "canonical": "nav_item", "handle": "NavItem" },
            { "alias": "nav-item", "canonical": "nav_item", "handle": "NavItem" }
        ])
    );
}

#[test]
fn test_aliases_text_output() {
    let (result, output) = run_cli(&["aliases"]);

    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(output.lines().count(), 46);
    let hero = output.lines().find(|line| line.starts_with("hero-teaser ")).unwrap();
    assert!(hero.contains("hero_teaser"));
    assert!(hero.ends_with("HeroTeaser"));
}

#[test]
fn test_check_passes_site_catalog() {
    let (result, output) = run_cli(&["check"]);

    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(output, "OK: 27 entries, 46 aliases, no collisions\n");
}

#[test]
fn test_check_fails_on_collision() {
    let (_dir, path) = write_catalog("blocks.toml", COLLIDING_CATALOG_TOML);
    let (result, output) = run_cli(&["check", "--catalog", path.to_str().unwrap()]);

    let message = format!("{:#}", result.unwrap_err());
    assert_eq!(message.matches("collides").count(), 1);
    assert!(message.contains("alias 'cta-banner' of 'cta-banner'"));
    assert!(output.is_empty());
}

#[test]
fn test_fail_fast_flag_rejects_colliding_catalog() {
    let (_dir, path) = write_catalog("blocks.toml", COLLIDING_CATALOG_TOML);

    let (result, _) = run_cli(&["resolve", "cta-banner", "--catalog", path.to_str().unwrap()]);
    assert_eq!(result.unwrap(), Outcome::Success);

    let (result, _) = run_cli(&["resolve", "cta-banner", "--fail-fast", "--catalog", path.to_str().unwrap()]);
    assert!(result.is_err());
}
