use blockmap_registry::{alternate_spelling, CollisionPolicy, ComponentRegistry, RegistryBuilder};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn separated_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(word(), 2..5).prop_map(|words| words.join("_"))
}

proptest! {
    #[test]
    fn prop_single_word_registers_one_alias(name in word(), handle in any::<u32>()) {
        let registry = ComponentRegistry::from_catalog([(name.clone(), handle)]).unwrap();

        prop_assert_eq!(registry.resolve(&name), Some(&handle));
        prop_assert_eq!(registry.len(), 1);
    }

    #[test]
    fn prop_separated_name_resolves_both_spellings(name in separated_name(), handle in any::<u32>()) {
        let registry = ComponentRegistry::from_catalog([(name.clone(), handle)]).unwrap();
        let alternate = alternate_spelling(&name).unwrap();

        prop_assert!(!alternate.contains('_'));
        prop_assert_eq!(alternate.matches('-').count(), name.matches('_').count());
        prop_assert_eq!(registry.resolve(&name), Some(&handle));
        prop_assert_eq!(registry.resolve(&alternate), Some(&handle));
        prop_assert_eq!(registry.len(), 2);
    }

    #[test]
    fn prop_register_is_idempotent(name in separated_name(), handle in any::<u32>()) {
        let mut once = RegistryBuilder::new().with_policy(CollisionPolicy::FailFast);
        once.register(name.clone(), handle).unwrap();

        let mut twice = RegistryBuilder::new().with_policy(CollisionPolicy::FailFast);
        twice.register(name.clone(), handle).unwrap();
        twice.register(name.clone(), handle).unwrap();

        let once: Vec<(String, u32)> = once.build().aliases().map(|e| (e.alias.to_string(), *e.handle)).collect();
        let twice: Vec<(String, u32)> = twice.build().aliases().map(|e| (e.alias.to_string(), *e.handle)).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_later_entry_wins_collision(name in separated_name(), first in any::<u32>(), second in any::<u32>()) {
        let hyphenated = alternate_spelling(&name).unwrap();
        let registry = ComponentRegistry::from_catalog([(name.clone(), first), (hyphenated.clone(), second)]).unwrap();

        prop_assert_eq!(registry.resolve(&hyphenated), Some(&second));
        prop_assert_eq!(registry.resolve(&name), Some(&first));
    }

    #[test]
    fn prop_unregistered_name_is_not_found(
        names in proptest::collection::vec(separated_name(), 1..8),
        probe in "[A-Z ]{1,12}",
    ) {
        let registry = ComponentRegistry::from_catalog(names.into_iter().map(|n| (n, 0u8))).unwrap();

        prop_assert!(registry.resolve(&probe).is_none());
        prop_assert!(registry.lookup(&probe).is_err());
    }
}

#[test]
fn test_site_scenarios() {
    let registry = ComponentRegistry::from_catalog([("hero_teaser", "H"), ("footer", "F")]).unwrap();
    assert_eq!(registry.resolve("hero_teaser"), Some(&"H"));
    assert_eq!(registry.resolve("hero-teaser"), Some(&"H"));
    assert_eq!(registry.resolve("footer"), Some(&"F"));
    assert_eq!(registry.resolve("footer-teaser"), None);

    let registry = ComponentRegistry::from_catalog([("navigation_item", "A"), ("navigation_item", "B")]).unwrap();
    assert_eq!(registry.resolve("navigation_item"), Some(&"B"));
    assert_eq!(registry.resolve("navigation-item"), Some(&"B"));

    let registry = ComponentRegistry::from_catalog([("nav_item", "X")]).unwrap();
    assert_eq!(registry.resolve("nav_item"), Some(&"X"));
    assert_eq!(registry.resolve("nav-item"), Some(&"X"));
    assert_eq!(registry.resolve("nav item"), None);
}

#[test]
fn test_fail_fast_reports_both_names() {
    let mut builder = RegistryBuilder::new().with_policy(CollisionPolicy::FailFast);
    builder.register("cta_banner", 1).unwrap();

    let err = builder.register("cta-banner", 2).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("cta_banner"));
    assert!(message.contains("cta-banner"));
}
