use pretty_assertions::assert_eq;
use std::time::Duration;
use vendorverse_animation::Easing;
use vendorverse_core::{MemoryDocument, MemoryStore};
use vendorverse_theme::{ThemeConfig, ThemeError, ThemeManager, ThemeTarget};

#[test]
fn defaults_match_the_storefront_markup() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "vendorverse_theme");
    assert_eq!(config.theme_attribute, "data-theme");
    assert_eq!(config.target, ThemeTarget::Root);
    assert_eq!(config.switcher_id, "theme-switcher");
    assert_eq!(config.button_attribute, "data-theme-btn");
    assert_eq!(config.active_class, "active");
    assert_eq!(config.logo_id, "dynamic-logo");
    assert_eq!(config.timing.total(), Duration::from_millis(400));
    assert!(config.validate().is_ok());
}

#[test]
fn empty_document_is_the_default_config() {
    assert_eq!(ThemeConfig::from_toml_str("").unwrap(), ThemeConfig::default());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = ThemeConfig::from_toml_str(
        r#"
        storage_key = "shop.theme"
        target = "body"

        [timing]
        commit_delay_ms = 80

        [[timing.logo_transitions]]
        property = "opacity"
        duration_ms = 150
        easing = "ease-in-out"
        "#,
    )
    .unwrap();

    assert_eq!(config.storage_key, "shop.theme");
    assert_eq!(config.target, ThemeTarget::Body);
    assert_eq!(config.logo_id, "dynamic-logo");
    assert_eq!(config.timing.commit_delay_ms, 80);
    assert_eq!(config.timing.settle_delay_ms, 300);
    assert_eq!(config.timing.logo_transitions.len(), 1);
    assert_eq!(config.timing.logo_transitions[0].easing, Easing::EaseInOut);
    assert_eq!(config.timing.target_transitions.len(), 2);
}

#[test]
fn toml_round_trip() {
    let config = ThemeConfig::default();
    let text = config.to_toml().unwrap();
    assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn rejects_empty_hooks() {
    let err = ThemeConfig::from_toml_str("storage_key = \"  \"").unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(ref msg) if msg.contains("storage_key")));
}

#[test]
fn rejects_settle_before_fade_in_ends() {
    let err = ThemeConfig::from_toml_str("[timing]\nsettle_delay_ms = 100").unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
}

#[test]
fn rejects_malformed_toml() {
    let err = ThemeConfig::from_toml_str("target = \"sidebar\"").unwrap_err();
    assert!(matches!(err, ThemeError::ConfigParse(_)));
}

#[test]
fn custom_timing_drives_the_manager() {
    let config = ThemeConfig::from_toml_str(
        "[timing]\ncommit_delay_ms = 40\nfade_in_delay_ms = 10\nsettle_delay_ms = 250",
    )
    .unwrap();
    let mut m = ThemeManager::with_config(config, MemoryStore::new(), MemoryDocument::new());
    m.initialize(Duration::ZERO);

    m.apply_theme("dark", true, Duration::ZERO);
    assert_eq!(m.next_deadline(), Some(Duration::from_millis(40)));

    m.tick(Duration::from_millis(40));
    assert_eq!(m.next_deadline(), Some(Duration::from_millis(50)));

    assert!(!m.tick(Duration::from_millis(290)));
}
