use std::path::Path;

use super::*;
use crate::error::SiteLintError;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.scanner.root, Path::new("_site"));
    assert_eq!(config.scanner.include, ["**/*.html"]);
    assert!(config.scanner.exclude.is_empty());
    assert!(!config.scanner.gitignore);
    assert!(config.rules.disable.is_empty());
}

#[test]
fn empty_file_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config: Config = toml::from_str(
        r#"
        [scanner]
        root = "public"
        exclude = ["drafts/**"]
        "#,
    )
    .unwrap();
    assert_eq!(config.scanner.root, Path::new("public"));
    assert_eq!(config.scanner.include, ["**/*.html"]);
    assert_eq!(config.scanner.exclude, ["drafts/**"]);
}

#[test]
fn unknown_keys_are_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str(
        r"
        [scanner]
        max_lines = 10
        ",
    );
    assert!(result.is_err());
}

#[test]
fn disabled_rules_parse_case_insensitively() {
    let config: Config = toml::from_str(
        r#"
        [rules]
        disable = ["e016", "C004"]
        "#,
    )
    .unwrap();
    assert_eq!(config.disabled_rules().unwrap(), [RuleId::E016, RuleId::C004]);
    assert!(config.validate().is_ok());
}

#[test]
fn unknown_rule_fails_validation() {
    let mut config = Config::default();
    config.rules.disable.push("E999".to_string());
    let err = config.validate().unwrap_err();
    assert!(matches!(err, SiteLintError::UnknownRule(ref code) if code == "E999"));
}

#[test]
fn invalid_glob_fails_validation() {
    let mut config = Config::default();
    config.scanner.exclude.push("[".to_string());
    assert!(matches!(
        config.validate().unwrap_err(),
        SiteLintError::InvalidPattern { .. }
    ));
}

#[test]
fn serializes_back_to_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, Config::default());
}
