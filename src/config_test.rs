use super::*;

#[test]
fn default_uses_page_contract_names() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme-preference");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.hidden_text_class, "visually-hidden");
    assert_eq!(config.dark_query, "(prefers-color-scheme: dark)");
    assert_eq!(config.level(), Some(log::Level::Warn));
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = ThemeConfig::from_json(r#"{"storage_key": "site-theme"}"#).unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
}

#[test]
fn from_json_accepts_empty_object() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn validate_names_empty_field() {
    let err = ThemeConfig::from_json(r#"{"toggle_id": "  "}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig("toggle_id")));
}

#[test]
fn validate_rejects_unknown_log_level() {
    let err = ThemeConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig("log_level")));
}

#[test]
fn level_parses_case_insensitively() {
    let config = ThemeConfig { log_level: "DEBUG".to_owned(), ..ThemeConfig::default() };
    assert_eq!(config.level(), Some(log::Level::Debug));
}
