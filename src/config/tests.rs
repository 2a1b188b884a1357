//! Tests for config functionality.

use crate::config::Config;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.library_file, "library.json");
    assert_eq!(config.id_prefix, "prompt");
    assert_eq!(config.description_fallback_chars, 100);
    assert!(config.warn_missing_placeholders);
    assert_eq!(config.summary_max_chars, 120);
    assert_eq!(config.export_prefix, "prompt_library_backup");
    assert!(config.clipboard_command.is_empty());
    assert!(config.audit_log);
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.library_file, "library.json");
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
summary_max_chars: 60
clipboard_command: "xclip -selection clipboard"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.summary_max_chars, 60);
    assert_eq!(config.clipboard_command, "xclip -selection clipboard");
    assert_eq!(config.id_prefix, "prompt");
    assert!(config.audit_log);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
future_option: true
id_prefix: tpl
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.id_prefix, "tpl");
}

#[test]
fn test_invalid_library_file_rejected() {
    for bad in ["", "../escape.json", "dir/lib.json", ".hidden.json"] {
        let yaml = format!("library_file: \"{}\"\n", bad);
        let err = Config::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("library_file"), "{}", bad);
    }
}

#[test]
fn test_invalid_id_prefix_rejected() {
    let err = Config::from_yaml("id_prefix: \"my prompt\"\n").unwrap_err();
    assert!(err.to_string().contains("id_prefix"));
}

#[test]
fn test_summary_max_chars_too_small() {
    let err = Config::from_yaml("summary_max_chars: 3\n").unwrap_err();
    assert!(err.to_string().contains("summary_max_chars"));
}

#[test]
fn test_malformed_yaml_is_error() {
    assert!(Config::from_yaml("summary_max_chars: [oops").is_err());
}

#[test]
fn test_yaml_round_trip() {
    let mut config = Config::default();
    config.export_prefix = "backup".to_string();
    config.audit_log = false;

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.export_prefix, "backup");
    assert!(!parsed.audit_log);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load(temp_dir.path().join("config.yaml")).unwrap();
    assert_eq!(config.library_file, "library.json");
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "library_file: prompts.json\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.library_file, "prompts.json");
}
