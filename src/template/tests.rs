//! Tests for the template record model.

use super::*;
use crate::placeholder::VariableDescriptor;

fn sample() -> TemplateRecord {
    TemplateRecord::new(
        "prompt",
        "Generate Python Function",
        "Write a function named {function_name} returning {return_type}.",
        vec![
            VariableDescriptor::new("function_name").with_default("my_function"),
            VariableDescriptor::new("return_type").with_default("None"),
        ],
    )
}

#[test]
fn test_generate_id_format() {
    let id = generate_id("prompt");
    let parts: Vec<&str> = id.splitn(3, '-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "prompt");
    assert!(parts[1].parse::<i64>().is_ok());
    assert_eq!(parts[2].len(), 9);
    assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_generate_id_is_unique() {
    let a = generate_id("prompt");
    let b = generate_id("prompt");
    assert_ne!(a, b);
}

#[test]
fn test_new_record_timestamps_match() {
    let record = sample();
    assert_eq!(record.created_at, record.updated_at);
    assert!(record.id.starts_with("prompt-"));
}

#[test]
fn test_touch_always_advances() {
    let mut record = sample();
    let before = record.updated_at;
    record.touch();
    assert!(record.updated_at > before);
    let created = record.created_at;
    record.touch();
    assert_eq!(record.created_at, created);
}

#[test]
fn test_serializes_camel_case_with_millis() {
    let record = sample();
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("basePrompt").is_some());
    assert!(json["createdAt"].is_i64());
    assert_eq!(json["variables"][0]["defaultValue"], "my_function");
    assert_eq!(
        json["createdAt"].as_i64().unwrap(),
        record.created_at.timestamp_millis()
    );
}

#[test]
fn test_deserializes_lenient_document() {
    let json = r#"{
        "id": "prompt-1",
        "title": "Minimal",
        "basePrompt": "Say {word}",
        "variables": [{ "name": "word" }],
        "createdAt": 1687190400000,
        "updatedAt": 1687190400000
    }"#;
    let record: TemplateRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.description, "");
    assert!(record.tags.is_empty());
    assert_eq!(record.variables[0].default_value, "");
    assert_eq!(record.created_at.timestamp_millis(), 1687190400000);
}

#[test]
fn test_deserializes_without_timestamps() {
    let json = r#"{"id": "x", "title": "t", "basePrompt": "b"}"#;
    let record: TemplateRecord = serde_json::from_str(json).unwrap();
    assert!(record.variables.is_empty());
    assert!(record.created_at.timestamp_millis() > 0);
}

#[test]
fn test_missing_placeholders_on_record() {
    let mut record = sample();
    assert!(record.missing_placeholders().is_empty());
    record
        .variables
        .push(VariableDescriptor::new("unused"));
    assert_eq!(record.missing_placeholders(), vec!["unused"]);
}

#[test]
fn test_variable_lookup() {
    let record = sample();
    assert_eq!(
        record.variable("return_type").map(|v| v.default_value.as_str()),
        Some("None")
    );
    assert!(record.variable("nope").is_none());
}

#[test]
fn test_parse_tags() {
    assert_eq!(parse_tags("python, code generation ,function"), vec![
        "python",
        "code generation",
        "function"
    ]);
    assert!(parse_tags("").is_empty());
    assert_eq!(parse_tags(" , a,, "), vec!["a"]);
}

#[test]
fn test_patch_is_empty() {
    assert!(TemplatePatch::default().is_empty());
    let patch = TemplatePatch {
        title: Some("x".to_string()),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn test_patch_updates_fields_and_defaults() {
    let record = sample();
    let patch = TemplatePatch {
        title: Some("  Renamed  ".to_string()),
        tags: Some(vec!["py".to_string()]),
        defaults: vec![
            ("return_type".to_string(), "int".to_string()),
            ("ghost".to_string(), "boo".to_string()),
        ],
        ..Default::default()
    };
    let (updated, unknown) = patch.apply(&record);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.tags, vec!["py"]);
    assert_eq!(updated.variables[1].default_value, "int");
    assert_eq!(unknown, vec!["ghost"]);
    assert_eq!(updated.id, record.id);
    assert_eq!(updated.base_prompt, record.base_prompt);
}

#[test]
fn test_patch_canonicalizes_new_body() {
    let record = sample();
    let patch = TemplatePatch {
        base_prompt: Some("  def __function_name__() -> \\[return_type\\]: ...  ".to_string()),
        ..Default::default()
    };
    let (updated, _) = patch.apply(&record);
    assert_eq!(updated.base_prompt, "def {function_name}() -> {return_type}: ...");
}

#[test]
fn test_json_round_trip_is_exact() {
    let mut record = sample();
    record.touch();
    let json = serde_json::to_string(&record).unwrap();
    let parsed: TemplateRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}
