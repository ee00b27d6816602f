use powerline_status::config::*;
use serde_json::json;

fn schema() -> OptsSchema {
    OptsSchema::new(vec![
        OptionSpec::new("date_format", OptionKind::String, "%H:%M"),
        OptionSpec::new("interval", OptionKind::Number, 1000),
        OptionSpec::new("show_seconds", OptionKind::Boolean, false),
        OptionSpec::new("groups", OptionKind::Array, json!(["cwd", "git"])),
        OptionSpec::new("colors", OptionKind::Table, json!({})),
    ])
}

#[test]
fn test_validate_fills_every_key_with_defaults() {
    let validated = schema().validate(&json!({}));

    assert!(validated.error.is_none());
    let keys: Vec<&str> = validated.values.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 5);
    for entry in schema().entries() {
        assert_eq!(validated.values[entry.name], entry.default);
    }
}

#[test]
fn test_validate_preserves_matching_values() {
    let input = json!({
        "date_format": "%Y-%m-%d",
        "interval": 250,
        "show_seconds": true,
        "groups": ["date"],
        "colors": {"cwd": "#000000"},
    });

    let validated = schema().validate(&input);

    assert!(validated.error.is_none());
    assert_eq!(validated.values["date_format"], json!("%Y-%m-%d"));
    assert_eq!(validated.values["interval"], json!(250));
    assert_eq!(validated.values["show_seconds"], json!(true));
    assert_eq!(validated.values["groups"], json!(["date"]));
    assert_eq!(validated.values["colors"], json!({"cwd": "#000000"}));
}

#[test]
fn test_validate_collects_every_mismatch() {
    let input = json!({
        "date_format": 12,
        "interval": "fast",
        "show_seconds": true,
    });

    let validated = schema().validate(&input);

    // mismatched keys fall back, matching ones are kept
    assert_eq!(validated.values["date_format"], json!("%H:%M"));
    assert_eq!(validated.values["interval"], json!(1000));
    assert_eq!(validated.values["show_seconds"], json!(true));
    assert_eq!(validated.values.len(), 5);

    let error = validated.error.expect("mismatches are reported");
    assert_eq!(error.issues.len(), 2);
    assert!(error.mentions("date_format"));
    assert!(error.mentions("interval"));
    assert!(!error.mentions("show_seconds"));

    let message = error.to_string();
    assert!(message.contains("`date_format` expects a string, got number"));
    assert!(message.contains("`interval` expects a number, got string"));
}

#[test]
fn test_validate_reports_unknown_keys_without_keeping_them() {
    let validated = schema().validate(&json!({"colour": "red"}));

    assert!(!validated.values.contains_key("colour"));
    assert_eq!(validated.values.len(), 5);
    let error = validated.error.unwrap();
    assert_eq!(error.issues, vec![Issue::Unknown { key: "colour".to_string() }]);
}

#[test]
fn test_validate_null_and_non_table_input() {
    let validated = schema().validate(&serde_json::Value::Null);
    assert!(validated.error.is_none());
    assert_eq!(validated.values.len(), 5);

    let validated = schema().validate(&json!("date_format"));
    assert_eq!(validated.values.len(), 5);
    assert_eq!(
        validated.error.unwrap().issues,
        vec![Issue::NotATable { found: "string" }]
    );
}

#[test]
fn test_null_value_counts_as_absent() {
    let validated = schema().validate(&json!({"interval": null}));

    assert!(validated.error.is_none());
    assert_eq!(validated.values["interval"], json!(1000));
}

#[test]
fn test_status_options_defaults() {
    let resolved = StatusOptions::resolve(&json!({}));

    assert!(resolved.error.is_none());
    assert_eq!(resolved.options.date_format, "%a %H:%M:%S");
    assert_eq!(resolved.options, StatusOptions::default());
}

#[test]
fn test_status_options_custom_date_format() {
    let resolved = StatusOptions::resolve(&json!({"date_format": "%Y-%m-%d %H:%M"}));

    assert!(resolved.error.is_none());
    assert_eq!(resolved.options.date_format, "%Y-%m-%d %H:%M");
}

#[test]
fn test_status_options_wrong_kind_falls_back() {
    let resolved = StatusOptions::resolve(&json!({"date_format": false}));

    assert_eq!(resolved.options.date_format, DEFAULT_DATE_FORMAT);
    assert!(resolved.error.unwrap().mentions("date_format"));
}

#[test]
fn test_status_options_rejects_broken_strftime() {
    let resolved = StatusOptions::resolve(&json!({"date_format": "%H:%Q"}));

    assert_eq!(resolved.options.date_format, DEFAULT_DATE_FORMAT);
    let error = resolved.error.unwrap();
    assert!(matches!(&error.issues[0], Issue::Invalid { key, .. } if key == "date_format"));
}

#[test]
fn test_check_strftime() {
    assert!(check_strftime("%a %H:%M:%S").is_ok());
    assert!(check_strftime("plain text").is_ok());
    assert!(check_strftime("%").is_err());
    assert!(check_strftime("%H %z").is_ok());
    // parse-only specifier
    assert!(check_strftime("%H %#z").is_err());
}

#[test]
fn test_status_options_rejects_parse_only_strftime() {
    let resolved = StatusOptions::resolve(&json!({"date_format": "%H:%M %#z"}));

    assert_eq!(resolved.options.date_format, DEFAULT_DATE_FORMAT);
    assert!(resolved.error.unwrap().mentions("date_format"));
}
