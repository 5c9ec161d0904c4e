use super::{env_patch, load_config, parse_config_file};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

use widget::{ConfigPatch, WidgetConfig};

#[test]
fn parses_camel_case_toml_with_nested_ajax() {
    let patch = parse_config_file(
        r#"
name = "user-groups"
headerColor = "indigo"

[ajax]
availableUrl = "https://example.com/api/v1/groups/available"
method = "POST"
"#,
    )
    .expect("patch");

    let config = WidgetConfig::default().merged(patch);
    assert_eq!(config.name, "user-groups");
    assert_eq!(config.header_color, "indigo");
    let ajax = config.ajax.expect("ajax");
    assert_eq!(ajax.available_url, "https://example.com/api/v1/groups/available");
    assert_eq!(ajax.selected_url, "");
    assert_eq!(ajax.method, "POST");
}

#[test]
fn env_without_endpoint_variables_leaves_ajax_unset() {
    let vars: HashMap<&str, &str> = HashMap::from([("OMS__BUTTON_COLOR", "secondary")]);
    let patch = env_patch(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(patch.ajax, None);
    assert_eq!(patch.button_color.as_deref(), Some("secondary"));
}

#[test]
fn env_endpoint_variables_build_ajax_patch() {
    let vars: HashMap<&str, &str> =
        HashMap::from([("OMS__SELECTED_URL", "https://example.com/ids")]);
    let config = WidgetConfig::default().merged(env_patch(|key| vars.get(key).map(|v| v.to_string())));

    let ajax = config.ajax.expect("ajax");
    assert_eq!(ajax.selected_url, "https://example.com/ids");
    assert_eq!(ajax.method, "GET");
}

#[test]
fn overrides_win_over_config_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("oms_cli_config_test_{suffix}.toml"));
    fs::write(&path, "name = \"from-file\"\nbuttonColor = \"danger\"\n").expect("write");

    let config = load_config(
        Some(&path),
        ConfigPatch {
            name: Some("from-flag".into()),
            ..ConfigPatch::default()
        },
    )
    .expect("config");

    assert_eq!(config.name, "from-flag");
    assert_eq!(config.button_color, "danger");
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let path = env::temp_dir().join("oms_cli_definitely_missing.toml");
    let err = load_config(Some(&path), ConfigPatch::default()).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn invalid_toml_is_an_error() {
    let err = parse_config_file("name = [").expect_err("must fail");
    assert!(!err.to_string().is_empty());
}
