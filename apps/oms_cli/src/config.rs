use std::{fs, path::Path};

use anyhow::Context;
use widget::{AjaxPatch, ConfigPatch, WidgetConfig};

pub const DEFAULT_CONFIG_FILE: &str = "oms.toml";

/// Defaults, then the TOML file, then `OMS__*` variables, then `overrides`.
pub fn load_config(
    path: Option<&Path>,
    overrides: ConfigPatch,
) -> anyhow::Result<WidgetConfig> {
    let mut config = WidgetConfig::default();

    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            config.merge(parse_config_file(&raw).with_context(|| {
                format!("failed to parse config file '{}'", path.display())
            })?);
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                config.merge(parse_config_file(&raw).with_context(|| {
                    format!("failed to parse config file '{DEFAULT_CONFIG_FILE}'")
                })?);
            }
        }
    }

    config.merge(env_patch(|key| std::env::var(key).ok()));
    config.merge(overrides);
    Ok(config)
}

pub fn parse_config_file(raw: &str) -> anyhow::Result<ConfigPatch> {
    Ok(toml::from_str(raw)?)
}

pub fn env_patch(lookup: impl Fn(&str) -> Option<String>) -> ConfigPatch {
    let ajax = AjaxPatch {
        available_url: lookup("OMS__AVAILABLE_URL"),
        selected_url: lookup("OMS__SELECTED_URL"),
        method: lookup("OMS__METHOD"),
    };
    let ajax = (ajax != AjaxPatch::default()).then_some(Some(ajax));

    ConfigPatch {
        name: lookup("OMS__NAME"),
        ajax,
        available_item_color: lookup("OMS__AVAILABLE_ITEM_COLOR"),
        selected_item_color: lookup("OMS__SELECTED_ITEM_COLOR"),
        button_color: lookup("OMS__BUTTON_COLOR"),
        header_color: lookup("OMS__HEADER_COLOR"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
