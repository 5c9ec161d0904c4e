//! Widget configuration and its merge rule.

use remote_loader::{LoadRequest, DEFAULT_METHOD};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIELD_NAME: &str = "oms-value-input";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Name of the hidden field carrying the mirror value.
    pub name: String,
    pub ajax: Option<AjaxConfig>,
    pub available_item_color: String,
    pub selected_item_color: String,
    pub button_color: String,
    pub header_color: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_FIELD_NAME.into(),
            ajax: None,
            available_item_color: "red".into(),
            selected_item_color: "green".into(),
            button_color: "primary".into(),
            header_color: "mdb-color".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AjaxConfig {
    pub available_url: String,
    pub selected_url: String,
    pub method: String,
}

impl Default for AjaxConfig {
    fn default() -> Self {
        Self {
            available_url: String::new(),
            selected_url: String::new(),
            method: DEFAULT_METHOD.into(),
        }
    }
}

impl AjaxConfig {
    /// `None` when no available-items endpoint is configured.
    pub fn available_request(&self) -> Option<LoadRequest> {
        self.request_for(&self.available_url)
    }

    /// `None` when no selected-items endpoint is configured.
    pub fn selected_request(&self) -> Option<LoadRequest> {
        self.request_for(&self.selected_url)
    }

    fn request_for(&self, url: &str) -> Option<LoadRequest> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        Some(LoadRequest::new(url, self.method.clone()))
    }

    pub fn merge(&mut self, patch: AjaxPatch) {
        if let Some(v) = patch.available_url {
            self.available_url = v;
        }
        if let Some(v) = patch.selected_url {
            self.selected_url = v;
        }
        if let Some(v) = patch.method {
            self.method = v;
        }
    }
}

/// Partial configuration. Present fields replace the current value, absent
/// ones leave it alone. `ajax: null` drops the endpoints entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub ajax: Option<Option<AjaxPatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_item_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_item_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AjaxPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ConfigPatch {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl WidgetConfig {
    pub fn merge(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        match patch.ajax {
            Some(Some(ajax)) => self.ajax.get_or_insert_with(AjaxConfig::default).merge(ajax),
            Some(None) => self.ajax = None,
            None => {}
        }
        if let Some(v) = patch.available_item_color {
            self.available_item_color = v;
        }
        if let Some(v) = patch.selected_item_color {
            self.selected_item_color = v;
        }
        if let Some(v) = patch.button_color {
            self.button_color = v;
        }
        if let Some(v) = patch.header_color {
            self.header_color = v;
        }
    }

    pub fn merged(mut self, patch: ConfigPatch) -> Self {
        self.merge(patch);
        self
    }

    pub(crate) fn set_available_url(&mut self, url: String) {
        self.ajax.get_or_insert_with(AjaxConfig::default).available_url = url;
    }

    pub(crate) fn set_selected_url(&mut self, url: String) {
        self.ajax.get_or_insert_with(AjaxConfig::default).selected_url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = WidgetConfig::default();
        assert_eq!(config.name, "oms-value-input");
        assert_eq!(config.ajax, None);
        assert_eq!(config.available_item_color, "red");
        assert_eq!(config.selected_item_color, "green");
        assert_eq!(config.button_color, "primary");
        assert_eq!(config.header_color, "mdb-color");
    }

    #[test]
    fn patch_fields_win_and_absent_fields_are_kept() {
        let config = WidgetConfig::default().merged(ConfigPatch {
            selected_item_color: Some("blue".into()),
            ..ConfigPatch::default()
        });

        assert_eq!(config.selected_item_color, "blue");
        assert_eq!(config.available_item_color, "red");
        assert_eq!(config.name, DEFAULT_FIELD_NAME);
    }

    #[test]
    fn ajax_patch_on_absent_ajax_starts_from_defaults() {
        let patch = ConfigPatch::from_json(r#"{"ajax":{"availableUrl":"https://example.com/a"}}"#)
            .expect("patch");
        let config = WidgetConfig::default().merged(patch);
        let ajax = config.ajax.expect("ajax");

        assert_eq!(ajax.available_url, "https://example.com/a");
        assert_eq!(ajax.selected_url, "");
        assert_eq!(ajax.method, "GET");
    }

    #[test]
    fn ajax_patch_merges_into_existing_ajax() {
        let mut config = WidgetConfig::default();
        config.ajax = Some(AjaxConfig {
            available_url: "https://example.com/a".into(),
            selected_url: "https://example.com/s".into(),
            method: "POST".into(),
        });
        config.merge(ConfigPatch {
            ajax: Some(Some(AjaxPatch {
                selected_url: Some("https://example.com/s2".into()),
                ..AjaxPatch::default()
            })),
            ..ConfigPatch::default()
        });

        let ajax = config.ajax.expect("ajax");
        assert_eq!(ajax.available_url, "https://example.com/a");
        assert_eq!(ajax.selected_url, "https://example.com/s2");
        assert_eq!(ajax.method, "POST");
    }

    #[test]
    fn null_ajax_patch_drops_endpoints() {
        let mut config = WidgetConfig::default().merged(
            ConfigPatch::from_json(r#"{"ajax":{"availableUrl":"https://example.com/a"}}"#)
                .expect("patch"),
        );
        assert!(config.ajax.is_some());

        let patch = ConfigPatch::from_json(r#"{"ajax":null,"buttonColor":"danger"}"#).expect("patch");
        assert_eq!(patch.ajax, Some(None));
        config.merge(patch);

        assert_eq!(config.ajax, None);
        assert_eq!(config.button_color, "danger");
    }

    #[test]
    fn missing_ajax_key_keeps_endpoints() {
        let mut config = WidgetConfig::default().merged(
            ConfigPatch::from_json(r#"{"ajax":{"selectedUrl":"https://example.com/s"}}"#)
                .expect("patch"),
        );
        let patch = ConfigPatch::from_json(r#"{"name":"groups"}"#).expect("patch");
        assert_eq!(patch.ajax, None);
        config.merge(patch);

        assert_eq!(config.ajax.expect("ajax").selected_url, "https://example.com/s");
    }

    #[test]
    fn blank_urls_produce_no_request() {
        let ajax = AjaxConfig {
            available_url: "  ".into(),
            selected_url: "https://example.com/s".into(),
            method: "GET".into(),
        };
        assert_eq!(ajax.available_request(), None);
        assert_eq!(
            ajax.selected_request(),
            Some(LoadRequest::get("https://example.com/s"))
        );
    }

    #[test]
    fn config_round_trips_with_camel_case_keys() {
        let raw = r#"{"name":"groups","availableItemColor":"amber"}"#;
        let config: WidgetConfig = serde_json::from_str(raw).expect("config");
        assert_eq!(config.name, "groups");
        assert_eq!(config.available_item_color, "amber");
        assert_eq!(config.header_color, "mdb-color");
        assert!(ConfigPatch::default().is_empty());
    }
}
