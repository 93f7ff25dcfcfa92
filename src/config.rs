//! Widget Configuration
//!
//! Defaults plus overrides read from the mount element's `data-*` attributes.

/// Chat route used when the page does not set `data-endpoint`
pub const DEFAULT_ENDPOINT: &str = "/chatbot";
/// How long a toast stays on screen
pub const DEFAULT_TOAST_MS: u32 = 2000;
/// Id of the `<script>` element carrying the flash payload
pub const DEFAULT_FLASH_DATA_ID: &str = "flash-data";
/// Id of the element the widget mounts into
pub const MOUNT_ID: &str = "chatbot-root";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub toast_duration_ms: u32,
    pub flash_data_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            toast_duration_ms: DEFAULT_TOAST_MS,
            flash_data_id: DEFAULT_FLASH_DATA_ID.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Build a config from an attribute lookup (`name` -> value)
    pub fn from_dataset(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = get("data-endpoint").filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(ms) = get("data-toast-ms").and_then(|v| v.trim().parse::<u32>().ok()) {
            config.toast_duration_ms = ms;
        }
        if let Some(id) = get("data-flash-id").filter(|e| !e.trim().is_empty()) {
            config.flash_data_id = id.trim().to_string();
        }
        config
    }

    pub fn from_element(el: &web_sys::Element) -> Self {
        Self::from_dataset(|name| el.get_attribute(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_attributes() {
        let config = WidgetConfig::from_dataset(lookup(&[]));
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.endpoint, "/chatbot");
        assert_eq!(config.toast_duration_ms, 2000);
    }

    #[test]
    fn test_overrides() {
        let config = WidgetConfig::from_dataset(lookup(&[
            ("data-endpoint", "/api/chat"),
            ("data-toast-ms", "3500"),
            ("data-flash-id", "messages"),
        ]));
        assert_eq!(config.endpoint, "/api/chat");
        assert_eq!(config.toast_duration_ms, 3500);
        assert_eq!(config.flash_data_id, "messages");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = WidgetConfig::from_dataset(lookup(&[
            ("data-endpoint", "   "),
            ("data-toast-ms", "soon"),
        ]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_MS);
    }
}
