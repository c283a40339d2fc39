use serde::Deserialize;

use crate::shared::page_data;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub routes: RoutesConfig,
    pub gallery: GalleryConfig,
    pub flash: FlashConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every backend call; empty means same origin
    #[serde(default)]
    pub base: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoutesConfig {
    pub gallery: String,
    pub mapping: String,
    pub excel_cleanup: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Quiet interval before a typed search is applied
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FlashConfig {
    /// 0 disables auto-dismiss
    pub dismiss_ms: u32,
}

/// Id of the `<script type="text/toml">` element a page may use to override defaults
pub const CONFIG_ELEMENT_ID: &str = "console-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""

[routes]
gallery = "/admin/gallery"
mapping = "/admin/lumaprints-mapping"
excel_cleanup = "/admin/excel-cleanup"

[gallery]
search_debounce_ms = 500

[flash]
dismiss_ms = 5000
"#;

impl Default for ConsoleConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded console config must parse")
    }
}

/// Parse a page-supplied override, falling back to the embedded defaults.
pub fn parse_config(source: Option<&str>) -> ConsoleConfig {
    let Some(source) = source.filter(|s| !s.trim().is_empty()) else {
        log::info!("Using default embedded console configuration");
        return ConsoleConfig::default();
    };

    match toml::from_str::<ConsoleConfig>(source) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid {} element, using defaults: {}", CONFIG_ELEMENT_ID, e);
            ConsoleConfig::default()
        }
    }
}

/// Load configuration from the current page
pub fn load_config() -> ConsoleConfig {
    let source = page_data::element_text(CONFIG_ELEMENT_ID);
    parse_config(source.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<ConsoleConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.gallery.search_debounce_ms, 500);
        assert_eq!(config.routes.mapping, "/admin/lumaprints-mapping");
        assert_eq!(config.api.base, "");
    }

    #[test]
    fn test_override_replaces_values() {
        let config = parse_config(Some(
            r#"
            [api]
            base = "https://shop.example"

            [routes]
            gallery = "/gallery"
            mapping = "/mapping"
            excel_cleanup = "/cleanup"

            [gallery]
            search_debounce_ms = 250

            [flash]
            dismiss_ms = 0
            "#,
        ));
        assert_eq!(config.api.base, "https://shop.example");
        assert_eq!(config.gallery.search_debounce_ms, 250);
        assert_eq!(config.flash.dismiss_ms, 0);
    }

    #[test]
    fn test_broken_override_falls_back() {
        assert_eq!(parse_config(Some("[gallery")), ConsoleConfig::default());
        assert_eq!(parse_config(Some("   ")), ConsoleConfig::default());
        assert_eq!(parse_config(None), ConsoleConfig::default());
    }
}
