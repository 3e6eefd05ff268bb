//! Runtime Configuration
//!
//! The host page may set `window.__DREAMS_CONFIG__` before the bundle loads:
//!
//! ```js
//! window.__DREAMS_CONFIG__ = { graphqlEndpoint: "/api/graphql", logLevel: "debug" };
//! ```
//!
//! Missing keys fall back to the compiled-in defaults.

use serde::Deserialize;

/// Global the host page writes configuration to
pub const CONFIG_GLOBAL: &str = "__DREAMS_CONFIG__";

const DEFAULT_ENDPOINT: &str = match option_env!("DREAMS_GRAPHQL_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "/graphql",
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub graphql_endpoint: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the page-provided configuration, or defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(wasm_bindgen::JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => config,
            Err(err) => {
                web_sys::console::warn_1(&format!("Ignoring malformed {}: {}", CONFIG_GLOBAL, err).into());
                Self::default()
            }
        }
    }

    /// Maximum tracing level; unknown names mean `info`
    pub fn tracing_level(&self) -> tracing::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" | "warning" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"logLevel": "debug"}"#).unwrap();
        assert_eq!(config.graphql_endpoint, AppConfig::default().graphql_endpoint);
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_endpoint_override() {
        let config: AppConfig =
            serde_json::from_str(r#"{"graphqlEndpoint": "https://api.example.org/graphql"}"#).unwrap();
        assert_eq!(config.graphql_endpoint, "https://api.example.org/graphql");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig { log_level: "LOUD".into(), ..AppConfig::default() };
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
        let config = AppConfig { log_level: " Warn ".into(), ..AppConfig::default() };
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }
}
