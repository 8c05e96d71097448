//! Shell configuration.
//!
//! Values come from the build (`APP_BASE_PATH`, `APP_LOG_LEVEL` via
//! `option_env!`) and may be overridden at runtime by the JS bootstrap
//! through [`init_router_config_js`].

use std::str::FromStr;
use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_LOG_LEVEL};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterConfig {
    /// Deployment prefix such as `/app`; empty when served from the root.
    pub base_path: String,
    /// Max tracing level written to the console.
    pub log_level: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RouterConfig {
    /// Defaults overlaid with whatever was injected at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base) = option_env!("APP_BASE_PATH") {
            config.base_path = base.to_string();
        }
        if let Some(level) = option_env!("APP_LOG_LEVEL") {
            config.log_level = level.to_string();
        }
        config.validate()
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: Self = serde_wasm_bindgen::from_value(value)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        let base = &self.base_path;
        if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
            return Err(ConfigError::InvalidBasePath(base.clone()));
        }
        self.level()?;
        Ok(self)
    }

    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

lazy_static! {
    static ref ROUTER_CONFIG: RwLock<RouterConfig> = RwLock::new(RouterConfig::default());
}

/// Load the build-time configuration into the global slot.
pub fn init_router_config() -> Result<(), ConfigError> {
    set_config(RouterConfig::from_build_env()?);
    Ok(())
}

/// Runtime override from the JS bootstrap, e.g.
/// `init_router_config_js({ basePath: "/app", logLevel: "debug" })`.
///
/// The log level applies immediately. A changed base path rebuilds the
/// navigation state and re-resolves the location; otherwise the page on
/// screen is re-mounted so it reflects the new values.
#[wasm_bindgen]
pub fn init_router_config_js(config: JsValue) -> Result<(), JsValue> {
    let config = RouterConfig::from_js(config)?;
    crate::debug_log!("Initializing router config from JS: {:?}", config);

    crate::logging::set_level(config.level()?);
    let base_changed = current_config().base_path != config.base_path;
    set_config(config);

    if base_changed {
        crate::resync_location()
    } else {
        crate::state::dispatch_global_message(crate::messages::Message::Refresh);
        Ok(())
    }
}

pub fn set_config(config: RouterConfig) {
    let mut guard = ROUTER_CONFIG.write().unwrap_or_else(|e| e.into_inner());
    *guard = config;
}

/// Snapshot of the active configuration.
pub fn current_config() -> RouterConfig {
    ROUTER_CONFIG
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<RouterConfig, ConfigError> {
        serde_json::from_str::<RouterConfig>(raw)
            .expect("well-formed config json")
            .validate()
    }

    #[test]
    fn defaults_serve_from_root() {
        let config = RouterConfig::default();
        assert_eq!(config.base_path, "");
        assert_eq!(config.level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn json_fields_are_optional() {
        let config = parse(r#"{"basePath": "/app"}"#).unwrap();
        assert_eq!(config.base_path, "/app");
        assert_eq!(config.log_level, "info");

        let config = parse("{}").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn rejects_malformed_base_path() {
        for bad in ["app", "/app/", "/"] {
            let raw = format!(r#"{{"basePath": "{}"}}"#, bad);
            assert!(
                matches!(parse(&raw), Err(ConfigError::InvalidBasePath(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = parse(r#"{"logLevel": "chatty"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "chatty"));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let config = parse(r#"{"logLevel": "DEBUG"}"#).unwrap();
        assert_eq!(config.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn set_config_replaces_snapshot() {
        let config = RouterConfig {
            base_path: "/shell".into(),
            log_level: "warn".into(),
        };
        set_config(config.clone());
        assert_eq!(current_config(), config);
        set_config(RouterConfig::default());
    }
}
