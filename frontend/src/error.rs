//! Error types for route-table construction and configuration.
//!
//! Route *resolution* never fails; these only surface while the shell is
//! being assembled.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A route list that cannot be turned into a total, terminating table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route table has no wildcard entry; some paths would not resolve")]
    MissingWildcard,

    #[error("route table has {0} wildcard entries, expected exactly one")]
    MultipleWildcards(usize),

    #[error("path '{0}' is declared more than once")]
    DuplicatePath(String),

    #[error("path '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("redirect target '{0}' does not resolve to a page")]
    UnresolvedRedirect(String),
}

/// Invalid runtime or build-time configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("base path '{0}' must be empty or start with '/' and not end with '/'")]
    InvalidBasePath(String),

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("failed to deserialize router config: {0}")]
    Deserialize(String),
}

impl From<serde_wasm_bindgen::Error> for ConfigError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ConfigError::Deserialize(err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_path() {
        let err = RouteTableError::DuplicatePath("/chat".to_string());
        assert_eq!(err.to_string(), "path '/chat' is declared more than once");

        let err = RouteTableError::UnresolvedRedirect("/nowhere".to_string());
        assert!(err.to_string().contains("/nowhere"));
    }

    #[test]
    fn config_errors_name_the_bad_value() {
        let err = ConfigError::InvalidLogLevel("chatty".to_string());
        assert_eq!(err.to_string(), "unknown log level 'chatty'");
    }
}
