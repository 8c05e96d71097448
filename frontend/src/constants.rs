// Route paths - the single source of truth for every URL the shell knows about
pub const HOME_PATH: &str = "/";
pub const CHAT_PATH: &str = "/chat";
pub const SETTINGS_PATH: &str = "/settings";
pub const WILDCARD_PATTERN: &str = "*";

// Where unknown paths are sent
pub const FALLBACK_PATH: &str = HOME_PATH;

// DOM anchors
pub const APP_CONTAINER_ID: &str = "app-container";
pub const NAV_CONTAINER_ID: &str = "nav-container";
pub const HOME_CONTAINER_ID: &str = "home-container";
pub const CHAT_CONTAINER_ID: &str = "chat-container";
pub const SETTINGS_CONTAINER_ID: &str = "settings-container";

// Document titles
pub const APP_TITLE: &str = "Chat";
pub const HOME_TITLE: &str = "Home";
pub const CHAT_TITLE: &str = "Chat";
pub const SETTINGS_TITLE: &str = "Settings";

// Default runtime configuration
pub const DEFAULT_BASE_PATH: &str = "";
pub const DEFAULT_LOG_LEVEL: &str = "info";
