//! Application Constants

/// Project directory identifiers used by `directories::ProjectDirs`
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "goldwind";
pub const APP_NAME: &str = "typography-tokens";

/// Export config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "typography-tokens.toml";

/// Default CSS selector for exported custom properties
pub const DEFAULT_CSS_SELECTOR: &str = ":root";
