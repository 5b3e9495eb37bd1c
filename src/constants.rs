//! Module for shared constants used across the codebase

pub mod sample {
    /// Title of the built-in sample document
    pub const TITLE: &str = "Document Title";

    /// Body lines of the built-in sample document
    pub const BODY: [&str; 2] = ["This is line 1", "This is line 2"];
}

pub mod config {
    /// Name of the main configuration file
    pub const DEFAULT_CONF_FILE: &str = "docstep.toml";

    /// Environment variable overriding the configuration directory
    pub const CONFIG_DIR_ENV: &str = "DOCSTEP_CONFIG_DIR";

    /// Name of the application folder inside the system configuration directory
    pub const APP_DIR: &str = "docstep";
}
