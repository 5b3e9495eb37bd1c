use std::path::{Path, PathBuf};

use docstep::constants::config::DEFAULT_CONF_FILE;
use docstep::debug;
pub use docstep::{config::MainConfig, error::*};

use crate::directories::PROJECT_DIRS;

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    /// Loads the main configuration, either from the given file or from
    /// `docstep.toml` inside the configuration directory.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit path to the configuration file
    ///
    /// # Returns
    /// A `Result` containing the bootstrapped application state.
    pub fn new(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(file) => parse_config_file(file, true)?,
            None => match default_config_file() {
                Some(file) => parse_config_file(&file, false)?,
                None => {
                    debug!("No configuration directory available, using defaults");
                    MainConfig::default()
                }
            },
        };
        Ok(BootStrap { config })
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Path of the default configuration file, if a configuration directory exists
fn default_config_file() -> Option<PathBuf> {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().join(DEFAULT_CONF_FILE))
}

/// Processes the configuration file retrieving the associated `MainConfig` structure.
///
/// A missing default file silently yields the defaults, while an explicitly
/// requested file must exist.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be read or parsed.
fn parse_config_file(file: &Path, required: bool) -> Result<MainConfig> {
    if required && !file.exists() {
        return Err(Error::ConfigReadError {
            file: file.to_string_lossy().to_string(),
            cause: "file not found".to_string(),
        });
    }
    MainConfig::load(file)
}
