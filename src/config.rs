use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::constants::sample;
use crate::debug;
use crate::document::Document;
use crate::error::*;
use crate::formats::Format;
use crate::log::debug_message;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct MainConfig {
    pub defaults: Defaults,
    pub document: DocumentConfig,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Defaults {
    pub format: String,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct DocumentConfig {
    pub title: String,
    pub body: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            format: Format::default().to_string(),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> DocumentConfig {
        DocumentConfig {
            title: sample::TITLE.to_string(),
            body: sample::BODY.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl MainConfig {
    /// Parses the configuration from TOML contents
    ///
    /// # Arguments
    /// * `data` - The TOML contents
    /// * `file` - Name of the file the contents come from (used in errors)
    pub fn from_toml(data: &str, file: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e: toml::de::Error| Error::SerdeTomlError {
            location: ConfigType::MAIN,
            file: file.to_string(),
            cause: e.to_string(),
        })
    }

    /// Loads the configuration from the given file, falling back to the
    /// defaults when the file does not exist.
    ///
    /// # Errors
    /// * `ConfigReadError` - If the file exists but cannot be read
    /// * `SerdeTomlError` - If the contents are not valid
    pub fn load(file_path: &Path) -> Result<Self> {
        let file_name = file_path.to_string_lossy().to_string();
        match parse(file_path) {
            Ok(data) => {
                debug!("Loaded configuration from {}", file_name);
                MainConfig::from_toml(&data, &file_name)
            }
            Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
                debug!("No configuration found at {}, using defaults", file_name);
                Ok(MainConfig::default())
            }
            Err(Error::Io(e)) => Err(Error::ConfigReadError {
                file: file_name.clone(),
                cause: debug_message(e.to_string(), format!(" ({:?})", e.kind())),
            }),
            Err(e) => Err(e),
        }
    }

    /// The configured default format
    pub fn format(&self) -> Result<Format> {
        Format::parse_from(&self.defaults.format, ConfigType::MAIN)
    }

    /// Builds the configured document
    pub fn document(&self) -> Document {
        Document::new(self.document.title.as_str(), self.document.body.iter().cloned())
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = MainConfig::default();
        assert_eq!(config.format().unwrap(), Format::Xml);
        assert_eq!(config.document(), Document::sample());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = MainConfig::from_toml("", "docstep.toml").unwrap();
        assert_eq!(config.format().unwrap(), Format::Xml);
        assert_eq!(config.document(), Document::sample());
    }

    #[test]
    fn test_overrides() {
        let data = "[defaults]\n\
                    format = \"html\"\n\n\
                    [document]\n\
                    title = \"Notes\"\n\
                    body  = [\"first\", \"second\", \"third\"]\n";
        let config = MainConfig::from_toml(data, "docstep.toml").unwrap();
        assert_eq!(config.format().unwrap(), Format::Html);
        assert_eq!(
            config.document(),
            Document::new("Notes", ["first", "second", "third"])
        );
    }

    #[test]
    fn test_partial_document_section() {
        let data = "[document]\ntitle = \"Only title\"\n";
        let config = MainConfig::from_toml(data, "docstep.toml").unwrap();
        let document = config.document();
        assert_eq!(document.title(), "Only title");
        assert_eq!(document.body(), ["This is line 1", "This is line 2"]);
    }

    #[test]
    fn test_malformed_toml() {
        let result = MainConfig::from_toml("[document\ntitle = ", "broken.toml");
        match result {
            Err(Error::SerdeTomlError { file, .. }) => assert_eq!(file, "broken.toml"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_in_config() {
        let config = MainConfig::from_toml("[defaults]\nformat = \"pdf\"\n", "docstep.toml").unwrap();
        assert!(matches!(
            config.format(),
            Err(Error::UnknownFormat {
                location: ConfigType::MAIN,
                ..
            })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[defaults]\nformat = \"plain\"\n").unwrap();

        let config = MainConfig::load(file.path()).unwrap();
        assert_eq!(config.format().unwrap(), Format::PlainText);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MainConfig::load(&dir.path().join("docstep.toml")).unwrap();
        assert_eq!(config.format().unwrap(), Format::Xml);
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MainConfig::load(dir.path());
        assert!(matches!(result, Err(Error::ConfigReadError { .. })));
    }
}
