use std::str::FromStr;

use strum_macros::Display;

use crate::document::Document;
use crate::error::*;
use crate::renderer::DocumentRenderer;

mod html;
mod plain;
mod xml;

pub use html::HtmlDocument;
pub use plain::PlainDocument;
pub use xml::XmlDocument;

/// Output formats with a built-in renderer
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "snake_case")]
pub enum Format {
    #[default]
    Xml,
    Html,
    PlainText,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Xml, Format::Html, Format::PlainText];

    /// Builds the renderer for this format around the given document.
    ///
    /// The format is chosen once here; rendering itself never branches on it.
    pub fn renderer(self, document: Document) -> Box<dyn DocumentRenderer> {
        match self {
            Format::Xml => Box::new(XmlDocument::new(document)),
            Format::Html => Box::new(HtmlDocument::new(document)),
            Format::PlainText => Box::new(PlainDocument::new(document)),
        }
    }

    /// Parses a format name, reporting failures against the given source
    pub fn parse_from(name: &str, location: ConfigType) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "xml" => Ok(Format::Xml),
            "html" => Ok(Format::Html),
            "plain" | "plain_text" | "plaintext" | "text" => Ok(Format::PlainText),
            _ => Err(Error::UnknownFormat {
                location,
                name: name.to_string(),
            }),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::parse_from(s, ConfigType::ARGS)
    }
}
