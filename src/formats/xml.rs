use std::io::Write;

use crate::document::Document;
use crate::error::Result;
use crate::renderer::DocumentRenderer;

/// Renders the document wrapped in `<document>`, `<title>` and `<text>` tags.
pub struct XmlDocument {
    document: Document,
}

impl XmlDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentRenderer for XmlDocument {
    fn document(&self) -> &Document {
        &self.document
    }

    fn output_start(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "<document>")?;
        Ok(())
    }

    fn output_head(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "<title>{}</title>", self.document.title())?;
        Ok(())
    }

    fn output_body_start(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "<text>")?;
        Ok(())
    }

    fn output_body_end(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "</text>")?;
        Ok(())
    }

    fn output_end(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "</document>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Render;

    #[test]
    fn test_xml_sample() {
        let output = XmlDocument::new(Document::sample())
            .render_to_string()
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "<document>",
                "<title>Document Title</title>",
                "<text>",
                "This is line 1",
                "This is line 2",
                "</text>",
                "</document>"
            ]
        );
    }

    #[test]
    fn test_xml_empty_body() {
        let output = XmlDocument::new(Document::new("Empty", Vec::<String>::new()))
            .render_to_string()
            .unwrap();
        assert_eq!(
            output,
            "<document>\n<title>Empty</title>\n<text>\n</text>\n</document>\n"
        );
    }
}
