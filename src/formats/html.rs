use std::io::Write;

use crate::document::Document;
use crate::error::Result;
use crate::renderer::DocumentRenderer;

/// Renders the document as a minimal HTML page.
pub struct HtmlDocument {
    document: Document,
}

impl HtmlDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentRenderer for HtmlDocument {
    fn document(&self) -> &Document {
        &self.document
    }

    fn output_start(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "<html>")?;
        Ok(())
    }

    fn output_head(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "<head><title>{}</title></head>", self.document.title())?;
        Ok(())
    }

    fn output_body_start(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "<body>")?;
        Ok(())
    }

    fn output_body_end(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "</body>")?;
        Ok(())
    }

    fn output_end(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "</html>")?;
        Ok(())
    }
}
