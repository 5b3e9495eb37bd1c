use std::io::Write;

use crate::document::Document;
use crate::error::Result;
use crate::renderer::DocumentRenderer;

/// Renders the bare title followed by the body lines, without any markup.
pub struct PlainDocument {
    document: Document,
}

impl PlainDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentRenderer for PlainDocument {
    fn document(&self) -> &Document {
        &self.document
    }

    fn output_head(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.document.title())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Render, Step};

    #[test]
    fn test_plain_sample() {
        let output = PlainDocument::new(Document::sample())
            .render_to_string()
            .unwrap();
        assert_eq!(output, "Document Title\nThis is line 1\nThis is line 2\n");
    }

    #[test]
    fn test_plain_skips_wrapping_steps() {
        let renderer = PlainDocument::new(Document::sample());
        for step in [Step::Start, Step::BodyStart, Step::BodyEnd, Step::End] {
            let mut buffer = Vec::new();
            renderer.output_step(step, &mut buffer).unwrap();
            assert!(buffer.is_empty(), "step {} wrote output", step);
        }
    }

    #[test]
    fn test_plain_lines_unmodified() {
        let output = PlainDocument::new(Document::new("T", ["  <b>raw</b>  "]))
            .render_to_string()
            .unwrap();
        assert_eq!(output, "T\n  <b>raw</b>  \n");
    }
}
