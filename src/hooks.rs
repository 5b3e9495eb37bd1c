//! Renderers assembled from step callbacks instead of dedicated types.
//!
//! A [`Hooks`] set holds one optional callback per overridable step. Missing
//! callbacks write nothing. [`HookedDocument`] plugs a hook set into the same
//! rendering skeleton used by the format types, so both approaches produce the
//! exact same output for the same steps.

use std::io::Write;

use crate::document::Document;
use crate::error::Result;
use crate::formats::Format;
use crate::renderer::DocumentRenderer;

/// Callback writing one step of the rendering
pub type StepFn = Box<dyn Fn(&Document, &mut dyn Write) -> Result<()>>;

/// Optional callbacks for the overridable steps; unset steps write nothing.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use docstep::hooks::{HookedDocument, Hooks};
/// use docstep::prelude::*;
///
/// let hooks = Hooks::new().head(|doc, out| {
///     writeln!(out, "== {} ==", doc.title())?;
///     Ok(())
/// });
/// let output = HookedDocument::new(Document::new("Notes", ["a"]), hooks)
///     .render_to_string()
///     .unwrap();
/// assert_eq!(output, "== Notes ==\na\n");
/// ```
#[derive(Default)]
pub struct Hooks {
    start: Option<StepFn>,
    head: Option<StepFn>,
    body_start: Option<StepFn>,
    body_end: Option<StepFn>,
    end: Option<StepFn>,
}

impl Hooks {
    /// An empty hook set, rendering only the body lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback run before anything else
    pub fn start<F>(mut self, f: F) -> Self
    where
        F: Fn(&Document, &mut dyn Write) -> Result<()> + 'static,
    {
        self.start = Some(Box::new(f));
        self
    }

    /// Sets the callback writing the document head
    pub fn head<F>(mut self, f: F) -> Self
    where
        F: Fn(&Document, &mut dyn Write) -> Result<()> + 'static,
    {
        self.head = Some(Box::new(f));
        self
    }

    /// Sets the callback run right before the body lines
    pub fn body_start<F>(mut self, f: F) -> Self
    where
        F: Fn(&Document, &mut dyn Write) -> Result<()> + 'static,
    {
        self.body_start = Some(Box::new(f));
        self
    }

    /// Sets the callback run right after the body lines
    pub fn body_end<F>(mut self, f: F) -> Self
    where
        F: Fn(&Document, &mut dyn Write) -> Result<()> + 'static,
    {
        self.body_end = Some(Box::new(f));
        self
    }

    /// Sets the callback run last
    pub fn end<F>(mut self, f: F) -> Self
    where
        F: Fn(&Document, &mut dyn Write) -> Result<()> + 'static,
    {
        self.end = Some(Box::new(f));
        self
    }

    /// Hook set producing the same output as [`crate::formats::XmlDocument`]
    pub fn xml() -> Self {
        Hooks::new()
            .start(fixed("<document>"))
            .head(|doc, out| {
                writeln!(out, "<title>{}</title>", doc.title())?;
                Ok(())
            })
            .body_start(fixed("<text>"))
            .body_end(fixed("</text>"))
            .end(fixed("</document>"))
    }

    /// Hook set producing the same output as [`crate::formats::HtmlDocument`]
    pub fn html() -> Self {
        Hooks::new()
            .start(fixed("<html>"))
            .head(|doc, out| {
                writeln!(out, "<head><title>{}</title></head>", doc.title())?;
                Ok(())
            })
            .body_start(fixed("<body>"))
            .body_end(fixed("</body>"))
            .end(fixed("</html>"))
    }

    /// Hook set producing the same output as [`crate::formats::PlainDocument`]
    pub fn plain() -> Self {
        Hooks::new().head(|doc, out| {
            writeln!(out, "{}", doc.title())?;
            Ok(())
        })
    }

    /// Hook set matching the built-in renderer of the given format
    pub fn for_format(format: Format) -> Self {
        match format {
            Format::Xml => Hooks::xml(),
            Format::Html => Hooks::html(),
            Format::PlainText => Hooks::plain(),
        }
    }

    fn run(hook: &Option<StepFn>, document: &Document, out: &mut dyn Write) -> Result<()> {
        match hook {
            Some(f) => f(document, out),
            None => Ok(()),
        }
    }
}

/// Callback writing a constant line
fn fixed(text: &'static str) -> impl Fn(&Document, &mut dyn Write) -> Result<()> {
    move |_, out| {
        writeln!(out, "{}", text)?;
        Ok(())
    }
}

/// Renderer delegating each step to a [`Hooks`] set.
pub struct HookedDocument {
    document: Document,
    hooks: Hooks,
}

impl HookedDocument {
    /// Wraps the document with the given hooks
    pub fn new(document: Document, hooks: Hooks) -> Self {
        Self { document, hooks }
    }
}

impl DocumentRenderer for HookedDocument {
    fn document(&self) -> &Document {
        &self.document
    }

    fn output_start(&self, out: &mut dyn Write) -> Result<()> {
        Hooks::run(&self.hooks.start, &self.document, out)
    }

    fn output_head(&self, out: &mut dyn Write) -> Result<()> {
        Hooks::run(&self.hooks.head, &self.document, out)
    }

    fn output_body_start(&self, out: &mut dyn Write) -> Result<()> {
        Hooks::run(&self.hooks.body_start, &self.document, out)
    }

    fn output_body_end(&self, out: &mut dyn Write) -> Result<()> {
        Hooks::run(&self.hooks.body_end, &self.document, out)
    }

    fn output_end(&self, out: &mut dyn Write) -> Result<()> {
        Hooks::run(&self.hooks.end, &self.document, out)
    }
}
