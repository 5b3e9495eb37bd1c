use std::io::Write;

use strum_macros::Display;

use crate::debug;
use crate::document::Document;
use crate::error::*;

/// The steps every rendering goes through, in the order they are run.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Step {
    Start,
    Head,
    BodyStart,
    Body,
    BodyEnd,
    End,
}

impl Step {
    /// Fixed order of the rendering skeleton. Shared by all renderers.
    pub const ORDER: [Step; 6] = [
        Step::Start,
        Step::Head,
        Step::BodyStart,
        Step::Body,
        Step::BodyEnd,
        Step::End,
    ];
}

/// Overridable steps of a document rendering.
///
/// Implementors only provide access to their document and override the steps
/// whose output differs for their format. Every step defaults to writing
/// nothing, except `output_line` which writes the line as is.
///
/// The rendering order itself is not part of this trait: it lives in [`Render`],
/// which is implemented for every `DocumentRenderer` and cannot be redefined.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use docstep::prelude::*;
///
/// struct Shouting(Document);
///
/// impl DocumentRenderer for Shouting {
///     fn document(&self) -> &Document {
///         &self.0
///     }
///
///     fn output_head(&self, out: &mut dyn Write) -> Result<()> {
///         writeln!(out, "{}!", self.0.title().to_uppercase())?;
///         Ok(())
///     }
/// }
///
/// let output = Shouting(Document::new("hi", ["there"])).render_to_string().unwrap();
/// assert_eq!(output, "HI!\nthere\n");
/// ```
pub trait DocumentRenderer {
    /// The document being rendered
    fn document(&self) -> &Document;

    fn output_start(&self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn output_head(&self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn output_body_start(&self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    /// Writes a single body line
    fn output_line(&self, line: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", line)?;
        Ok(())
    }

    fn output_body_end(&self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn output_end(&self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}

/// The invariant rendering algorithm, available on every [`DocumentRenderer`].
pub trait Render: DocumentRenderer {
    /// Renders the document into the given sink running all the steps in
    /// [`Step::ORDER`].
    ///
    /// # Arguments
    /// * `out` - The sink receiving the rendered text
    ///
    /// # Returns
    /// An error only if writing to the sink fails
    fn render(&self, out: &mut dyn Write) -> Result<()>;

    /// Runs a single step of the skeleton
    fn output_step(&self, step: Step, out: &mut dyn Write) -> Result<()>;

    /// Writes every body line through `output_line`, keeping their order
    fn output_body(&self, out: &mut dyn Write) -> Result<()>;

    /// Renders the document into a new string
    fn render_to_string(&self) -> Result<String>;

    /// Renders the document to the standard output
    fn print(&self) -> Result<()>;
}

impl<T: DocumentRenderer + ?Sized> Render for T {
    fn render(&self, out: &mut dyn Write) -> Result<()> {
        debug!(
            "Rendering \"{}\" with {}",
            self.document().title(),
            std::any::type_name::<T>()
        );
        Step::ORDER
            .iter()
            .try_for_each(|step| self.output_step(*step, out))
    }

    fn output_step(&self, step: Step, out: &mut dyn Write) -> Result<()> {
        debug!("Step: {}", step);
        match step {
            Step::Start => self.output_start(out),
            Step::Head => self.output_head(out),
            Step::BodyStart => self.output_body_start(out),
            Step::Body => self.output_body(out),
            Step::BodyEnd => self.output_body_end(out),
            Step::End => self.output_end(out),
        }
    }

    fn output_body(&self, out: &mut dyn Write) -> Result<()> {
        self.document()
            .body()
            .iter()
            .try_for_each(|line| self.output_line(line, out))
    }

    fn render_to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Msg(e.to_string()))
    }

    fn print(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render(&mut handle)?;
        handle.flush()?;
        Ok(())
    }
}
