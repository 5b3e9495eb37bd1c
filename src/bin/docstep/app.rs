use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use docstep::{
    debug,
    document::Document,
    error::*,
    formats::Format,
    hooks::{HookedDocument, Hooks},
    renderer::{DocumentRenderer, Render},
};

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Self {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        App {
            matches: Self::matches(interactive_output),
        }
    }

    pub fn matches(interactive_output: bool) -> ArgMatches {
        clap_app::build_app(interactive_output).get_matches()
    }

    /// Builds the document from the configuration, replacing the title and
    /// body with the ones supplied in the command line (if any).
    fn build_document(&self, bootstrap: &BootStrap) -> Document {
        let configured = bootstrap.get_config().document();

        let title = self
            .matches
            .get_one::<String>("title")
            .map(|s| s.as_str())
            .unwrap_or(configured.title());

        match self.matches.get_many::<String>("line") {
            Some(lines) => Document::new(title, lines.cloned()),
            None => Document::new(title, configured.body().iter().cloned()),
        }
    }

    /// Resolves the format from the command line, then the configuration.
    fn resolve_format(&self, bootstrap: &BootStrap) -> Result<Format> {
        match self.matches.get_one::<String>("format") {
            Some(name) => name.parse(),
            None => bootstrap.get_config().format(),
        }
    }

    fn build_renderer(&self, format: Format, document: Document) -> Box<dyn DocumentRenderer> {
        if self.matches.get_flag("hooks") {
            Box::new(HookedDocument::new(document, Hooks::for_format(format)))
        } else {
            format.renderer(document)
        }
    }

    /// Renders the document into the given sink, either once in the resolved
    /// format or once per format (separated by an empty line) when `--all` is set.
    fn render_documents(&self, bootstrap: &BootStrap, out: &mut dyn Write) -> Result<()> {
        let document = self.build_document(bootstrap);

        if self.matches.get_flag("all") {
            for (i, format) in Format::ALL.into_iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                debug!("Rendering format {}", format);
                self.build_renderer(format, document.clone()).render(out)?;
            }
            Ok(())
        } else {
            let format = self.resolve_format(bootstrap)?;
            debug!("Rendering format {}", format);
            self.build_renderer(format, document).render(out)
        }
    }

    /// Start the application, loads the configuration and renders the document
    /// to the standard output.
    pub fn start(&self) -> Result<()> {
        let config_file = self.matches.get_one::<String>("config").map(PathBuf::from);
        let bootstrap = BootStrap::new(config_file.as_deref())?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render_documents(&bootstrap, &mut handle)?;
        handle.flush()?;
        Ok(())
    }
}
