//! `docstep` renders documents through a fixed sequence of output steps.
//!
//! Every rendering runs the same skeleton: start, head, body start, body,
//! body end and end. Renderers implement `renderer::DocumentRenderer` and only
//! override the steps whose output differs for their format; the body step,
//! which writes each line in order, is shared by all of them.
//!
//! Built-in renderers live in `formats` (XML, HTML and plain text). The `hooks`
//! module builds the same renderers out of step callbacks instead of types.
//!
//! "Hello world" example:
//! ```
//! use docstep::prelude::*;
//! use docstep::formats::XmlDocument;
//!
//! let output = XmlDocument::new(Document::new("Hello", ["world"]))
//!     .render_to_string()
//!     .unwrap();
//! assert_eq!(
//!     output,
//!     "<document>\n<title>Hello</title>\n<text>\nworld\n</text>\n</document>\n"
//! );
//! ```

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod formats;
pub mod hooks;
pub mod log;
pub mod renderer;

/// The docstep prelude
///
/// This module re-exports the most commonly used items from docstep.
/// You can use it with `use docstep::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::renderer::{DocumentRenderer, Render};

    // Re-export commonly used types
    pub use crate::document::Document;
    pub use crate::error::Result;
    pub use crate::formats::Format;
    pub use crate::renderer::Step;
}
