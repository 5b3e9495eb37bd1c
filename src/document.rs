use crate::constants::sample;

/// A titled document made of an ordered list of text lines.
///
/// Documents are immutable once built; renderers only borrow them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    body: Vec<String>,
}

impl Document {
    pub fn new<T, I, L>(title: T, body: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Document {
            title: title.into(),
            body: body.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in sample document ("Document Title" with two lines).
    pub fn sample() -> Self {
        Document::new(sample::TITLE, sample::BODY)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::sample()
    }
}
