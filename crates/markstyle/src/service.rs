//! RichTextService - the main entry point for Markdown to rich-text conversion.

use markstyle_core::{Node, Options, Rendered};

use crate::apply::{apply_styles, TextStyler};
use crate::Result;

/// The main service for converting Markdown into styled rich text
pub struct RichTextService {
    options: Options,
}

impl RichTextService {
    /// Create a new RichTextService with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a RichTextService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Render an AST to plain text and style ranges
    pub fn render(&self, node: &Node) -> Rendered {
        markstyle_core::render(node, &self.options)
    }

    /// Render an mdast JSON document
    pub fn render_json(&self, json: &str) -> Result<Rendered> {
        let node = Node::from_json(json)?;
        Ok(self.render(&node))
    }

    /// Parse and render a Markdown string
    #[cfg(feature = "markdown")]
    pub fn render_markdown(&self, markdown: &str) -> Rendered {
        self.render(&crate::markdown::parse_markdown(markdown))
    }

    /// Render an AST and insert it into the editor behind `styler`
    pub async fn insert<S>(&self, styler: &S, node: &Node) -> Result<S::Handle>
    where
        S: TextStyler + ?Sized,
    {
        let rendered = self.render(node);
        apply_styles(styler, &rendered.text, &rendered.ranges).await
    }

    /// Parse a Markdown string and insert it into the editor behind `styler`
    #[cfg(feature = "markdown")]
    pub async fn insert_markdown<S>(&self, styler: &S, markdown: &str) -> Result<S::Handle>
    where
        S: TextStyler + ?Sized,
    {
        let rendered = self.render_markdown(markdown);
        apply_styles(styler, &rendered.text, &rendered.ranges).await
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Default for RichTextService {
    fn default() -> Self {
        Self::new()
    }
}
