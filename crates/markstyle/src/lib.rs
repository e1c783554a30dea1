//! # markstyle
//!
//! Convert Markdown into plain text plus style ranges for rich-text editors.
//!
//! Editors that style text by character range (rather than by markup) need
//! two things from a Markdown document: the flattened text, and a list of
//! `{start, end, style}` ranges into it. This crate produces both in one pass
//! and can drive any editor API through the [`TextStyler`] trait.
//!
//! ## Example (Markdown string)
//!
//! ```rust
//! use markstyle::{RichTextService, StyleDescriptor};
//!
//! let service = RichTextService::new();
//! let rendered = service.render_markdown("# Title\n\n**bold** text");
//!
//! assert_eq!(rendered.text, "Title\n\nbold text");
//! assert_eq!(rendered.ranges[0].style, StyleDescriptor::Heading { level: 1 });
//! assert_eq!(rendered.ranges[1].style, StyleDescriptor::Strong);
//! ```
//!
//! ## Example (mdast JSON)
//!
//! ```rust
//! use markstyle::RichTextService;
//!
//! let service = RichTextService::new();
//! let rendered = service
//!     .render_json(r#"{"type": "inlineCode", "value": "x"}"#)
//!     .unwrap();
//! assert_eq!(rendered.text, "x");
//! ```

pub mod apply;
#[cfg(feature = "markdown")]
pub mod markdown;
mod service;
#[cfg(test)]
mod testing;

pub use apply::{apply_styles, StylerError, TextStyle, TextStyler};
#[cfg(feature = "markdown")]
pub use markdown::parse_markdown;
pub use markstyle_core::{
    plain_text, render, style_ranges, AstError, Node, OffsetUnit, Options, Rendered,
    StyleDescriptor, StyleRange,
};
pub use service::RichTextService;

/// Error type for markstyle operations
#[derive(Debug, thiserror::Error)]
pub enum MarkstyleError {
    #[error("Invalid AST: {0}")]
    Ast(#[from] AstError),

    #[error("Failed to create text node: {0}")]
    CreateTextNode(#[source] StylerError),

    #[error("Failed to apply {style} style (range {index}): {source}")]
    Styling {
        index: usize,
        style: &'static str,
        #[source]
        source: StylerError,
    },
}

pub type Result<T> = std::result::Result<T, MarkstyleError>;
