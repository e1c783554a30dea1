//! markstyle-core - Markdown AST and plain-text projection
//!
//! This crate provides the Markdown AST, the style range model, and the
//! single-pass renderer that flattens an AST into plain text plus the style
//! ranges indexing into it. It is used by `markstyle`, which adds CommonMark
//! parsing and the adapter that drives a rich-text editor.
//!
//! # Architecture
//!
//! ```text
//! mdast JSON ──from_json──▶ ┌──────────────┐          ┌ plain text
//!                           │ Markdown AST │ ─render─▶┤
//! CommonMark ──markstyle──▶ └──────────────┘          └ style ranges
//! ```
//!
//! # Example
//!
//! ```rust
//! use markstyle_core::{render, Node, Options, StyleDescriptor};
//!
//! let ast = Node::Root(vec![
//!     Node::heading(1, vec![Node::text("Title")]),
//!     Node::Paragraph(vec![
//!         Node::Strong(vec![Node::text("bold")]),
//!         Node::text(" text"),
//!     ]),
//! ]);
//!
//! let rendered = render(&ast, &Options::default());
//! assert_eq!(rendered.text, "Title\n\nbold text");
//! assert_eq!(rendered.ranges[1].style, StyleDescriptor::Strong);
//! ```

mod ast;
mod options;
mod render;
mod style;

pub use ast::Node;
pub use options::{OffsetUnit, Options};
pub use render::{
    collapse_whitespace, plain_text, render, style_ranges, Rendered, BLOCK_SEPARATOR,
    LIST_ITEM_SEPARATOR,
};
pub use style::{StyleDescriptor, StyleRange};

/// Error type for malformed Markdown ASTs
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    #[error("Malformed AST JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{kind}` node is missing field `{field}`")]
    MissingField { kind: String, field: &'static str },

    #[error("`heading` node has depth {depth}, expected 1-6")]
    InvalidHeadingDepth { depth: u64 },
}

pub type Result<T> = std::result::Result<T, AstError>;
