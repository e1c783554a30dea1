//! Markdown Abstract Syntax Tree
//!
//! This module defines the mdast-shaped nodes consumed by the renderer.
//! Nodes are read-only input: they come from an external parser (remark JSON
//! via [`Node::from_json`], or the `markstyle` CommonMark bridge) and are never
//! mutated by rendering.

use serde::Deserialize;

use crate::{AstError, Result};

/// A Markdown node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Root document container
    Root(Vec<Node>),

    /// Paragraph containing inline content
    Paragraph(Vec<Node>),

    /// Heading with depth (1-6) and inline content
    Heading { depth: u8, children: Vec<Node> },

    /// Plain text
    Text(String),

    /// Emphasis (italic)
    Emphasis(Vec<Node>),

    /// Strong emphasis (bold)
    Strong(Vec<Node>),

    /// List (ordered or unordered) containing list items
    List { ordered: bool, children: Vec<Node> },

    /// A list item containing blocks
    ListItem(Vec<Node>),

    /// Inline code
    InlineCode(String),

    /// Link with URL and inline content
    Link { url: String, children: Vec<Node> },

    /// Any other mdast node type (`blockquote`, `code`, `break`, `table`, ...)
    ///
    /// Containers pass their children through; leaves contribute nothing.
    Other { kind: String, children: Vec<Node> },
}

impl Node {
    pub fn text(value: &str) -> Self {
        Node::Text(value.to_string())
    }

    pub fn inline_code(value: &str) -> Self {
        Node::InlineCode(value.to_string())
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading { depth, children }
    }

    pub fn list(ordered: bool, children: Vec<Node>) -> Self {
        Node::List { ordered, children }
    }

    /// Create a list item holding a single paragraph
    pub fn item_from_inlines(inlines: Vec<Node>) -> Self {
        Node::ListItem(vec![Node::Paragraph(inlines)])
    }

    pub fn link(url: &str, children: Vec<Node>) -> Self {
        Node::Link {
            url: url.to_string(),
            children,
        }
    }

    /// Create a node of an unrecognised type
    pub fn other(kind: &str, children: Vec<Node>) -> Self {
        Node::Other {
            kind: kind.to_string(),
            children,
        }
    }

    /// The mdast `type` discriminator of this node
    pub fn kind(&self) -> &str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph(_) => "paragraph",
            Node::Heading { .. } => "heading",
            Node::Text(_) => "text",
            Node::Emphasis(_) => "emphasis",
            Node::Strong(_) => "strong",
            Node::List { .. } => "list",
            Node::ListItem(_) => "listItem",
            Node::InlineCode(_) => "inlineCode",
            Node::Link { .. } => "link",
            Node::Other { kind, .. } => kind.as_str(),
        }
    }

    /// Child nodes (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children)
            | Node::Paragraph(children)
            | Node::Emphasis(children)
            | Node::Strong(children)
            | Node::ListItem(children)
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::Link { children, .. }
            | Node::Other { children, .. } => children,
            Node::Text(_) | Node::InlineCode(_) => &[],
        }
    }

    /// Whether a blank line follows this node when it is a non-final root child
    pub fn is_separated_block(&self) -> bool {
        matches!(
            self,
            Node::Paragraph(_) | Node::Heading { .. } | Node::List { .. }
        )
    }

    /// Whether this node is phrasing (inline) content
    pub fn is_inline(&self) -> bool {
        match self {
            Node::Text(_)
            | Node::Emphasis(_)
            | Node::Strong(_)
            | Node::InlineCode(_)
            | Node::Link { .. } => true,
            Node::Other { kind, .. } => {
                matches!(kind.as_str(), "break" | "delete" | "image" | "html")
            }
            _ => false,
        }
    }

    /// Parse an mdast JSON document (as produced by remark)
    pub fn from_json(json: &str) -> Result<Node> {
        let raw: RawNode = serde_json::from_str(json)?;
        Node::try_from(raw)
    }
}

/// Loosely typed mdast node as it appears on the wire
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    children: Option<Vec<RawNode>>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    depth: Option<u64>,
    #[serde(default)]
    ordered: Option<bool>,
    #[serde(default)]
    url: Option<String>,
}

fn required_value(kind: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| AstError::MissingField {
        kind: kind.to_string(),
        field: "value",
    })
}

impl TryFrom<RawNode> for Node {
    type Error = AstError;

    fn try_from(mut raw: RawNode) -> Result<Node> {
        let children = raw
            .children
            .take()
            .unwrap_or_default()
            .into_iter()
            .map(Node::try_from)
            .collect::<Result<Vec<_>>>()?;

        let node = match raw.kind.as_str() {
            "root" => Node::Root(children),
            "paragraph" => Node::Paragraph(children),
            "heading" => {
                let depth = raw.depth.ok_or_else(|| AstError::MissingField {
                    kind: raw.kind.clone(),
                    field: "depth",
                })?;
                if !(1..=6).contains(&depth) {
                    return Err(AstError::InvalidHeadingDepth { depth });
                }
                Node::Heading {
                    depth: depth as u8,
                    children,
                }
            }
            "text" => Node::Text(required_value(&raw.kind, raw.value.take())?),
            "emphasis" => Node::Emphasis(children),
            "strong" => Node::Strong(children),
            "list" => Node::List {
                ordered: raw.ordered.unwrap_or(false),
                children,
            },
            "listItem" => Node::ListItem(children),
            "inlineCode" => Node::InlineCode(required_value(&raw.kind, raw.value.take())?),
            "link" => Node::Link {
                url: raw.url.unwrap_or_default(),
                children,
            },
            _ => Node::Other {
                kind: raw.kind.clone(),
                children,
            },
        };

        Ok(node)
    }
}
