//! Markdown AST rendering
//!
//! Projects an AST onto a flattened plain-text string and the style ranges
//! that index into it. Text and ranges come out of the same pass, so range
//! offsets always agree with the text they describe.

use tracing::{debug, trace};

use crate::ast::Node;
use crate::options::Options;
use crate::style::{StyleDescriptor, StyleRange};

/// Separator emitted between block-level root children
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Separator emitted between list items
pub const LIST_ITEM_SEPARATOR: &str = "\n";

/// Plain text plus the style ranges that index into it
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Rendered {
    pub text: String,
    pub ranges: Vec<StyleRange>,
    /// Length of `text` in the configured offset unit
    pub length: usize,
}

/// Render a node to plain text and style ranges in a single pass
pub fn render(node: &Node, options: &Options) -> Rendered {
    let mut renderer = Renderer::new(options);
    renderer.node(node);

    debug!(
        length = renderer.offset,
        ranges = renderer.ranges.len(),
        "rendered markdown ast"
    );

    Rendered {
        text: renderer.text,
        ranges: renderer.ranges,
        length: renderer.offset,
    }
}

/// Extract the plain text of a node
pub fn plain_text(node: &Node, options: &Options) -> String {
    render(node, options).text
}

/// Collect the style ranges of a node, in the order their nodes close
pub fn style_ranges(node: &Node, options: &Options) -> Vec<StyleRange> {
    render(node, options).ranges
}

/// Traversal context: output text, running offset and collected ranges
struct Renderer<'a> {
    options: &'a Options,
    text: String,
    offset: usize,
    ranges: Vec<StyleRange>,
}

impl<'a> Renderer<'a> {
    fn new(options: &'a Options) -> Self {
        Self {
            options,
            text: String::new(),
            offset: 0,
            ranges: Vec::new(),
        }
    }

    fn emit(&mut self, s: &str) {
        self.text.push_str(s);
        self.offset += self.options.offset_unit.measure(s);
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Root(children) => {
                for (i, child) in children.iter().enumerate() {
                    self.node(child);
                    if i + 1 < children.len() && child.is_separated_block() {
                        self.emit(BLOCK_SEPARATOR);
                    }
                }
            }

            Node::Paragraph(children) | Node::ListItem(children) => self.nodes(children),

            Node::Heading { depth, children } => {
                self.styled(children, StyleDescriptor::Heading { level: *depth })
            }

            Node::Text(value) => {
                if self.options.collapse_whitespace {
                    self.emit(&collapse_whitespace(value));
                } else {
                    self.emit(value);
                }
            }

            Node::Emphasis(children) => self.styled(children, StyleDescriptor::Emphasis),

            Node::Strong(children) => self.styled(children, StyleDescriptor::Strong),

            Node::List { ordered, children } => self.list(*ordered, children),

            Node::InlineCode(value) => {
                let start = self.offset;
                self.emit(value);
                self.ranges
                    .push(StyleRange::new(start, self.offset, StyleDescriptor::Code));
            }

            Node::Link { url, children } => {
                self.styled(children, StyleDescriptor::Link { url: url.clone() })
            }

            Node::Other { kind, children } => {
                trace!(kind = kind.as_str(), "passing through node");
                self.nodes(children);
            }
        }
    }

    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.node(node);
        }
    }

    /// Render children, then record a range over everything they emitted
    fn styled(&mut self, children: &[Node], style: StyleDescriptor) {
        let start = self.offset;
        self.nodes(children);
        self.ranges.push(StyleRange::new(start, self.offset, style));
    }

    fn list(&mut self, ordered: bool, items: &[Node]) {
        let start = self.offset;

        for (index, item) in items.iter().enumerate() {
            if ordered {
                self.emit(&format!("{}. ", index + 1));
            } else {
                let options = self.options;
                self.emit(&options.bullet_marker);
            }

            match item {
                Node::ListItem(children) => self.nodes(children),
                other => self.node(other),
            }

            if index + 1 < items.len() {
                self.emit(LIST_ITEM_SEPARATOR);
            }
        }

        self.ranges.push(StyleRange::new(
            start,
            self.offset,
            StyleDescriptor::List { ordered },
        ));
    }
}

/// Collapse whitespace in text
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}
