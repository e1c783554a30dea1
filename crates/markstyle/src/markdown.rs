//! Markdown parsing support.
//!
//! This module parses CommonMark strings with pulldown-cmark and builds the
//! mdast-shaped [`Node`] tree used by markstyle.

use markstyle_core::Node;
use pulldown_cmark::{Event, Options as ParserOptions, Parser, Tag};
use tracing::warn;

/// Parse a Markdown string into a Node tree.
///
/// # Example
///
/// ```rust
/// use markstyle::{parse_markdown, RichTextService};
///
/// let node = parse_markdown("# Hello *World*");
///
/// let service = RichTextService::new();
/// let rendered = service.render(&node);
/// assert_eq!(rendered.text, "Hello World");
/// ```
pub fn parse_markdown(markdown: &str) -> Node {
    let options = ParserOptions::ENABLE_TABLES | ParserOptions::ENABLE_STRIKETHROUGH;

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(markdown, options) {
        builder.event(event);
    }
    builder.finish()
}

/// What an open element becomes once its end event arrives
enum FrameKind {
    Root,
    Paragraph,
    Heading(u8),
    Emphasis,
    Strong,
    List { ordered: bool },
    Item,
    Link(String),
    /// Unrecognised container, keeps its children
    Container(&'static str),
    /// Node whose content is dropped (code blocks, images, raw HTML)
    Leaf(&'static str),
}

struct Frame {
    kind: FrameKind,
    children: Vec<Node>,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    fn into_node(self) -> Node {
        match self.kind {
            FrameKind::Root => Node::Root(self.children),
            FrameKind::Paragraph => Node::Paragraph(self.children),
            FrameKind::Heading(depth) => Node::heading(depth, self.children),
            FrameKind::Emphasis => Node::Emphasis(self.children),
            FrameKind::Strong => Node::Strong(self.children),
            FrameKind::List { ordered } => Node::list(ordered, self.children),
            FrameKind::Item => Node::ListItem(wrap_inlines(self.children)),
            FrameKind::Link(url) => Node::Link {
                url,
                children: self.children,
            },
            FrameKind::Container(kind) => Node::other(kind, self.children),
            FrameKind::Leaf(kind) => Node::other(kind, Vec::new()),
        }
    }
}

/// Builds the tree from start/end events with a stack of open frames
struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::new(FrameKind::Root)],
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.stack.push(Frame::new(frame_kind(tag))),
            Event::End(_) => self.close(),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push(Node::InlineCode(code.into_string())),
            Event::SoftBreak => self.push_text("\n"),
            Event::HardBreak => self.push(Node::other("break", Vec::new())),
            Event::Rule => self.push(Node::other("thematicBreak", Vec::new())),
            // Block HTML arrives inside an `HtmlBlock` frame and is dropped with it
            Event::InlineHtml(_) => self.push(Node::other("html", Vec::new())),
            _ => {}
        }
    }

    fn top(&mut self) -> &mut Frame {
        // The root frame is never popped before `finish`
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn push(&mut self, node: Node) {
        self.top().children.push(node);
    }

    /// Append text, merging with a preceding text node
    fn push_text(&mut self, text: &str) {
        let children = &mut self.top().children;
        if let Some(Node::Text(prev)) = children.last_mut() {
            prev.push_str(text);
        } else {
            children.push(Node::text(text));
        }
    }

    fn close(&mut self) {
        if self.stack.len() <= 1 {
            warn!("unbalanced end event in markdown stream");
            return;
        }
        if let Some(frame) = self.stack.pop() {
            let node = frame.into_node();
            self.push(node);
        }
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close();
        }
        match self.stack.pop() {
            Some(root) => root.into_node(),
            None => Node::Root(Vec::new()),
        }
    }
}

fn frame_kind(tag: Tag<'_>) -> FrameKind {
    match tag {
        Tag::Paragraph => FrameKind::Paragraph,
        Tag::Heading { level, .. } => FrameKind::Heading(level as u8),
        Tag::Emphasis => FrameKind::Emphasis,
        Tag::Strong => FrameKind::Strong,
        Tag::List(start) => FrameKind::List {
            ordered: start.is_some(),
        },
        Tag::Item => FrameKind::Item,
        Tag::Link { dest_url, .. } => FrameKind::Link(dest_url.into_string()),
        Tag::BlockQuote(_) => FrameKind::Container("blockquote"),
        Tag::Strikethrough => FrameKind::Container("delete"),
        Tag::Table(_) => FrameKind::Container("table"),
        Tag::TableHead | Tag::TableRow => FrameKind::Container("tableRow"),
        Tag::TableCell => FrameKind::Container("tableCell"),
        Tag::FootnoteDefinition(_) => FrameKind::Container("footnoteDefinition"),
        Tag::CodeBlock(_) => FrameKind::Leaf("code"),
        Tag::HtmlBlock => FrameKind::Leaf("htmlBlock"),
        Tag::Image { .. } => FrameKind::Leaf("image"),
        _ => FrameKind::Container("unknown"),
    }
}

/// Wrap runs of inline content in paragraphs (tight list items)
fn wrap_inlines(children: Vec<Node>) -> Vec<Node> {
    let mut blocks = Vec::new();
    let mut run = Vec::new();

    for child in children {
        if child.is_inline() {
            run.push(child);
        } else {
            if !run.is_empty() {
                blocks.push(Node::Paragraph(std::mem::take(&mut run)));
            }
            blocks.push(child);
        }
    }

    if !run.is_empty() {
        blocks.push(Node::Paragraph(run));
    }

    blocks
}
