//! Style ranges
//!
//! A [`StyleRange`] marks `[start, end)` of the rendered plain text with one
//! [`StyleDescriptor`]. Ranges are recorded independently per node, so they
//! may overlap (strong inside emphasis yields two ranges over the same span).
//! Consumers apply them additively; they never partition the text.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The formatting a range carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDescriptor {
    /// Heading with level (1-6)
    Heading { level: u8 },
    /// Italic text
    Emphasis,
    /// Bold text
    Strong,
    /// List spanning from the first marker to the end of the last item
    List { ordered: bool },
    /// Inline code
    Code,
    /// Hyperlink
    Link { url: String },
}

impl StyleDescriptor {
    /// The wire `type` name of this descriptor
    pub fn type_name(&self) -> &'static str {
        match self {
            StyleDescriptor::Heading { .. } => "heading",
            StyleDescriptor::Emphasis => "emphasis",
            StyleDescriptor::Strong => "strong",
            StyleDescriptor::List { .. } => "list",
            StyleDescriptor::Code => "code",
            StyleDescriptor::Link { .. } => "link",
        }
    }
}

impl Serialize for StyleDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.type_name())?;
        match self {
            StyleDescriptor::Heading { level } => map.serialize_entry("level", level)?,
            StyleDescriptor::Emphasis => map.serialize_entry("italic", &true)?,
            StyleDescriptor::Strong => map.serialize_entry("bold", &true)?,
            StyleDescriptor::List { ordered } => map.serialize_entry("ordered", ordered)?,
            StyleDescriptor::Code => map.serialize_entry("isInline", &true)?,
            StyleDescriptor::Link { url } => map.serialize_entry("url", url)?,
        }
        map.end()
    }
}

/// A styled span of the rendered text, in the configured offset unit
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    pub style: StyleDescriptor,
}

impl StyleRange {
    pub fn new(start: usize, end: usize, style: StyleDescriptor) -> Self {
        Self { start, end, style }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if two ranges share at least one offset
    pub fn overlaps(&self, other: &StyleRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}
