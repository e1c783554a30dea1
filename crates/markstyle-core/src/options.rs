//! Configuration options for plain-text rendering

/// Unit in which style range offsets are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetUnit {
    /// UTF-16 code units, matching JavaScript `string.length`
    #[default]
    Utf16,
    /// Unicode scalar values
    Char,
    /// UTF-8 bytes, matching Rust string indexing
    Byte,
}

impl OffsetUnit {
    /// Length of `text` in this unit
    pub fn measure(self, text: &str) -> usize {
        match self {
            OffsetUnit::Utf16 => text.encode_utf16().count(),
            OffsetUnit::Char => text.chars().count(),
            OffsetUnit::Byte => text.len(),
        }
    }
}

/// Options for plain-text rendering
#[derive(Debug, Clone)]
pub struct Options {
    /// Marker emitted before each unordered list item
    pub bullet_marker: String,

    /// Unit for style range offsets
    pub offset_unit: OffsetUnit,

    /// Collapse whitespace runs inside text leaves to a single space
    pub collapse_whitespace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_marker: "• ".to_string(),
            offset_unit: OffsetUnit::Utf16,
            collapse_whitespace: false,
        }
    }
}
