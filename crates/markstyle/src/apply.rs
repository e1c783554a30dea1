//! Applying style ranges to a rich-text editor.
//!
//! [`TextStyler`] is the seam to the host editor (for example a document
//! sandbox proxy). [`apply_styles`] creates one text node holding the full
//! plain text, then awaits one styling call per range, in range order.
//!
//! Ranges may overlap. Stylers must apply them additively: a bold range
//! applied after an italic one over the same span leaves both attributes set.

use async_trait::async_trait;
use markstyle_core::{StyleDescriptor, StyleRange};
use tracing::{debug, error};

use crate::{MarkstyleError, Result};

/// Error reported by a [`TextStyler`] implementation
pub type StylerError = Box<dyn std::error::Error + Send + Sync>;

/// Character attributes for [`TextStyler::apply_text_style`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub italic: Option<bool>,
    pub bold: Option<bool>,
}

impl TextStyle {
    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Default::default()
        }
    }

    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Default::default()
        }
    }
}

/// A rich-text API that can hold text and style spans of it
#[async_trait]
pub trait TextStyler: Send + Sync {
    /// Handle to a text node created by this styler
    type Handle: Send + Sync;

    async fn create_text_node(&self, text: &str) -> std::result::Result<Self::Handle, StylerError>;

    async fn apply_heading_style(
        &self,
        node: &Self::Handle,
        start: usize,
        end: usize,
        level: u8,
    ) -> std::result::Result<(), StylerError>;

    async fn apply_text_style(
        &self,
        node: &Self::Handle,
        start: usize,
        end: usize,
        style: TextStyle,
    ) -> std::result::Result<(), StylerError>;

    async fn apply_link_style(
        &self,
        node: &Self::Handle,
        start: usize,
        end: usize,
        url: &str,
    ) -> std::result::Result<(), StylerError>;

    /// Style a list span. Stylers without list support return `Ok(())` here.
    async fn apply_list_style(
        &self,
        node: &Self::Handle,
        start: usize,
        end: usize,
        ordered: bool,
    ) -> std::result::Result<(), StylerError>;

    /// Style an inline code span. Stylers without code support return `Ok(())` here.
    async fn apply_code_style(
        &self,
        node: &Self::Handle,
        start: usize,
        end: usize,
    ) -> std::result::Result<(), StylerError>;
}

/// Create a text node for `text` and apply every range to it, in order.
///
/// The first failure is logged and returned. Ranges applied before it stay
/// applied; ranges after it are never attempted.
pub async fn apply_styles<S>(styler: &S, text: &str, ranges: &[StyleRange]) -> Result<S::Handle>
where
    S: TextStyler + ?Sized,
{
    let node = match styler.create_text_node(text).await {
        Ok(node) => node,
        Err(source) => {
            error!(error = %source, "failed to create text node");
            return Err(MarkstyleError::CreateTextNode(source));
        }
    };

    for (index, range) in ranges.iter().enumerate() {
        if let Err(source) = apply_range(styler, &node, range).await {
            error!(
                index,
                style = range.style.type_name(),
                start = range.start,
                end = range.end,
                error = %source,
                "failed to apply style range"
            );
            return Err(MarkstyleError::Styling {
                index,
                style: range.style.type_name(),
                source,
            });
        }
    }

    debug!(ranges = ranges.len(), "applied style ranges");
    Ok(node)
}

async fn apply_range<S>(
    styler: &S,
    node: &S::Handle,
    range: &StyleRange,
) -> std::result::Result<(), StylerError>
where
    S: TextStyler + ?Sized,
{
    let (start, end) = (range.start, range.end);

    match &range.style {
        StyleDescriptor::Heading { level } => {
            styler.apply_heading_style(node, start, end, *level).await
        }
        StyleDescriptor::Emphasis => {
            styler
                .apply_text_style(node, start, end, TextStyle::italic())
                .await
        }
        StyleDescriptor::Strong => {
            styler
                .apply_text_style(node, start, end, TextStyle::bold())
                .await
        }
        StyleDescriptor::List { ordered } => {
            styler.apply_list_style(node, start, end, *ordered).await
        }
        StyleDescriptor::Code => styler.apply_code_style(node, start, end).await,
        StyleDescriptor::Link { url } => styler.apply_link_style(node, start, end, url).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingStyler};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ranges() -> Vec<StyleRange> {
        vec![
            StyleRange::new(0, 5, StyleDescriptor::Heading { level: 1 }),
            StyleRange::new(7, 11, StyleDescriptor::Strong),
            StyleRange::new(7, 11, StyleDescriptor::Emphasis),
            StyleRange::new(12, 15, StyleDescriptor::Code),
            StyleRange::new(
                16,
                18,
                StyleDescriptor::Link {
                    url: "https://example.com".to_string(),
                },
            ),
            StyleRange::new(0, 18, StyleDescriptor::List { ordered: true }),
        ]
    }

    #[tokio::test]
    async fn test_applies_every_range_in_order() {
        let styler = RecordingStyler::default();
        let handle = apply_styles(&styler, "text", &ranges()).await.unwrap();
        assert_eq!(handle, 1);
        assert_eq!(
            styler.calls(),
            vec![
                Call::Create("text".to_string()),
                Call::Heading {
                    start: 0,
                    end: 5,
                    level: 1
                },
                Call::Text {
                    start: 7,
                    end: 11,
                    style: TextStyle::bold()
                },
                Call::Text {
                    start: 7,
                    end: 11,
                    style: TextStyle::italic()
                },
                Call::Code { start: 12, end: 15 },
                Call::Link {
                    start: 16,
                    end: 18,
                    url: "https://example.com".to_string()
                },
                Call::List {
                    start: 0,
                    end: 18,
                    ordered: true
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_without_rollback() {
        let styler = RecordingStyler {
            fail_at: Some(2),
            ..Default::default()
        };
        let err = apply_styles(&styler, "text", &ranges()).await.unwrap_err();

        assert!(matches!(
            err,
            MarkstyleError::Styling {
                index: 2,
                style: "emphasis",
                ..
            }
        ));
        // Create, heading and strong were applied and stay applied
        assert_eq!(styler.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_create_failure() {
        let styler = RecordingStyler {
            fail_create: true,
            ..Default::default()
        };
        let err = apply_styles(&styler, "text", &ranges()).await.unwrap_err();
        assert!(matches!(err, MarkstyleError::CreateTextNode(_)));
        assert!(styler.calls().is_empty());
    }

    /// Styler without list or code support, counting the calls it ignores
    #[derive(Default)]
    struct NoListOrCodeStyler {
        ignored: AtomicUsize,
    }

    #[async_trait]
    impl TextStyler for NoListOrCodeStyler {
        type Handle = ();

        async fn create_text_node(&self, _text: &str) -> std::result::Result<(), StylerError> {
            Ok(())
        }

        async fn apply_heading_style(
            &self,
            _node: &(),
            _start: usize,
            _end: usize,
            _level: u8,
        ) -> std::result::Result<(), StylerError> {
            Ok(())
        }

        async fn apply_text_style(
            &self,
            _node: &(),
            _start: usize,
            _end: usize,
            _style: TextStyle,
        ) -> std::result::Result<(), StylerError> {
            Ok(())
        }

        async fn apply_link_style(
            &self,
            _node: &(),
            _start: usize,
            _end: usize,
            _url: &str,
        ) -> std::result::Result<(), StylerError> {
            Ok(())
        }

        async fn apply_list_style(
            &self,
            _node: &(),
            _start: usize,
            _end: usize,
            _ordered: bool,
        ) -> std::result::Result<(), StylerError> {
            self.ignored.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn apply_code_style(
            &self,
            _node: &(),
            _start: usize,
            _end: usize,
        ) -> std::result::Result<(), StylerError> {
            self.ignored.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_list_and_code_ranges_reach_explicit_noops() {
        let styler = NoListOrCodeStyler::default();
        let result = apply_styles(&styler, "text", &ranges()).await;
        assert!(result.is_ok());
        // One code range and one list range, both dispatched
        assert_eq!(styler.ignored.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_text_style_constructors() {
        assert_eq!(TextStyle::italic().italic, Some(true));
        assert_eq!(TextStyle::italic().bold, None);
        assert_eq!(TextStyle::bold().bold, Some(true));
    }
}
