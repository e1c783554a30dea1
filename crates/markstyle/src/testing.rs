//! Recording styler for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::apply::{StylerError, TextStyle, TextStyler};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(String),
    Heading { start: usize, end: usize, level: u8 },
    Text { start: usize, end: usize, style: TextStyle },
    Link { start: usize, end: usize, url: String },
    List { start: usize, end: usize, ordered: bool },
    Code { start: usize, end: usize },
}

/// Records every call; can be told to reject creation or the nth style call
#[derive(Default)]
pub struct RecordingStyler {
    pub calls: Mutex<Vec<Call>>,
    pub fail_create: bool,
    /// Zero-based index of the style call to reject
    pub fail_at: Option<usize>,
}

impl RecordingStyler {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), StylerError> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls
            .iter()
            .filter(|c| !matches!(c, Call::Create(_)))
            .count();
        if self.fail_at == Some(index) {
            return Err(format!("rejected style call {index}").into());
        }
        calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl TextStyler for RecordingStyler {
    type Handle = u32;

    async fn create_text_node(&self, text: &str) -> Result<u32, StylerError> {
        if self.fail_create {
            return Err("editor unavailable".into());
        }
        self.calls
            .lock()
            .unwrap()
            .push(Call::Create(text.to_string()));
        Ok(1)
    }

    async fn apply_heading_style(
        &self,
        _node: &u32,
        start: usize,
        end: usize,
        level: u8,
    ) -> Result<(), StylerError> {
        self.record(Call::Heading { start, end, level })
    }

    async fn apply_text_style(
        &self,
        _node: &u32,
        start: usize,
        end: usize,
        style: TextStyle,
    ) -> Result<(), StylerError> {
        self.record(Call::Text { start, end, style })
    }

    async fn apply_link_style(
        &self,
        _node: &u32,
        start: usize,
        end: usize,
        url: &str,
    ) -> Result<(), StylerError> {
        self.record(Call::Link {
            start,
            end,
            url: url.to_string(),
        })
    }

    async fn apply_list_style(
        &self,
        _node: &u32,
        start: usize,
        end: usize,
        ordered: bool,
    ) -> Result<(), StylerError> {
        self.record(Call::List {
            start,
            end,
            ordered,
        })
    }

    async fn apply_code_style(
        &self,
        _node: &u32,
        start: usize,
        end: usize,
    ) -> Result<(), StylerError> {
        self.record(Call::Code { start, end })
    }
}
