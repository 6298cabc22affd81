//! View state controller
//!
//! The widget is always in exactly one [`ViewState`]; every transition goes
//! through [`SearchView`] so the control enablement follows the state.

use crate::backend::{SearchResult, Source};

/// Text rendered in place of an empty source list
pub const NO_SOURCES_TEXT: &str = "No sources were cited for this response.";

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(SearchResult),
}

/// One rendered entry of the source list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine {
    /// 1-based position in the list
    Cited {
        number: usize,
        title: String,
        uri: String,
    },
    Placeholder,
}

/// Numbered lines for `sources`, or a single placeholder when there are none
pub fn source_lines(sources: &[Source]) -> Vec<SourceLine> {
    if sources.is_empty() {
        return vec![SourceLine::Placeholder];
    }

    sources
        .iter()
        .enumerate()
        .map(|(index, source)| SourceLine::Cited {
            number: index + 1,
            title: source.title.clone(),
            uri: source.uri.clone(),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct SearchView {
    state: ViewState,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn show_loading(&mut self) {
        tracing::debug!("Showing loading");
        self.state = ViewState::Loading;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Showing error: {}", message);
        self.state = ViewState::Error(message);
    }

    pub fn show_success(&mut self, answer: String, sources: Vec<Source>) {
        tracing::debug!("Showing success with {} source(s)", sources.len());
        self.state = ViewState::Success(SearchResult { answer, sources });
    }

    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Input and submit button are disabled only while loading
    pub fn controls_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SEARCHING_LABEL
        } else {
            SEARCH_LABEL
        }
    }

    /// Source list for the success view; empty in every other state
    pub fn source_lines(&self) -> Vec<SourceLine> {
        match &self.state {
            ViewState::Success(result) => source_lines(&result.sources),
            _ => Vec::new(),
        }
    }
}
