//! Single-slot notice state.
//!
//! DESIGN
//! ======
//! Exactly one notice is visible at a time. Showing a notice overwrites the
//! previous one; there is no history or queue.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::{RwSignal, Update};

/// Text color applied to notices flagged as errors.
pub const ERROR_COLOR: &str = "#ff4d4d";

/// A short transient message, optionally styled as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }

    /// Inline text color for this notice, if it differs from the default.
    pub fn color(&self) -> Option<&'static str> {
        self.is_error.then_some(ERROR_COLOR)
    }
}

/// Currently displayed notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    /// The visible notice, `None` before anything has been shown.
    pub current: Option<Notice>,
    /// Bumped on every `show`, so identical consecutive notices still re-render.
    pub seq: u64,
}

impl NoticeState {
    /// Replace whatever is visible with `notice`.
    pub fn show(&mut self, notice: Notice) {
        self.current = Some(notice);
        self.seq += 1;
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.text.as_str())
    }
}

/// Anything that can display a notice.
pub trait NoticeSink {
    fn show(&self, notice: Notice);
}

impl NoticeSink for RwSignal<NoticeState> {
    fn show(&self, notice: Notice) {
        self.update(|s| s.show(notice));
    }
}
