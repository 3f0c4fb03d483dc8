// src/state/ui_state.rs
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    /// Quick prompt, e.g. nothing selected yet.
    Prompt,
    /// Something failed and the user has to acknowledge it.
    Blocking,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
}

impl UiState {
    /// Silent errors (history) are never shown.
    pub fn report_error(&mut self, error: &DashboardError) {
        if error.is_silent() {
            return;
        }
        let kind = if error.is_blocking() {
            NoticeKind::Blocking
        } else {
            NoticeKind::Prompt
        };
        self.show(kind, error.to_string());
    }

    pub fn show_prompt(&mut self, message: impl Into<String>) {
        self.show(NoticeKind::Prompt, message.into());
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.show(NoticeKind::Info, message.into());
    }

    fn show(&mut self, kind: NoticeKind, message: String) {
        self.notice = Some(Notice { kind, message });
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}
