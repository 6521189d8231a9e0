//! Business logic for each user action.
//!
//! Every command takes the current [`BrowserState`] and returns the next one
//! together with a [`CmdResult`] describing what a UI should show.
//!
//! [`BrowserState`]: crate::browser::BrowserState

use crate::browser::PageView;
use crate::loader::LoadReport;

pub mod load;
pub mod page;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub view: PageView,
    pub report: Option<LoadReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: PageView) -> Self {
        self.view = view;
        self
    }

    pub fn with_report(mut self, report: LoadReport) -> Self {
        self.report = Some(report);
        self
    }
}
