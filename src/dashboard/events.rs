// src/dashboard/events.rs

use crate::dashboard::state::Modal;
use crate::dashboard::view::DashboardView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A non-blocking message for the user (a toast in a browser, a line in a terminal).
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub lines: Vec<String>,
}

impl Notice {
    pub fn info(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            lines,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn error(title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            lines: detail.into_iter().collect(),
        }
    }
}

/// Everything the controller tells its host about.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Rendered(DashboardView),
    Notify(Notice),
    /// The host should open this URL (the export download).
    Navigate(String),
    ModalOpened(Modal),
    ModalClosed(Modal),
}

pub type Listener = Box<dyn FnMut(&DashboardEvent)>;

/// Observers registered when the dashboard is built.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Listener>,
}

impl EventBus {
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn emit(&mut self, event: DashboardEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
