//! # Command Layer
//!
//! One module per user-facing verb. Each exposes a `run` function that takes
//! the [`Directory`](crate::directory::Directory) plus already-tokenized
//! arguments and returns a [`CmdResult`]. Commands never print: they report
//! through leveled [`CmdMessage`]s and structured fields the UI renders.

use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod birthdays;
pub mod change;
pub mod delete;
pub mod hello;
pub mod list;
pub mod phone;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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

/// Days remaining until a contact's next birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayCountdown {
    pub name: String,
    pub days: i64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_pages: Vec<Vec<Record>>,
    pub birthdays: Vec<BirthdayCountdown>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_pages(mut self, pages: Vec<Vec<Record>>) -> Self {
        self.listed_pages = pages;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<BirthdayCountdown>) -> Self {
        self.birthdays = birthdays;
        self
    }

    /// All listed records, across pages.
    pub fn listed_records(&self) -> impl Iterator<Item = &Record> {
        self.listed_pages.iter().flatten()
    }
}
