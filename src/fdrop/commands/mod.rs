use crate::model::StashItem;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod add;
pub mod clean;
pub mod list;
pub mod transfer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// One row of the stash listing, positions assigned 1-based in stash order.
#[derive(Debug, Clone)]
pub struct ListedItem {
    pub position: usize,
    pub name: String,
    pub dir: PathBuf,
    pub added_at: DateTime<Utc>,
}

/// Structured outcome of a command.
///
/// Per-item problems land in `messages` rather than aborting the batch; the
/// CLI derives its exit status from [`CmdResult::has_errors`]. Only
/// storage-layer failures surface as `Err` from the command functions.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<StashItem>,
    pub listed: Vec<ListedItem>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
