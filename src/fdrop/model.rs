use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One staged filesystem entry.
///
/// `name` is the basename of `path`, cached at stage time so listing and
/// token resolution never re-derive it. `path` is absolute and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashItem {
    pub name: String,
    pub path: PathBuf,
    pub added_at: DateTime<Utc>,
}

impl StashItem {
    pub fn new(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            added_at: Utc::now(),
        }
    }
}

/// The kind of transfer applied to resolved items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Move,
}

impl Action {
    /// Label used in log lines ("Copied: a ➜ b").
    pub fn past_tense(&self) -> &'static str {
        match self {
            Action::Copy => "Copied",
            Action::Move => "Moved",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Copy => write!(f, "copy"),
            Action::Move => write!(f, "move"),
        }
    }
}
