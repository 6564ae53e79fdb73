//! # Storage Layer
//!
//! The [`StashStore`] trait covers the two persisted resources: the stash
//! (ordered list of staged items, replaced wholesale on every save) and the
//! append-only action log.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage under a configurable root
//!   directory (`stash.json` + `actions.log`)
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!
//! The root directory is injected rather than hardwired so tests can point at
//! an isolated temporary location. Saves are plain overwrites with no
//! write-then-rename swap; a crash mid-save can corrupt the stash file. This
//! is an accepted limitation for a single-user interactive tool, as is the
//! absence of any locking between simultaneous invocations.

use crate::error::Result;
use crate::model::StashItem;

pub mod fs;
pub mod memory;

/// Abstract interface for stash persistence and the action log.
pub trait StashStore {
    /// Load the staged items. Missing state is an empty stash, not an error.
    fn load(&self) -> Result<Vec<StashItem>>;

    /// Replace the persisted stash with `items`.
    fn save(&mut self, items: &[StashItem]) -> Result<()>;

    /// Append one line to the action log; the store adds the timestamp.
    fn record(&mut self, line: &str) -> Result<()>;

    /// Full text of the action log. Missing log is an empty string.
    fn read_log(&self) -> Result<String>;
}
