//! # API Facade
//!
//! Thin entry point over the command layer, generic over [`StashStore`] so
//! the CLI runs against [`crate::store::fs::FileStore`] and tests against
//! [`crate::store::memory::InMemoryStore`]. No business logic lives here and
//! nothing here touches stdout or the process exit code; commands return
//! structured [`CmdResult`] values and the caller decides presentation.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::Action;
use crate::store::StashStore;
use std::path::PathBuf;

pub struct FdropApi<S: StashStore> {
    store: S,
}

impl<S: StashStore> FdropApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stage paths into the stash.
    pub fn add(&mut self, paths: &[String]) -> Result<CmdResult> {
        commands::add::run(&mut self.store, paths)
    }

    /// List staged items in order.
    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Copy or move selected items; see [`commands::transfer::run`].
    pub fn transfer(
        &mut self,
        action: Action,
        tokens: &[String],
        dest: Option<PathBuf>,
        keep: bool,
    ) -> Result<CmdResult> {
        commands::transfer::run(&mut self.store, action, tokens, dest, keep)
    }

    /// Copy everything currently staged, by position, evaluated at call time.
    pub fn paste_all(&mut self, dest: Option<PathBuf>) -> Result<CmdResult> {
        let count = self.store.load()?.len();
        let tokens: Vec<String> = (1..=count).map(|i| i.to_string()).collect();
        commands::transfer::run(&mut self.store, Action::Copy, &tokens, dest, false)
    }

    /// Drop every staged item.
    pub fn clean(&mut self) -> Result<CmdResult> {
        commands::clean::run(&mut self.store)
    }

    /// Raw text of the action log.
    pub fn logs(&self) -> Result<String> {
        self.store.read_log()
    }
}

pub use crate::commands::{CmdMessage, ListedItem, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StashItem;
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_paste_all_copies_everything_and_empties_stash() {
        let dir = TempDir::new().unwrap();
        let mut store = InMemoryStore::new();
        let mut items = Vec::new();
        for name in ["a.txt", "b.txt"] {
            let path = dir.path().join(name);
            fs::write(&path, name).unwrap();
            items.push(StashItem::new(name.to_string(), path));
        }
        store.save(&items).unwrap();

        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let mut api = FdropApi::new(store);
        let result = api.paste_all(Some(out.clone())).unwrap();

        assert!(!result.has_errors());
        assert!(out.join("a.txt").exists());
        assert!(out.join("b.txt").exists());
        assert!(api.list().unwrap().listed.is_empty());
    }

    #[test]
    fn test_paste_all_on_empty_stash_reports_empty() {
        let mut api = FdropApi::new(InMemoryStore::new());
        let result = api.paste_all(None).unwrap();
        assert_eq!(result.messages[0].content, "Stash is empty.");
    }
}
