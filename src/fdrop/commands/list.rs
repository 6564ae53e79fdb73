use crate::commands::{CmdResult, ListedItem};
use crate::error::Result;
use crate::store::StashStore;
use std::path::PathBuf;

/// Read-only projection of the stash in current order, 1-based positions.
pub fn run<S: StashStore>(store: &S) -> Result<CmdResult> {
    let items = store.load()?;
    let mut result = CmdResult::default();

    result.listed = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| ListedItem {
            position: i + 1,
            name: item.name,
            dir: item
                .path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default(),
            added_at: item.added_at,
        })
        .collect();

    Ok(result)
}
