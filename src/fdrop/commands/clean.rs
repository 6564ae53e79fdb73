use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StashStore;

/// Empties the stash. Staged files on disk are untouched.
pub fn run<S: StashStore>(store: &mut S) -> Result<CmdResult> {
    let count = store.load()?.len();
    store.save(&[])?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stash cleaned ({} item{} dropped)",
        count,
        if count == 1 { "" } else { "s" }
    )));
    Ok(result)
}
