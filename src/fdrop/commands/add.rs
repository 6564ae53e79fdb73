use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StashItem;
use crate::store::StashStore;
use std::path::Path;

/// Stages the given paths.
///
/// Each path is absolutized and checked for existence; problems are reported
/// per item and never abort the batch. An exact absolute-path duplicate is
/// skipped; a basename collision against a different path is warned about but
/// still staged, since the ambiguity only limits name-based selection. The
/// stash is persisted once for the whole batch.
pub fn run<S: StashStore>(store: &mut S, paths: &[String]) -> Result<CmdResult> {
    let mut items = store.load()?;
    let mut result = CmdResult::default();
    let mut added_names = Vec::new();

    for raw in paths {
        let abs = match std::path::absolute(Path::new(raw)) {
            Ok(p) => p,
            Err(e) => {
                result.add_message(CmdMessage::warning(format!("Skipped {}: {}", raw, e)));
                continue;
            }
        };

        let name = match abs.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => {
                result.add_message(CmdMessage::warning(format!(
                    "Skipped {}: path has no basename",
                    raw
                )));
                continue;
            }
        };

        if !abs.exists() {
            result.add_message(CmdMessage::warning(format!(
                "Skipped {}: no such file or directory",
                abs.display()
            )));
            continue;
        }

        if items.iter().any(|item| item.path == abs) {
            result.add_message(CmdMessage::warning(format!(
                "Already stashed: {}",
                abs.display()
            )));
            continue;
        }

        if let Some(existing) = items.iter().find(|item| item.name == name) {
            result.add_message(CmdMessage::warning(format!(
                "Name collision: {} is also staged from {}; select the new one by position",
                name,
                existing.path.display()
            )));
        }

        let item = StashItem::new(name.clone(), abs);
        result.add_message(CmdMessage::success(format!("Stashed: {}", name)));
        added_names.push(name);
        result.affected.push(item.clone());
        items.push(item);
    }

    if !added_names.is_empty() {
        store.save(&items)?;
        store.record(&format!("Added to stash: {}", added_names.join(", ")))?;
    }

    Ok(result)
}
