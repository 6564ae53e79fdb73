use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fsops;
use crate::model::Action;
use crate::store::StashStore;
use crate::token::{parse_tokens, resolve};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Copies or moves resolved items to a destination directory.
///
/// Destination: an explicit `dest` wins (the `paste [dir]` form); otherwise,
/// when more than one token is given and the last one is an existing
/// directory, it becomes the destination; otherwise the working directory.
///
/// Items are processed in token order. A successful transfer logs one line
/// and removes the item from the stash unless `keep` is set; a failed or
/// unresolved item stays staged and is reported without aborting the rest of
/// the batch. Removal is accounted by stash position, so duplicate tokens
/// cannot drop more than they matched.
pub fn run<S: StashStore>(
    store: &mut S,
    action: Action,
    raw_tokens: &[String],
    dest: Option<PathBuf>,
    keep: bool,
) -> Result<CmdResult> {
    let items = store.load()?;
    let mut result = CmdResult::default();

    if items.is_empty() {
        result.add_message(CmdMessage::info("Stash is empty."));
        return Ok(result);
    }

    let mut raw_tokens = raw_tokens.to_vec();
    let trailing_dir = if dest.is_none() && raw_tokens.len() > 1 {
        match raw_tokens.last() {
            Some(last) if Path::new(last).is_dir() => raw_tokens.pop().map(PathBuf::from),
            _ => None,
        }
    } else {
        None
    };
    let dest_dir = match dest.or(trailing_dir) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let tokens = parse_tokens(&raw_tokens);
    let resolution = resolve(&tokens, &items);

    for token in &resolution.unmatched {
        result.add_message(CmdMessage::error(format!(
            "No staged item matches '{}'",
            token
        )));
    }

    if resolution.matched.is_empty() {
        result.add_message(CmdMessage::info("No files matched in stash."));
        return Ok(result);
    }

    let mut removed: HashSet<usize> = HashSet::new();

    for resolved in &resolution.matched {
        let item = &resolved.item;
        let dest_path = dest_dir.join(&item.name);

        let outcome = match action {
            Action::Move => fsops::move_path(&item.path, &dest_path),
            Action::Copy => fsops::copy_path(&item.path, &dest_path),
        };

        match outcome {
            Ok(()) => {
                store.record(&format!(
                    "{}: {} ➜ {}",
                    action.past_tense(),
                    item.path.display(),
                    dest_path.display()
                ))?;
                result.add_message(CmdMessage::success(format!("Pasted: {}", item.name)));
                result.affected.push(item.clone());
                if !keep {
                    removed.insert(resolved.stash_index);
                }
            }
            Err(e) => {
                result.add_message(CmdMessage::error(format!("Failed: {} ({})", item.name, e)));
            }
        }
    }

    let remaining: Vec<_> = items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, item)| item)
        .collect();
    store.save(&remaining)?;

    Ok(result)
}
