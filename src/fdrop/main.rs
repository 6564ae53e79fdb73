use chrono::Utc;
use clap::Parser;
use colored::*;
use fdrop::api::{CmdMessage, FdropApi, ListedItem, MessageLevel};
use fdrop::error::{FdropError, Result};
use fdrop::model::Action;
use fdrop::store::fs::{default_root, FileStore};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, StashAction};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    let mut api = init_api()?;

    if cli.logs {
        return show_logs(&api);
    }

    let result = match cli.command {
        Some(Commands::Add { paths }) => api.add(&paths)?,
        Some(Commands::Copy { tokens }) => api.transfer(Action::Copy, &tokens, None, false)?,
        Some(Commands::Move { tokens }) => api.transfer(Action::Move, &tokens, None, false)?,
        Some(Commands::Paste { dir }) => api.paste_all(dir)?,
        Some(Commands::Stash {
            action: Some(StashAction::Keep { tokens }),
        }) => api.transfer(Action::Copy, &tokens, None, true)?,
        Some(Commands::Clean) => api.clean()?,
        Some(Commands::Stash { action: None }) | None => {
            let result = api.list()?;
            print_stash(&result.listed);
            result
        }
    };

    print_messages(&result.messages);
    Ok(!result.has_errors())
}

fn init_api() -> Result<FdropApi<FileStore>> {
    let root = default_root()
        .ok_or_else(|| FdropError::Store("Could not determine the state directory".to_string()))?;
    Ok(FdropApi::new(FileStore::new(root)))
}

fn show_logs(api: &FdropApi<FileStore>) -> Result<bool> {
    let log = api.logs()?;
    if log.is_empty() {
        println!("{}", "No actions logged yet.".dimmed());
    } else {
        print!("{}", log);
    }
    Ok(true)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_stash(items: &[ListedItem]) {
    if items.is_empty() {
        println!("Stash is empty.");
        return;
    }

    for item in items {
        let idx_str = format!("{}. ", item.position);
        let label = format!("{} ({})", item.name, item.dir.display());

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + TIME_WIDTH + 2);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        println!(
            "{}{}{}  {}",
            idx_str,
            label_display,
            " ".repeat(padding),
            format_time_ago(item.added_at).dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
