use super::StashStore;
use crate::error::{FdropError, Result};
use crate::model::StashItem;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const STASH_FILENAME: &str = "stash.json";
const LOG_FILENAME: &str = "actions.log";

/// File-backed store rooted at a single state directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn stash_path(&self) -> PathBuf {
        self.root.join(STASH_FILENAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILENAME)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FdropError::Io)?;
        }
        Ok(())
    }
}

impl StashStore for FileStore {
    fn load(&self) -> Result<Vec<StashItem>> {
        let path = self.stash_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(FdropError::Io)?;
        let items: Vec<StashItem> =
            serde_json::from_str(&content).map_err(FdropError::Serialization)?;
        Ok(items)
    }

    fn save(&mut self, items: &[StashItem]) -> Result<()> {
        self.ensure_root()?;
        let content = serde_json::to_string_pretty(items).map_err(FdropError::Serialization)?;
        fs::write(self.stash_path(), content).map_err(FdropError::Io)?;
        Ok(())
    }

    fn record(&mut self, line: &str) -> Result<()> {
        self.ensure_root()?;
        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())
            .map_err(FdropError::Io)?;
        writeln!(file, "[{}] {}", ts, line).map_err(FdropError::Io)?;
        Ok(())
    }

    fn read_log(&self) -> Result<String> {
        let path = self.log_path();
        if !path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&path).map_err(FdropError::Io)
    }
}

/// Resolves the state directory: `FDROP_HOME` wins, otherwise the per-user
/// data directory.
pub fn default_root() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("FDROP_HOME") {
        if !home.is_empty() {
            return Some(Path::new(&home).to_path_buf());
        }
    }
    directories::ProjectDirs::from("com", "fdrop", "fdrop")
        .map(|dirs| dirs.data_dir().to_path_buf())
}
