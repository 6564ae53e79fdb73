use super::StashStore;
use crate::error::Result;
use crate::model::StashItem;

/// In-memory store for tests. No persistence, no timestamps on log lines.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<StashItem>,
    log: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }
}

impl StashStore for InMemoryStore {
    fn load(&self) -> Result<Vec<StashItem>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[StashItem]) -> Result<()> {
        self.items = items.to_vec();
        Ok(())
    }

    fn record(&mut self, line: &str) -> Result<()> {
        self.log.push(line.to_string());
        Ok(())
    }

    fn read_log(&self) -> Result<String> {
        Ok(self.log.join("\n"))
    }
}
