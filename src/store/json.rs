use std::path::{Path, PathBuf};

use crate::conversation::types::ConversationRecord;
use crate::error::{Error, Result};

use super::atomic::write_atomic;
use super::RecordRepository;

/// Records persisted as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordRepository for JsonFileStore {
    fn load(&self) -> Result<Vec<ConversationRecord>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no record store yet");
            return Ok(Vec::new());
        }

        let bytes = std::fs::read(&self.path).map_err(|e| Error::io("read", &self.path, e))?;
        let records: Vec<ConversationRecord> =
            serde_json::from_slice(&bytes).map_err(|source| Error::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "record store loaded");
        Ok(records)
    }

    fn save(&self, records: &[ConversationRecord]) -> Result<()> {
        let mut json = serde_json::to_vec_pretty(records)?;
        json.push(b'\n');
        write_atomic(&self.path, &json)
    }
}
