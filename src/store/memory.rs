use std::sync::Mutex;

use crate::conversation::types::ConversationRecord;
use crate::error::Result;

use super::RecordRepository;

/// In-process record store. Nothing touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<ConversationRecord>>,
}

impl MemoryRecordStore {
    pub fn with_records(records: Vec<ConversationRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn snapshot(&self) -> Vec<ConversationRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl RecordRepository for MemoryRecordStore {
    fn load(&self) -> Result<Vec<ConversationRecord>> {
        Ok(self.snapshot())
    }

    fn save(&self, records: &[ConversationRecord]) -> Result<()> {
        *self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = records.to_vec();
        Ok(())
    }
}
