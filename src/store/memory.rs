use parking_lot::Mutex;

use crate::errors::StorageError;
use crate::store::RecordSlot;

/// Slot kept in process memory; nothing survives a restart.
pub struct MemorySlot<R> {
    records: Mutex<Vec<R>>,
}

impl<R> MemorySlot<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl<R> Default for MemorySlot<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone + Send> RecordSlot<R> for MemorySlot<R> {
    fn load(&self) -> Result<Vec<R>, StorageError> {
        Ok(self.records.lock().clone())
    }

    fn save(&self, records: &[R]) -> Result<(), StorageError> {
        *self.records.lock() = records.to_vec();
        Ok(())
    }
}
