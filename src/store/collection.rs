use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info};

use crate::errors::StorageError;
use crate::store::{Record, RecordSlot};

struct Inner<R> {
    records: Vec<R>,
    next_id: u64,
}

/// Append-only in-memory mirror of one slot.
///
/// Appends for a collection are serialized, and a record only becomes
/// visible once the whole list has been written back to the slot.
pub struct RecordCollection<R> {
    name: &'static str,
    slot: Arc<dyn RecordSlot<R>>,
    inner: Mutex<Inner<R>>,
}

impl<R: Record> RecordCollection<R> {
    pub fn load(name: &'static str, slot: Arc<dyn RecordSlot<R>>) -> Result<Self, StorageError> {
        let records = slot.load()?;
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;

        info!("Loaded {} {} (next id {})", records.len(), name, next_id);

        Ok(Self {
            name,
            slot,
            inner: Mutex::new(Inner { records, next_id }),
        })
    }

    /// Assigns the next identifier, builds the record and persists the list.
    ///
    /// On a failed save the record is dropped and the identifier is reused
    /// by the next append.
    pub fn append<F>(&self, build: F) -> Result<R, StorageError>
    where
        F: FnOnce(u64) -> R,
    {
        let mut inner = self.inner.lock();
        let record = build(inner.next_id);
        inner.records.push(record.clone());

        if let Err(e) = self.slot.save(&inner.records) {
            inner.records.pop();
            error!("Failed to persist {} record {}: {}", self.name, record.id(), e);
            return Err(e);
        }

        inner.next_id = record.id() + 1;
        info!("Stored {} record {}", self.name, record.id());
        Ok(record)
    }

    /// Records in insertion order.
    pub fn all(&self) -> Vec<R> {
        self.inner.lock().records.clone()
    }

    pub fn newest_first(&self) -> Vec<R> {
        let mut records = self.all();
        records.reverse();
        records
    }

    pub fn get(&self, id: u64) -> Option<R> {
        self.inner
            .lock()
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    #[cfg(test)]
    pub fn next_id(&self) -> u64 {
        self.inner.lock().next_id
    }
}
