//! Persistence boundary for user-generated records.
//!
//! Each record kind lives in its own named slot that is read wholesale at
//! startup and rewritten wholesale on every append.

mod collection;
mod json_file;
mod memory;

pub use collection::RecordCollection;
pub use json_file::JsonFileSlot;
pub use memory::MemorySlot;

use crate::errors::StorageError;

pub const BLOGS_SLOT: &str = "blogs";
pub const SUMMARIES_SLOT: &str = "summaries";

/// A persisted record with a process-assigned identifier.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> u64;
}

/// One named, wholesale-replaced list of records.
pub trait RecordSlot<R>: Send + Sync {
    /// Returns an empty list when nothing has been saved yet.
    fn load(&self) -> Result<Vec<R>, StorageError>;

    fn save(&self, records: &[R]) -> Result<(), StorageError>;
}
