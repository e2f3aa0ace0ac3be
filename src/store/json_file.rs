use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::errors::StorageError;
use crate::store::RecordSlot;

/// Slot stored as a pretty-printed JSON array at `{dir}/{name}.json`.
pub struct JsonFileSlot<R> {
    path: PathBuf,
    _records: PhantomData<fn() -> R>,
}

impl<R> JsonFileSlot<R> {
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{name}.json")),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl<R> RecordSlot<R> for JsonFileSlot<R>
where
    R: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<R>, StorageError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No stored records at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(&self.path, err)),
        };

        serde_json::from_slice(&raw).map_err(|source| StorageError::Serialization {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, records: &[R]) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|err| self.io_error(dir, err))?;
        }

        let raw = serde_json::to_vec_pretty(records).map_err(|source| {
            StorageError::Serialization {
                path: self.path.clone(),
                source,
            }
        })?;

        // Readers never observe a half-written file
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, raw).map_err(|err| self.io_error(&tmp_path, err))?;
        fs::rename(&tmp_path, &self.path).map_err(|err| self.io_error(&self.path, err))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    use crate::models::{BlogRecord, DocumentType, SummaryRecord};

    fn blog(id: u64) -> BlogRecord {
        BlogRecord {
            id,
            user_name: "ana".to_string(),
            title: format!("Post {id}"),
            content: "Dividend growth stocks held up well this quarter.".to_string(),
            tag: "Stocks".to_string(),
            created_at: Utc::now(),
            likes: 0,
            comments: 0,
            rating: 4,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let slot: JsonFileSlot<BlogRecord> = JsonFileSlot::new(dir.path(), "blogs");
        assert!(slot.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_blogs() {
        let dir = tempdir().unwrap();
        let slot = JsonFileSlot::new(dir.path(), "blogs");
        let records = vec![blog(1), blog(2), blog(3)];

        slot.save(&records).unwrap();
        assert_eq!(slot.load().unwrap(), records);
    }

    #[test]
    fn test_round_trip_empty() {
        let dir = tempdir().unwrap();
        let slot: JsonFileSlot<SummaryRecord> = JsonFileSlot::new(dir.path(), "summaries");

        slot.save(&[]).unwrap();
        assert!(slot.path().exists());
        assert!(slot.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_summaries() {
        let dir = tempdir().unwrap();
        let slot = JsonFileSlot::new(dir.path(), "summaries");
        let records = vec![SummaryRecord {
            id: 1,
            title: "Q4 report".to_string(),
            doc_type: DocumentType::IncomeStatement,
            content_preview: "Revenue rose 12%...".to_string(),
            summary: "1. **Executive Summary** ...".to_string(),
            created_at: Utc::now(),
        }];

        slot.save(&records).unwrap();
        assert_eq!(slot.load().unwrap(), records);
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("finance_app_data");
        let slot = JsonFileSlot::new(&nested, "blogs");

        slot.save(&[blog(1)]).unwrap();
        assert!(nested.join("blogs.json").exists());
        assert!(!nested.join("blogs.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("blogs.json"), b"not json").unwrap();
        let slot: JsonFileSlot<BlogRecord> = JsonFileSlot::new(dir.path(), "blogs");

        assert!(matches!(slot.load(), Err(StorageError::Serialization { .. })));
    }
}
