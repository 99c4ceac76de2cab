//! Record repository backed by memory, optionally mirrored to a JSON file.

use annotator_domain::{Record, RecordAnswer, RecordId, RecordRepository, RepositoryError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};

/// Record store keyed by record id.
///
/// When created with [`load`](Self::load) every mutation is written back
/// to the data file as a pretty-printed JSON array.
#[derive(Default)]
pub struct InMemoryRecordRepository {
    records: RwLock<BTreeMap<RecordId, Record>>,
    data_file: Option<PathBuf>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            records: RwLock::new(
                records
                    .into_iter()
                    .map(|r| (r.id().clone(), r))
                    .collect(),
            ),
            data_file: None,
        }
    }

    /// Load records from a JSON file.
    ///
    /// A missing file yields an empty store that will be created on the
    /// first write.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();

        let records: Vec<Record> = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| RepositoryError::Storage(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&content)
                .map_err(|e| RepositoryError::Storage(format!("{}: {}", path.display(), e)))?
        } else {
            debug!("Record file {} does not exist yet", path.display());
            Vec::new()
        };

        info!("Loaded {} records from {}", records.len(), path.display());

        let mut store = Self::with_records(records);
        store.data_file = Some(path.to_path_buf());
        Ok(store)
    }

    /// Snapshot of all records, ordered by id
    pub fn records(&self) -> Vec<Record> {
        self.records
            .read()
            .map(|r| r.values().cloned().collect())
            .unwrap_or_default()
    }

    fn persist(&self, records: &BTreeMap<RecordId, Record>) -> Result<(), RepositoryError> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };

        let all: Vec<&Record> = records.values().collect();
        let content = serde_json::to_string_pretty(&all)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| RepositoryError::Storage(format!("{}: {}", path.display(), e)))
    }

    fn poisoned() -> RepositoryError {
        RepositoryError::Storage("record store lock poisoned".to_string())
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn delete_record_response(&self, answer: &RecordAnswer) -> Result<(), RepositoryError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        let mut updated = records.clone();
        let record = updated
            .values_mut()
            .find(|r| r.answer().is_some_and(|a| a.id == answer.id))
            .ok_or_else(|| RepositoryError::NotFound(format!("response {}", answer.id)))?;
        record.clear();
        let record_id = record.id().clone();

        // Memory only follows a successful write
        self.persist(&updated)?;
        *records = updated;

        debug!("Deleted response {} of record {}", answer.id, record_id);
        Ok(())
    }

    async fn find_record(&self, id: &RecordId) -> Result<Record, RepositoryError> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("record {}", id)))
    }

    async fn save_record(&self, record: &Record) -> Result<(), RepositoryError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        let mut updated = records.clone();
        updated.insert(record.id().clone(), record.clone());
        self.persist(&updated)?;
        *records = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotator_domain::ResponseStatus;

    fn answered(id: &str, response: &str) -> Record {
        Record::new(RecordId::new(id).unwrap(), "ds-1")
            .with_answer(RecordAnswer::new(response, ResponseStatus::Submitted))
    }

    #[tokio::test]
    async fn test_find_record() {
        let repo = InMemoryRecordRepository::with_records(vec![answered("rec-1", "resp-1")]);

        let found = repo.find_record(&RecordId::new("rec-1").unwrap()).await.unwrap();
        assert!(found.has_answer());

        let missing = repo.find_record(&RecordId::new("nope").unwrap()).await;
        assert!(missing.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_record_response() {
        let record = answered("rec-1", "resp-1");
        let repo = InMemoryRecordRepository::with_records(vec![record.clone()]);

        repo.delete_record_response(record.answer().unwrap())
            .await
            .unwrap();

        let stored = repo.find_record(record.id()).await.unwrap();
        assert!(!stored.has_answer());
    }

    #[tokio::test]
    async fn test_delete_unknown_response_fails() {
        let repo = InMemoryRecordRepository::with_records(vec![answered("rec-1", "resp-1")]);

        let result = repo
            .delete_record_response(&RecordAnswer::new("resp-9", ResponseStatus::Draft))
            .await;

        assert_eq!(
            result.unwrap_err(),
            RepositoryError::NotFound("response resp-9".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_and_persist_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        let repo = InMemoryRecordRepository::load(&path).unwrap();
        assert!(repo.records().is_empty());
        repo.save_record(&answered("rec-1", "resp-1")).await.unwrap();
        repo.save_record(&answered("rec-2", "resp-2")).await.unwrap();
        repo.delete_record_response(&RecordAnswer::new("resp-1", ResponseStatus::Submitted))
            .await
            .unwrap();

        let reloaded = InMemoryRecordRepository::load(&path).unwrap();
        let records = reloaded.records();
        assert_eq!(records.len(), 2);
        assert!(!records[0].has_answer());
        assert!(records[1].has_answer());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_stored_answer() {
        let dir = tempfile::tempdir().unwrap();
        let record = answered("rec-1", "resp-1");
        let mut repo = InMemoryRecordRepository::with_records(vec![record.clone()]);
        repo.data_file = Some(dir.path().join("missing-dir").join("records.json"));

        let result = repo.delete_record_response(record.answer().unwrap()).await;
        assert!(matches!(result, Err(RepositoryError::Storage(_))));

        let stored = repo.find_record(record.id()).await.unwrap();
        assert!(stored.has_answer());

        // Still deletable once the file is writable again
        repo.data_file = Some(dir.path().join("records.json"));
        repo.delete_record_response(record.answer().unwrap())
            .await
            .unwrap();
        assert!(!repo.find_record(record.id()).await.unwrap().has_answer());
    }

    #[tokio::test]
    async fn test_failed_save_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("records.json");
        let repo = InMemoryRecordRepository::load(&path).unwrap();

        let record = answered("rec-1", "resp-1");
        let result = repo.save_record(&record).await;

        assert!(matches!(result, Err(RepositoryError::Storage(_))));
        assert!(repo.find_record(record.id()).await.unwrap_err().is_not_found());
        assert!(repo.records().is_empty());
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = InMemoryRecordRepository::load(&path);
        assert!(matches!(result, Err(RepositoryError::Storage(_))));
    }
}
