use crate::errors::StorageError;
use crate::models::StatsRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::{env, path::PathBuf};
use tracing::error;

pub const STATS_KEY: &str = "support_stats";

pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.blob_path(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read {}: {err}", path.display());
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.blob_path(key), value)?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    cells: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    fn cells(&self) -> MutexGuard<'_, HashMap<String, String>> {
        match self.cells.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.cells().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

pub fn load_record(store: &dyn Store) -> StatsRecord {
    let Some(raw) = store.get(STATS_KEY) else {
        return StatsRecord::default();
    };

    match serde_json::from_str(&raw) {
        Ok(record) => record,
        Err(err) => {
            error!("failed to parse stats record: {err}");
            StatsRecord::default()
        }
    }
}

pub fn save_record(store: &dyn Store, record: &StatsRecord) -> Result<(), StorageError> {
    let payload = serde_json::to_string_pretty(record)?;
    store.set(STATS_KEY, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("support_timer_store_{}_{}", std::process::id(), nanos));
        dir
    }

    #[test]
    fn load_missing_record_defaults() {
        let store = MemoryStore::default();
        assert_eq!(load_record(&store), StatsRecord::default());
    }

    #[test]
    fn load_malformed_record_defaults() {
        let store = MemoryStore::default();
        store.set(STATS_KEY, "{not json").unwrap();
        assert_eq!(load_record(&store), StatsRecord::default());
    }

    #[test]
    fn load_partial_record_fills_defaults() {
        let store = MemoryStore::default();
        store
            .set(STATS_KEY, r#"{"total_seconds": 40, "last_date": "2026-08-05"}"#)
            .unwrap();

        let record = load_record(&store);
        assert_eq!(record.total_seconds, 40);
        assert_eq!(record.last_date, "2026-08-05");
        assert_eq!(record.today_seconds, 0);
        assert!(record.today_achievements.is_empty());
    }

    #[test]
    fn file_store_round_trips_record() {
        let dir = unique_temp_dir();
        let store = FileStore::new(&dir);
        let record = StatsRecord {
            today_seconds: 120,
            total_seconds: 4000,
            sessions_count: 3,
            today_achievements: vec![60],
            current_session_seconds: 20,
            last_date: "2026-08-06".to_string(),
        };

        save_record(&store, &record).unwrap();
        assert_eq!(load_record(&store), record);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn file_store_missing_file_is_none() {
        let store = FileStore::new(unique_temp_dir());
        assert!(store.get(STATS_KEY).is_none());
    }
}
