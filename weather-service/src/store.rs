use common::models::WeatherRecord;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-lifetime mapping from record id to weather record
pub struct RecordStore {
    records: RwLock<HashMap<String, WeatherRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts unconditionally, replacing any record already under `id`.
    pub async fn put(&self, id: String, record: WeatherRecord) {
        let mut records = self.records.write().await;
        records.insert(id, record);
    }

    pub async fn get(&self, id: &str) -> Option<WeatherRecord> {
        let records = self.records.read().await;
        records.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
