//! Process-lifetime cache of extracted field records.
//!
//! Unbounded, no eviction, no TTL. Keys are normalized subjects. Two
//! concurrent misses for the same subject both fetch; the later insert wins.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::FieldRecord;

/// Thread-safe map from normalized subject to its field record.
#[derive(Debug, Default)]
pub struct FieldCache {
    entries: RwLock<HashMap<String, Arc<FieldRecord>>>,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached record.
    pub fn get(&self, subject: &str) -> Option<Arc<FieldRecord>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(subject).cloned()
    }

    /// Store a record, replacing any previous one for the subject.
    pub fn insert(&self, subject: String, record: FieldRecord) -> Arc<FieldRecord> {
        let record = Arc::new(record);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(subject, Arc::clone(&record));
        record
    }

    /// Number of cached subjects.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached subjects, sorted.
    pub fn subjects(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut subjects: Vec<String> = entries.keys().cloned().collect();
        subjects.sort();
        subjects
    }
}
