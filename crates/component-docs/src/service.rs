//! Documentation service: local store plus cached remote field extraction.

use std::sync::Arc;

use crate::cache::FieldCache;
use crate::extract::extract_field;
use crate::fetch::{field_url, normalize_subject, HttpPageSource, PageSource};
use crate::store::DocStore;
use crate::types::{DocsError, DocsResult, FieldRecord};

/// Owns everything a request handler needs: the optional local store, the
/// field cache, and the page source used on cache misses.
pub struct DocsService {
    store: Option<DocStore>,
    cache: FieldCache,
    source: Box<dyn PageSource>,
    base_url: String,
}

impl DocsService {
    pub fn new(store: Option<DocStore>, source: Box<dyn PageSource>, base_url: &str) -> Self {
        Self {
            store,
            cache: FieldCache::new(),
            source,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Service with an HTTP page source against `base_url`.
    pub fn with_http(store: Option<DocStore>, base_url: &str, timeout_ms: u64) -> Self {
        Self::new(store, Box::new(HttpPageSource::new(timeout_ms)), base_url)
    }

    pub fn store(&self) -> Option<&DocStore> {
        self.store.as_ref()
    }

    pub fn cache(&self) -> &FieldCache {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Field reference for `subject`, served from cache when possible.
    pub async fn field_reference(&self, subject: &str) -> DocsResult<Arc<FieldRecord>> {
        let key = normalize_subject(subject);
        if key.is_empty() {
            let e = DocsError::InvalidArgument("field name must not be empty".to_string());
            tracing::warn!(subject, operation = "field_reference", "{e}");
            return Err(e);
        }

        if let Some(record) = self.cache.get(&key) {
            tracing::debug!(subject = %key, "field reference served from cache");
            return Ok(record);
        }

        let url = field_url(&self.base_url, &key);
        let html = self.source.fetch(&url).await.map_err(|e| {
            tracing::error!(subject = %key, operation = "field_reference", url = %url, "{e}");
            e
        })?;

        let record = extract_field(&html, subject.trim(), &url);
        tracing::info!(subject = %key, name = %record.name, "cached field reference");
        Ok(self.cache.insert(key, record))
    }
}
