//! Single-slot metadata cache.

use crate::{Result, SchemaExtractor};
use modelgen_schema::DatabaseSchema;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The extraction capability the cache wraps.
#[allow(async_fn_in_trait)]
pub trait ExtractSchema {
    /// Extract a fresh schema from the backing database.
    async fn extract_schema(&self) -> Result<DatabaseSchema>;
}

impl ExtractSchema for SchemaExtractor {
    async fn extract_schema(&self) -> Result<DatabaseSchema> {
        SchemaExtractor::extract_schema(self).await
    }
}

/// Lazily caches at most one extracted [`DatabaseSchema`].
///
/// Capacity is exactly one: the process targets a single configured
/// database at a time, and there is no TTL or size policy beyond that. The
/// slot lives behind a mutex held across extraction, so concurrent `get()`
/// calls on an empty cache share a single extraction (single-flight)
/// instead of racing to populate the slot.
///
/// The cache has no way to detect configuration changes; callers that
/// change the active configuration must call
/// [`invalidate`](Self::invalidate) themselves. A failed extraction is not
/// cached; the next `get()` tries again.
pub struct MetadataCache<E = SchemaExtractor> {
    extractor: E,
    slot: Mutex<Option<Arc<DatabaseSchema>>>,
}

impl<E: ExtractSchema> MetadataCache<E> {
    /// Create an empty cache over the given extractor.
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            slot: Mutex::new(None),
        }
    }

    /// Return the held schema, extracting it first if the slot is empty.
    pub async fn get(&self) -> Result<Arc<DatabaseSchema>> {
        let mut slot = self.slot.lock().await;
        if let Some(schema) = slot.as_ref() {
            return Ok(Arc::clone(schema));
        }

        tracing::debug!("metadata cache empty, extracting");
        let schema = Arc::new(self.extractor.extract_schema().await?);
        *slot = Some(Arc::clone(&schema));
        Ok(schema)
    }

    /// Clear the held schema unconditionally; the next [`get`](Self::get)
    /// triggers a fresh extraction.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}
