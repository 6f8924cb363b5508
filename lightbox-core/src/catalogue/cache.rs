//! Memoizing catalogue wrapper.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{CatalogueError, ImageCatalogue};
use crate::{ImageId, ImageRecord};

/// Catalogue wrapper that remembers successful answers.
///
/// The first [`ImageCatalogue::list`] call reads through to the inner
/// catalogue; later calls are served from memory. Detail lookups are
/// memoized per id. Failed calls are never cached, so a transient read
/// error does not stick. The cache is unconditional and never evicted:
/// drop the wrapper (or call [`CachedCatalogue::into_inner`]) to see
/// fresh data.
#[derive(Debug)]
pub struct CachedCatalogue<C> {
    inner: C,
    list: Mutex<Option<Vec<ImageRecord>>>,
    details: Mutex<HashMap<ImageId, ImageRecord>>,
}

impl<C> CachedCatalogue<C> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            list: Mutex::new(None),
            details: Mutex::new(HashMap::new()),
        }
    }

    /// Discard the cache and return the wrapped catalogue.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: ImageCatalogue> ImageCatalogue for CachedCatalogue<C> {
    fn list(&self) -> Result<Vec<ImageRecord>, CatalogueError> {
        let Ok(mut cached) = self.list.lock() else {
            // Poisoned lock: read through without the cache.
            return self.inner.list();
        };
        if let Some(records) = cached.as_ref() {
            log::debug!("catalogue list served from cache");
            return Ok(records.clone());
        }
        let records = self.inner.list()?;
        *cached = Some(records.clone());
        Ok(records)
    }

    fn details(&self, id: &ImageId) -> Result<ImageRecord, CatalogueError> {
        let Ok(mut cached) = self.details.lock() else {
            // Poisoned lock: read through without the cache.
            return self.inner.details(id);
        };
        if let Some(record) = cached.get(id) {
            log::debug!("details for '{id}' served from cache");
            return Ok(record.clone());
        }
        let record = self.inner.details(id)?;
        cached.insert(id.clone(), record.clone());
        Ok(record)
    }
}
