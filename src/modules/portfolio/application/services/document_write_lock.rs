use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Serializes every load → change → save cycle on the portfolio document.
///
/// The store only guards single reads and writes. Services that derive the
/// saved document from the loaded one hold this guard across both calls, so
/// two concurrent edits cannot both start from the same snapshot.
#[derive(Clone, Default)]
pub struct DocumentWriteLock {
    inner: Arc<Mutex<()>>,
}

impl DocumentWriteLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().await
    }
}
