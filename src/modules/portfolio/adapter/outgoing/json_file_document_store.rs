use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::portfolio::application::domain::default_document::default_document;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::outgoing::{DocumentStore, DocumentStoreError};

use super::DocumentStoreConfig;

/// Keeps the whole portfolio in one pretty-printed JSON file.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// reader never sees a half-written document. All disk access from one
/// store (and its clones) is serialized.
#[derive(Clone)]
pub struct JsonFileDocumentStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileDocumentStore {
    pub fn new(config: DocumentStoreConfig) -> Self {
        Self {
            path: config.data_file,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "portfolio.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write_unlocked(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError> {
        let canonical = document.clone().canonicalized();
        let bytes = serde_json::to_vec_pretty(&canonical)
            .map_err(|e| DocumentStoreError::Write(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DocumentStoreError::Write(e.to_string()))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(|e| DocumentStoreError::Write(e.to_string()))?;

        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(DocumentStoreError::Write(e.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileDocumentStore {
    async fn load(&self) -> Result<PortfolioDocument, DocumentStoreError> {
        let _guard = self.lock.lock().await;

        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                error!(path = %self.path.display(), "Portfolio document is corrupt: {}", e);
                DocumentStoreError::Corrupt(e.to_string())
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "No portfolio document found, writing default");
                let document = default_document();
                self.write_unlocked(&document).await?;
                Ok(document.canonicalized())
            }
            Err(e) => {
                error!(path = %self.path.display(), "Failed to read portfolio document: {}", e);
                Err(DocumentStoreError::Read(e.to_string()))
            }
        }
    }

    async fn save(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError> {
        let _guard = self.lock.lock().await;

        self.write_unlocked(document).await.inspect_err(|e| {
            error!(path = %self.path.display(), "Failed to save portfolio document: {}", e);
        })?;

        info!(path = %self.path.display(), "Portfolio document saved");
        Ok(())
    }
}
