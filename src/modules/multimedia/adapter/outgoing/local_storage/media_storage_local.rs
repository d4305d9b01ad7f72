use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

use super::LocalMediaStorageConfig;
use crate::multimedia::application::domain::entities::{
    MediaCategory, MediaReference, StoredMedia,
};
use crate::multimedia::application::ports::outgoing::{MediaStorage, MediaStorageError};

/// Uploads kept on the local disk, one directory per category.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(config: LocalMediaStorageConfig) -> Self {
        Self { root: config.root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, reference: &MediaReference) -> PathBuf {
        self.root
            .join(reference.category().dir_name())
            .join(reference.file_name())
    }

    async fn list_category(
        &self,
        category: MediaCategory,
    ) -> Result<Vec<StoredMedia>, MediaStorageError> {
        let dir = self.root.join(category.dir_name());
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&dir, e)),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(&dir, e))? {
            let metadata = entry
                .metadata()
                .await
                .map_err(|e| io_error(&entry.path(), e))?;
            if !metadata.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                debug!("Skipping non UTF-8 file name in {}", dir.display());
                continue;
            };

            let reference = MediaReference::new(category, name.clone());
            files.push(StoredMedia {
                url: reference.url(),
                name,
                size_bytes: metadata.len(),
                category,
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}

fn io_error(path: &Path, e: std::io::Error) -> MediaStorageError {
    error!("Media storage I/O error at {}: {}", path.display(), e);
    MediaStorageError::Io(format!("{}: {}", path.display(), e))
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(
        &self,
        reference: &MediaReference,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaStorageError> {
        let dir = self.root.join(reference.category().dir_name());
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_error(&dir, e))?;

        let path = self.path_of(reference);
        fs::write(&path, bytes)
            .await
            .map_err(|e| io_error(&path, e))?;

        Ok(StoredMedia {
            name: reference.file_name().to_string(),
            url: reference.url(),
            size_bytes: bytes.len() as u64,
            category: reference.category(),
        })
    }

    async fn delete(&self, reference: &MediaReference) -> Result<(), MediaStorageError> {
        let path = self.path_of(reference);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(MediaStorageError::NotFound(reference.url()))
            }
            Err(e) => Err(io_error(&path, e)),
        }
    }

    async fn list(&self) -> Result<Vec<StoredMedia>, MediaStorageError> {
        let mut all = Vec::new();
        for category in MediaCategory::ALL {
            all.extend(self.list_category(category).await?);
        }
        Ok(all)
    }
}
