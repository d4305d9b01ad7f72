use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioDocument;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("Failed to read portfolio document: {0}")]
    Read(String),

    #[error("Portfolio document is not valid JSON: {0}")]
    Corrupt(String),

    #[error("Failed to write portfolio document: {0}")]
    Write(String),
}

/// Persistence of the single portfolio document.
///
/// `load` bootstraps and persists the default document when nothing is
/// stored yet. `save` replaces the whole document atomically.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self) -> Result<PortfolioDocument, DocumentStoreError>;

    async fn save(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError>;
}
