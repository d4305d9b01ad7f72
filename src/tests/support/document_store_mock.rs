use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::Mutex;

use crate::portfolio::application::domain::default_document::default_document;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::outgoing::{DocumentStore, DocumentStoreError};

mock! {
    pub DocumentStoreMock {}
    #[async_trait]
    impl DocumentStore for DocumentStoreMock {
        async fn load(&self) -> Result<PortfolioDocument, DocumentStoreError>;
        async fn save(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError>;
    }
}

/// Store that keeps the document in memory, canonicalizing on save the way
/// the file store does.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    document: Arc<Mutex<PortfolioDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new(document: PortfolioDocument) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    pub async fn snapshot(&self) -> PortfolioDocument {
        self.document.lock().await.clone()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new(default_document())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load(&self) -> Result<PortfolioDocument, DocumentStoreError> {
        Ok(self.document.lock().await.clone())
    }

    async fn save(&self, document: &PortfolioDocument) -> Result<(), DocumentStoreError> {
        *self.document.lock().await = document.clone().canonicalized();
        Ok(())
    }
}
