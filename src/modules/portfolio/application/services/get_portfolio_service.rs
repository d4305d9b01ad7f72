use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::portfolio::application::ports::outgoing::DocumentStore;

pub struct GetPortfolioService<S>
where
    S: DocumentStore,
{
    store: S,
}

impl<S> GetPortfolioService<S>
where
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetPortfolioUseCase for GetPortfolioService<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioDocument, GetPortfolioError> {
        self.store
            .load()
            .await
            .map_err(|e| GetPortfolioError::Persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::default_document::default_document;
    use crate::portfolio::application::ports::outgoing::DocumentStoreError;
    use crate::tests::support::document_store_mock::MockDocumentStoreMock;

    #[tokio::test]
    async fn test_execute_returns_stored_document() {
        let mut store = MockDocumentStoreMock::new();
        store
            .expect_load()
            .times(1)
            .returning(|| Ok(default_document()));

        let service = GetPortfolioService::new(store);

        let doc = service.execute().await.unwrap();
        assert_eq!(doc, default_document());
    }

    #[tokio::test]
    async fn test_execute_maps_store_error() {
        let mut store = MockDocumentStoreMock::new();
        store
            .expect_load()
            .returning(|| Err(DocumentStoreError::Corrupt("expected value".to_string())));

        let service = GetPortfolioService::new(store);

        let res = service.execute().await;
        assert!(matches!(
            res,
            Err(GetPortfolioError::Persistence(msg)) if msg.contains("expected value")
        ));
    }
}
