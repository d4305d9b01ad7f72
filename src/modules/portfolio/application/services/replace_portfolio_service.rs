use async_trait::async_trait;
use tracing::info;

use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::domain::validation::validate_document;
use crate::portfolio::application::ports::incoming::use_cases::{
    ReplacePortfolioError, ReplacePortfolioUseCase,
};
use crate::portfolio::application::ports::outgoing::DocumentStore;

use super::DocumentWriteLock;

pub struct ReplacePortfolioService<S>
where
    S: DocumentStore,
{
    store: S,
    write_lock: DocumentWriteLock,
}

impl<S> ReplacePortfolioService<S>
where
    S: DocumentStore,
{
    pub fn new(store: S, write_lock: DocumentWriteLock) -> Self {
        Self { store, write_lock }
    }
}

#[async_trait]
impl<S> ReplacePortfolioUseCase for ReplacePortfolioService<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn execute(
        &self,
        document: PortfolioDocument,
    ) -> Result<PortfolioDocument, ReplacePortfolioError> {
        validate_document(&document)?;

        let _guard = self.write_lock.acquire().await;
        let document = document.canonicalized();
        self.store
            .save(&document)
            .await
            .map_err(|e| ReplacePortfolioError::Persistence(e.to_string()))?;

        info!("Portfolio document replaced");
        Ok(document)
    }
}
