use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReplacePortfolioError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Whole-document save from the admin editor.
#[async_trait]
pub trait ReplacePortfolioUseCase: Send + Sync {
    /// Returns the document as persisted (canonical order applied).
    async fn execute(
        &self,
        document: PortfolioDocument,
    ) -> Result<PortfolioDocument, ReplacePortfolioError>;
}
