use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioDocument;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Persistence error: {0}")]
    Persistence(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioDocument, GetPortfolioError>;
}
