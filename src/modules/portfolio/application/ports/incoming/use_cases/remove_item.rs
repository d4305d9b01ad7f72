use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::domain::item::ItemKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoveItemError {
    #[error("Persistence error: {0}")]
    Persistence(String),
}

#[async_trait]
pub trait RemoveItemUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: ItemKind,
        id: String,
        parent_id: Option<String>,
    ) -> Result<PortfolioDocument, RemoveItemError>;
}
