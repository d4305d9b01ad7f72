use async_trait::async_trait;

use crate::portfolio::application::domain::content_repository::{ContentError, Direction};
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::domain::item::ItemKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReorderItemError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

#[async_trait]
pub trait ReorderItemUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: ItemKind,
        id: String,
        direction: Direction,
    ) -> Result<PortfolioDocument, ReorderItemError>;
}
