use async_trait::async_trait;

use crate::portfolio::application::domain::edit_session::EditSessionError;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::domain::item::Item;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommitItemError {
    #[error(transparent)]
    Session(#[from] EditSessionError),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Load, upsert the draft, save.
#[async_trait]
pub trait CommitItemUseCase: Send + Sync {
    async fn execute(
        &self,
        draft: Item,
        parent_id: Option<String>,
    ) -> Result<PortfolioDocument, CommitItemError>;
}
