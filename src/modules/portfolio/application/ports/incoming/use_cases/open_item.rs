use async_trait::async_trait;

use crate::portfolio::application::domain::content_repository::ContentError;
use crate::portfolio::application::domain::item::{Item, ItemKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OpenItemError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Copy of a stored record to be edited as a draft.
#[async_trait]
pub trait OpenItemUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: ItemKind,
        id: String,
        parent_id: Option<String>,
    ) -> Result<Item, OpenItemError>;
}
