use async_trait::async_trait;

use crate::portfolio::application::domain::edit_session::EditSessionError;
use crate::portfolio::application::domain::entities::FileAttachment;
use crate::portfolio::application::domain::item::Item;

#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    AppendToList { field: String, value: String },
    RemoveFromList { field: String, index: usize },
    AttachFile(FileAttachment),
    DetachFile { index: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditDraftError {
    #[error(transparent)]
    Session(#[from] EditSessionError),
}

/// Edits applied to a draft the client keeps between requests. Nothing is
/// persisted until the draft is committed.
#[async_trait]
pub trait EditDraftUseCase: Send + Sync {
    async fn execute(&self, draft: Item, edit: DraftEdit) -> Result<Item, EditDraftError>;
}
