use async_trait::async_trait;

use crate::portfolio::application::domain::content_repository::ContentRepository;
use crate::portfolio::application::domain::edit_session::{EditSession, EditSessionError};
use crate::portfolio::application::domain::item::Item;
use crate::portfolio::application::ports::incoming::use_cases::{
    DraftEdit, EditDraftError, EditDraftUseCase,
};

#[derive(Default)]
pub struct EditDraftService {
    repository: ContentRepository,
}

impl EditDraftService {
    pub fn new(repository: ContentRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl EditDraftUseCase for EditDraftService {
    async fn execute(&self, draft: Item, edit: DraftEdit) -> Result<Item, EditDraftError> {
        let mut session = EditSession::resume(self.repository.clone(), draft, None);

        match edit {
            DraftEdit::AppendToList { field, value } => {
                session.append_to_list_field(&field, &value)?
            }
            DraftEdit::RemoveFromList { field, index } => {
                session.remove_from_list_field(&field, index)?
            }
            DraftEdit::AttachFile(attachment) => session.attach_file(attachment)?,
            DraftEdit::DetachFile { index } => session.detach_file(index)?,
        }

        session
            .into_draft()
            .ok_or(EditDraftError::Session(EditSessionError::NoDraft))
    }
}
