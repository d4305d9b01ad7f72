use async_trait::async_trait;

use crate::portfolio::application::domain::content_repository::ContentRepository;
use crate::portfolio::application::domain::edit_session::EditSession;
use crate::portfolio::application::domain::item::{Item, ItemKind};
use crate::portfolio::application::ports::incoming::use_cases::CreateDraftUseCase;

#[derive(Default)]
pub struct CreateDraftService {
    repository: ContentRepository,
}

impl CreateDraftService {
    pub fn new(repository: ContentRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CreateDraftUseCase for CreateDraftService {
    async fn execute(&self, kind: ItemKind, parent_id: Option<String>) -> Item {
        EditSession::new(self.repository.clone()).begin_new(kind, parent_id.as_deref())
    }
}
