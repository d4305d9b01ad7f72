use std::sync::Arc;

use crate::portfolio::application::domain::content_repository::ContentRepository;
use crate::portfolio::application::ports::incoming::use_cases::{
    CommitItemUseCase, CreateDraftUseCase, EditDraftUseCase, GetPortfolioUseCase, OpenItemUseCase,
    RemoveItemUseCase, ReorderItemUseCase, ReplacePortfolioUseCase,
};
use crate::portfolio::application::ports::outgoing::DocumentStore;
use crate::portfolio::application::services::{
    CommitItemService, CreateDraftService, DocumentWriteLock, EditDraftService,
    GetPortfolioService, OpenItemService, RemoveItemService, ReorderItemService,
    ReplacePortfolioService,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplacePortfolioUseCase + Send + Sync>,
    pub create_draft: Arc<dyn CreateDraftUseCase + Send + Sync>,
    pub edit_draft: Arc<dyn EditDraftUseCase + Send + Sync>,
    pub open_item: Arc<dyn OpenItemUseCase + Send + Sync>,
    pub commit_item: Arc<dyn CommitItemUseCase + Send + Sync>,
    pub remove_item: Arc<dyn RemoveItemUseCase + Send + Sync>,
    pub reorder_item: Arc<dyn ReorderItemUseCase + Send + Sync>,
}

impl PortfolioUseCases {
    /// Wire every portfolio service to one shared store. Services that write
    /// share one `DocumentWriteLock`.
    pub fn from_store<S>(store: S) -> Self
    where
        S: DocumentStore + Clone + 'static,
    {
        let repository = ContentRepository::new();
        let write_lock = DocumentWriteLock::new();

        Self {
            get: Arc::new(GetPortfolioService::new(store.clone())),
            replace: Arc::new(ReplacePortfolioService::new(
                store.clone(),
                write_lock.clone(),
            )),
            create_draft: Arc::new(CreateDraftService::new(repository.clone())),
            edit_draft: Arc::new(EditDraftService::new(repository.clone())),
            open_item: Arc::new(OpenItemService::new(store.clone(), repository.clone())),
            commit_item: Arc::new(CommitItemService::new(
                store.clone(),
                repository.clone(),
                write_lock.clone(),
            )),
            remove_item: Arc::new(RemoveItemService::new(
                store.clone(),
                repository.clone(),
                write_lock.clone(),
            )),
            reorder_item: Arc::new(ReorderItemService::new(store, repository, write_lock)),
        }
    }
}
