use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::multimedia::application::ports::outgoing::MediaStorage;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::outgoing::DocumentStore;
use crate::tests::support::document_store_mock::InMemoryDocumentStore;
use crate::tests::support::media_storage_mock::InMemoryMediaStorage;
use crate::tests::support::stubs::StubLoginAdminUseCase;
use crate::AppState;

/// Real services over in-memory adapters unless a test swaps a piece out.
pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    media: MultimediaUseCases,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases::from_store(InMemoryDocumentStore::default()),
            media: MultimediaUseCases::from_storage(
                InMemoryMediaStorage::default(),
                UploadPolicy::default(),
            ),
            login_admin: Arc::new(StubLoginAdminUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_portfolio_store<S>(mut self, store: S) -> Self
    where
        S: DocumentStore + Clone + 'static,
    {
        self.portfolio = PortfolioUseCases::from_store(store);
        self
    }

    pub fn with_document(self, document: PortfolioDocument) -> Self {
        self.with_portfolio_store(InMemoryDocumentStore::new(document))
    }

    pub fn with_media_storage<S>(mut self, storage: S, policy: UploadPolicy) -> Self
    where
        S: MediaStorage + Clone + 'static,
    {
        self.media = MultimediaUseCases::from_storage(storage, policy);
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            media: self.media,
            login_admin_use_case: self.login_admin,
        })
    }
}
