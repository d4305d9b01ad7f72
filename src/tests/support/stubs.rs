use async_trait::async_trait;

use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::outgoing::{DocumentStore, DocumentStoreError};

/// Login that never succeeds; routes under test that need a real login
/// swap in their own use case.
#[derive(Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

/// Store whose reads and writes fail in a fixed way.
#[derive(Clone)]
pub struct FailingDocumentStore {
    load: Option<DocumentStoreError>,
    save: DocumentStoreError,
    document: PortfolioDocument,
}

impl FailingDocumentStore {
    /// The file exists but cannot be parsed.
    pub fn corrupt() -> Self {
        Self {
            load: Some(DocumentStoreError::Corrupt(
                "expected value at line 1".to_string(),
            )),
            save: DocumentStoreError::Write("not reached".to_string()),
            document: crate::tests::support::fixtures::sample_document(),
        }
    }

    /// Loads fine, every save fails.
    pub fn read_only() -> Self {
        Self {
            load: None,
            save: DocumentStoreError::Write("read-only file system".to_string()),
            document: crate::tests::support::fixtures::sample_document(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn load(&self) -> Result<PortfolioDocument, DocumentStoreError> {
        match &self.load {
            Some(err) => Err(err.clone()),
            None => Ok(self.document.clone()),
        }
    }

    async fn save(&self, _document: &PortfolioDocument) -> Result<(), DocumentStoreError> {
        Err(self.save.clone())
    }
}
