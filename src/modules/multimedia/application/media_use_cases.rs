use std::sync::Arc;

use crate::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::multimedia::application::ports::incoming::use_cases::{
    DeleteMediaUseCase, ListMediaUseCase, UploadMediaUseCase,
};
use crate::multimedia::application::ports::outgoing::MediaStorage;
use crate::multimedia::application::services::{
    DeleteMediaService, ListMediaService, UploadMediaService,
};

#[derive(Clone)]
pub struct MultimediaUseCases {
    pub upload: Arc<dyn UploadMediaUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMediaUseCase + Send + Sync>,
    pub list: Arc<dyn ListMediaUseCase + Send + Sync>,
    /// Exposed so the upload route can stop reading a body early.
    pub policy: UploadPolicy,
}

impl MultimediaUseCases {
    pub fn from_storage<S>(storage: S, policy: UploadPolicy) -> Self
    where
        S: MediaStorage + Clone + 'static,
    {
        Self {
            upload: Arc::new(UploadMediaService::new(storage.clone(), policy.clone())),
            delete: Arc::new(DeleteMediaService::new(storage.clone())),
            list: Arc::new(ListMediaService::new(storage)),
            policy,
        }
    }
}
