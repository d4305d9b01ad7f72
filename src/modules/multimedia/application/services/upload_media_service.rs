use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::multimedia::application::domain::entities::{human_readable_size, MediaReference};
use crate::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::multimedia::application::ports::incoming::use_cases::{
    UploadMediaCommand, UploadMediaError, UploadMediaUseCase, UploadedMedia,
};
use crate::multimedia::application::ports::outgoing::MediaStorage;
use crate::portfolio::application::domain::entities::FileAttachment;

pub struct UploadMediaService<S>
where
    S: MediaStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> UploadMediaService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl<S> UploadMediaUseCase for UploadMediaService<S>
where
    S: MediaStorage + Send + Sync,
{
    async fn execute(
        &self,
        command: UploadMediaCommand,
    ) -> Result<UploadedMedia, UploadMediaError> {
        let size = command.bytes.len() as u64;
        let accepted = self.policy.validate(
            &command.declared_kind,
            &command.mime_type,
            &command.file_name,
            size,
        )?;

        let now = Utc::now();
        // No collision handling beyond the millisecond prefix.
        let reference = MediaReference::new(accepted.category, accepted.stored_file_name(now));

        let stored = self
            .storage
            .store(&reference, &command.bytes)
            .await
            .map_err(|e| UploadMediaError::Storage(e.to_string()))?;

        info!(url = %stored.url, size, "Stored upload");

        let mime_type = command.mime_type.trim().to_ascii_lowercase();
        Ok(UploadedMedia {
            attachment: FileAttachment {
                id: format!("file_{}", Uuid::new_v4()),
                name: accepted.file_name.clone(),
                mime_type: mime_type.clone(),
                url: stored.url.clone(),
                size: Some(human_readable_size(size)),
                uploaded_at: now,
            },
            file_url: stored.url,
            file_name: accepted.file_name,
            file_size: size,
            file_type: mime_type,
        })
    }
}
