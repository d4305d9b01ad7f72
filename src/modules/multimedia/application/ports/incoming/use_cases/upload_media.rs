use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::multimedia::application::domain::policies::upload_policy::UploadError;
use crate::portfolio::application::domain::entities::FileAttachment;

#[derive(Debug, Clone)]
pub struct UploadMediaCommand {
    /// `image`, `document` or `code`
    pub declared_kind: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedMedia {
    /// Reference to store in a record field
    #[schema(example = "/uploads/images/1714557600000-diagram.png")]
    pub file_url: String,

    /// Original file name as sent by the client
    #[schema(example = "diagram.png")]
    pub file_name: String,

    pub file_size: u64,

    #[schema(example = "image/png")]
    pub file_type: String,

    /// Ready to attach to a draft
    pub attachment: FileAttachment,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadMediaError {
    #[error(transparent)]
    Rejected(#[from] UploadError),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    async fn execute(&self, command: UploadMediaCommand)
        -> Result<UploadedMedia, UploadMediaError>;
}
