mod delete_media;
mod list_media;
mod upload_media;

pub use delete_media::{DeleteMediaError, DeleteMediaUseCase};
pub use list_media::{ListMediaError, ListMediaUseCase};
pub use upload_media::{UploadMediaCommand, UploadMediaError, UploadMediaUseCase, UploadedMedia};
