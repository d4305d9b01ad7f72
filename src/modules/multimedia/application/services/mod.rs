mod delete_media_service;
mod list_media_service;
mod upload_media_service;

pub use delete_media_service::DeleteMediaService;
pub use list_media_service::ListMediaService;
pub use upload_media_service::UploadMediaService;
