mod delete_media;
mod list_media;
mod upload_media;

pub use delete_media::{
    __path_delete_media_handler, delete_media_handler, DeleteMediaRequest, DeleteMediaResponse,
};
pub use list_media::{__path_list_media_handler, list_media_handler, ListMediaResponse};
pub use upload_media::{__path_upload_media_handler, upload_media_handler, UploadQuery};
