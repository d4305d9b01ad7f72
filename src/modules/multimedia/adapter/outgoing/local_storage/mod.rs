mod local_media_storage_config;
mod media_storage_local;

pub use local_media_storage_config::LocalMediaStorageConfig;
pub use media_storage_local::LocalMediaStorage;
