pub mod app_state_builder;
pub mod auth_helper;
pub mod document_store_mock;
pub mod fixtures;
pub mod media_storage_mock;
pub mod stubs;
