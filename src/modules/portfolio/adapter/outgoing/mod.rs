mod document_store_config;
mod json_file_document_store;

pub use document_store_config::DocumentStoreConfig;
pub use json_file_document_store::JsonFileDocumentStore;
