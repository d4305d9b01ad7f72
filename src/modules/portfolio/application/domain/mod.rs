pub mod content_repository;
pub mod default_document;
pub mod edit_session;
pub mod entities;
pub mod id_generator;
pub mod item;
pub mod validation;
