pub mod auth;
pub mod multimedia;
pub mod portfolio;
