pub mod list_engine;
pub mod upload_service;
pub mod user_service;
