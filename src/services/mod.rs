pub mod extraction_client;
pub mod render_service;
pub mod upload_service;
