pub mod extraction_commands;
pub mod upload_commands;
