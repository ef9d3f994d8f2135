mod commands;
mod error;
mod models;
mod services;
mod state;

use commands::{extraction_commands, upload_commands};
use state::AppState;

use tauri::Manager;
use tracing_subscriber::EnvFilter;

/// Where the extraction server listens by default; override at runtime
/// with the `set_api_base` command.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            app.manage(AppState::new(DEFAULT_API_BASE));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            upload_commands::stage_file,
            upload_commands::clear_file,
            upload_commands::get_view,
            upload_commands::open_staged_file,
            extraction_commands::extract,
            extraction_commands::check_server,
            extraction_commands::set_api_base,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
