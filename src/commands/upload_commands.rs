use tauri::{command, State};

use crate::error::AppError;
use crate::models::view::WorkflowView;
use crate::services::upload_service;
use crate::state::AppState;

/// Validate and stage the image at `path` (from the picker dialog or a
/// drag-drop payload). Validation failures land on the error surface of
/// the returned view; a previously staged file stays in place.
#[command]
pub fn stage_file(path: String, state: State<'_, AppState>) -> Result<WorkflowView, AppError> {
    let mut workflow = state
        .workflow
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?;

    match upload_service::stage_from_path(&path) {
        Ok(file) => workflow.stage(file).map(Clone::clone),
        Err(err @ (AppError::InvalidFileType | AppError::FileTooLarge)) => {
            Ok(workflow.reject_file(&err).clone())
        }
        Err(err) => Err(err),
    }
}

#[command]
pub fn clear_file(state: State<'_, AppState>) -> Result<WorkflowView, AppError> {
    let mut workflow = state
        .workflow
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?;
    workflow.clear().map(Clone::clone)
}

#[command]
pub fn get_view(state: State<'_, AppState>) -> Result<WorkflowView, AppError> {
    let workflow = state
        .workflow
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?;
    Ok(workflow.view().clone())
}

/// Open the staged image in the system viewer.
#[command]
pub fn open_staged_file(state: State<'_, AppState>) -> Result<(), AppError> {
    let workflow = state
        .workflow
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?;
    let staged = workflow.staged().ok_or(AppError::NoFileStaged)?;

    tauri_plugin_opener::open_path(&staged.source_path, None::<&str>)
        .map_err(|e| AppError::General(format!("Failed to open image: {e}")))
}
