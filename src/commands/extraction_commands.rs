use tauri::{command, State};
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::extraction::HealthStatus;
use crate::models::view::WorkflowView;
use crate::state::AppState;

/// Submit the staged file to the extraction server and fold the outcome
/// into the view. Re-entry while a request is in flight is rejected; the
/// busy state is released on every exit path.
#[command]
pub async fn extract(state: State<'_, AppState>) -> Result<WorkflowView, AppError> {
    let client = state
        .client
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?
        .clone();

    let file = {
        let mut workflow = state
            .workflow
            .lock()
            .map_err(|e| AppError::General(e.to_string()))?;
        workflow.begin_submission()?
    };

    let outcome = client.extract(&file).await;
    if let Err(err) = &outcome {
        warn!(error = %err, "extraction request failed");
    }

    // The slot was claimed above, so it must be released even if another
    // thread panicked with the lock held.
    let mut workflow = state
        .workflow
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    Ok(workflow.finish_submission(outcome).clone())
}

#[command]
pub async fn check_server(state: State<'_, AppState>) -> Result<HealthStatus, AppError> {
    let client = state
        .client
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?
        .clone();
    client.health().await
}

#[command]
pub fn set_api_base(base_url: String, state: State<'_, AppState>) -> Result<String, AppError> {
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::General(format!(
            "invalid API base URL: {base_url}"
        )));
    }

    let mut client = state
        .client
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?;
    client.set_base_url(base_url);
    info!(base_url = %client.base_url(), "API base updated");
    Ok(client.base_url().to_string())
}
