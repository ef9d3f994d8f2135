use std::sync::Mutex;

use crate::error::AppError;
use crate::models::extraction::ExtractionResponse;
use crate::models::staged_file::StagedFile;
use crate::models::view::WorkflowView;
use crate::services::extraction_client::ExtractionClient;
use crate::services::render_service;

/// The upload-and-render workflow: one staged file, one in-flight flag,
/// and the current render state. Owning all three here (instead of
/// scattering them as globals) lets independent instances exist side by
/// side and be tested that way.
pub struct UploadWorkflow {
    staged: Option<StagedFile>,
    submitting: bool,
    view: WorkflowView,
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self {
            staged: None,
            submitting: false,
            view: WorkflowView::initial(),
        }
    }

    pub fn view(&self) -> &WorkflowView {
        &self.view
    }

    pub fn staged(&self) -> Option<&StagedFile> {
        self.staged.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace the staged slot with a freshly validated file: prompt out,
    /// preview in, extract armed, any previous results or error cleared.
    pub fn stage(&mut self, file: StagedFile) -> Result<&WorkflowView, AppError> {
        if self.submitting {
            return Err(AppError::ExtractionInFlight);
        }

        self.view.upload.prompt_visible = false;
        self.view.upload.preview_visible = true;
        self.view.upload.preview_url = Some(file.preview_url.clone());
        self.view.upload.file_name = Some(file.file_name.clone());
        self.view.upload.dimensions_label = file.dimensions.map(|(w, h)| format!("{w} x {h} px"));
        self.view.upload.extract_enabled = true;
        self.view.clear_output();
        self.staged = Some(file);
        Ok(&self.view)
    }

    /// Route a staging failure to the error surface. The previously staged
    /// file (and its preview) stays untouched.
    pub fn reject_file(&mut self, error: &AppError) -> &WorkflowView {
        self.view.show_error(error.to_string());
        &self.view
    }

    /// Back to the no-file state with nothing staged and no output
    /// showing.
    pub fn clear(&mut self) -> Result<&WorkflowView, AppError> {
        if self.submitting {
            return Err(AppError::ExtractionInFlight);
        }
        self.staged = None;
        self.view = WorkflowView::initial();
        Ok(&self.view)
    }

    /// Claim the single submission slot and hand back the file to submit.
    /// Rejects re-entry while a request is in flight and refuses to run
    /// without a staged file.
    pub fn begin_submission(&mut self) -> Result<StagedFile, AppError> {
        if self.submitting {
            return Err(AppError::ExtractionInFlight);
        }
        let file = self.staged.clone().ok_or(AppError::NoFileStaged)?;

        self.submitting = true;
        self.view.busy = true;
        self.view.upload.extract_enabled = false;
        self.view.clear_output();
        Ok(file)
    }

    /// Release the submission slot and route the outcome. The busy state
    /// is dropped before any rendering happens, on success and on every
    /// failure path alike.
    pub fn finish_submission(
        &mut self,
        outcome: Result<ExtractionResponse, AppError>,
    ) -> &WorkflowView {
        self.submitting = false;
        self.view.busy = false;
        self.view.upload.extract_enabled = self.staged.is_some();

        match outcome {
            Ok(response) if response.success => {
                let results = render_service::build_results_view(&response);
                self.view.show_results(results);
            }
            Ok(response) => {
                let message = response
                    .error
                    .unwrap_or_else(|| "An error occurred".to_string());
                self.view.show_error(message);
            }
            Err(error) => {
                self.view.show_error(error.to_string());
            }
        }
        &self.view
    }
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub workflow: Mutex<UploadWorkflow>,
    pub client: Mutex<ExtractionClient>,
}

impl AppState {
    pub fn new(api_base: &str) -> Self {
        Self {
            workflow: Mutex::new(UploadWorkflow::new()),
            client: Mutex::new(ExtractionClient::new(api_base)),
        }
    }
}
