use serde::{Deserialize, Serialize};

/// Qualitative classification of a confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Good,
    Caution,
    Poor,
}

/// Upload pane state: which of the prompt/preview regions is visible and
/// whether the extract action is armed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadView {
    pub prompt_visible: bool,
    pub preview_visible: bool,
    pub preview_url: Option<String>,
    pub file_name: Option<String>,
    pub dimensions_label: Option<String>,
    pub extract_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatchView {
    pub name: String,
    pub confidence_label: String,
    pub bar_width_pct: f64,
    pub band: ConfidenceBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRow {
    pub name: String,
    pub confidence_label: String,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRow {
    pub index: usize,
    pub text: String,
    pub confidence_label: String,
}

/// Safety card fields, already formatted for display. Absent metrics are
/// the "-" placeholder so the webview never formats anything itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyView {
    pub medicine_name: String,
    pub label: String,
    pub ingredients: String,
    pub avg_daily_dosage_mg: String,
    pub side_effect_score: String,
    pub toxicity_index: String,
    pub interaction_count: String,
    pub graph_degree_centrality: String,
    pub graph_clustering_coeff: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsView {
    pub best_match: BestMatchView,
    pub other_candidates: Vec<CandidateRow>,
    pub candidates_note: Option<String>,
    pub detected_text: Vec<TextRow>,
    pub text_note: Option<String>,
    pub safety: Option<SafetyView>,
}

/// Full render state of the page. `results` and `error` are mutually
/// exclusive; the mutators below are the only way workflow code sets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowView {
    pub upload: UploadView,
    pub busy: bool,
    pub results: Option<ResultsView>,
    pub error: Option<String>,
}

impl WorkflowView {
    /// The no-file state: upload prompt showing, everything else hidden.
    pub fn initial() -> Self {
        Self {
            upload: UploadView {
                prompt_visible: true,
                preview_visible: false,
                preview_url: None,
                file_name: None,
                dimensions_label: None,
                extract_enabled: false,
            },
            busy: false,
            results: None,
            error: None,
        }
    }

    pub fn show_results(&mut self, results: ResultsView) {
        self.error = None;
        self.results = Some(results);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.results = None;
        self.error = Some(message.into());
    }

    pub fn clear_output(&mut self) {
        self.results = None;
        self.error = None;
    }
}

impl Default for WorkflowView {
    fn default() -> Self {
        Self::initial()
    }
}
