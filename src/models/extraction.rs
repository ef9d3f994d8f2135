use serde::{Deserialize, Serialize};

/// Wire envelope returned by `POST /api/extract`.
///
/// `success` is the only field the server always sends; everything else is
/// defaulted so a failure envelope (`{"success": false, "error": "..."}`)
/// deserializes cleanly. A body that does not match this shape at all is a
/// client error, not a render input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub best_match: Option<Candidate>,
    #[serde(default)]
    pub all_candidates: Vec<Candidate>,
    #[serde(default)]
    pub all_text: Vec<TextItem>,
    #[serde(default)]
    pub total_text_found: Option<usize>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub safety: Option<SafetyInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub confidence: f64,
    pub position: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub confidence: f64,
}

/// Safety lookup record; `found: false` means every other field is absent
/// and the safety card stays hidden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyInfo {
    pub found: bool,
    #[serde(default)]
    pub medicine_name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub avg_daily_dosage_mg: Option<f64>,
    #[serde(default)]
    pub side_effect_score: Option<f64>,
    #[serde(default)]
    pub toxicity_index: Option<f64>,
    #[serde(default)]
    pub interaction_count: Option<i64>,
    #[serde(default)]
    pub graph_degree_centrality: Option<f64>,
    #[serde(default)]
    pub graph_clustering_coeff: Option<f64>,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model: String,
}
