use crate::models::extraction::{Candidate, ExtractionResponse, SafetyInfo, TextItem};
use crate::models::view::{
    BestMatchView, CandidateRow, ConfidenceBand, ResultsView, SafetyView, TextRow,
};

pub const NO_MATCH_PLACEHOLDER: &str = "No medicine name detected";
pub const NO_CANDIDATES_NOTE: &str = "No other candidates";
pub const NO_TEXT_NOTE: &str = "No text detected";
pub const METRIC_PLACEHOLDER: &str = "-";

/// Positions 2nd through 5th of the candidate ranking.
const MAX_SECONDARY_CANDIDATES: usize = 4;

pub fn clamp_confidence(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// ≥70 good, 50..70 caution, <50 poor.
pub fn confidence_band(percent: f64) -> ConfidenceBand {
    if percent >= 70.0 {
        ConfidenceBand::Good
    } else if percent >= 50.0 {
        ConfidenceBand::Caution
    } else {
        ConfidenceBand::Poor
    }
}

fn confidence_label(percent: f64) -> String {
    format!("{percent}%")
}

/// Project a successful extraction envelope into render state. Pure and
/// total: the same envelope always yields the same view.
pub fn build_results_view(response: &ExtractionResponse) -> ResultsView {
    let (other_candidates, candidates_note) = candidate_rows(&response.all_candidates);
    let (detected_text, text_note) = text_rows(&response.all_text);

    ResultsView {
        best_match: best_match_view(response.best_match.as_ref()),
        other_candidates,
        candidates_note,
        detected_text,
        text_note,
        safety: safety_view(response.safety.as_ref()),
    }
}

fn best_match_view(best_match: Option<&Candidate>) -> BestMatchView {
    match best_match {
        Some(candidate) => {
            let confidence = clamp_confidence(candidate.confidence);
            BestMatchView {
                name: candidate.name.clone(),
                confidence_label: confidence_label(confidence),
                bar_width_pct: confidence,
                band: confidence_band(confidence),
            }
        }
        None => BestMatchView {
            name: NO_MATCH_PLACEHOLDER.to_string(),
            confidence_label: confidence_label(0.0),
            bar_width_pct: 0.0,
            band: ConfidenceBand::Poor,
        },
    }
}

fn candidate_rows(all_candidates: &[Candidate]) -> (Vec<CandidateRow>, Option<String>) {
    if all_candidates.len() < 2 {
        return (Vec::new(), Some(NO_CANDIDATES_NOTE.to_string()));
    }

    let rows = all_candidates
        .iter()
        .skip(1)
        .take(MAX_SECONDARY_CANDIDATES)
        .map(|candidate| CandidateRow {
            name: candidate.name.clone(),
            confidence_label: confidence_label(clamp_confidence(candidate.confidence)),
            position: candidate.position,
        })
        .collect();
    (rows, None)
}

fn text_rows(all_text: &[TextItem]) -> (Vec<TextRow>, Option<String>) {
    if all_text.is_empty() {
        return (Vec::new(), Some(NO_TEXT_NOTE.to_string()));
    }

    let rows = all_text
        .iter()
        .enumerate()
        .map(|(idx, item)| TextRow {
            index: idx + 1,
            text: item.text.clone(),
            confidence_label: confidence_label(clamp_confidence(item.confidence)),
        })
        .collect();
    (rows, None)
}

fn safety_view(safety: Option<&SafetyInfo>) -> Option<SafetyView> {
    let info = safety.filter(|s| s.found)?;
    Some(SafetyView {
        medicine_name: text_or_placeholder(info.medicine_name.as_deref()),
        label: info
            .label
            .as_deref()
            .map(|l| l.to_uppercase())
            .unwrap_or_else(|| METRIC_PLACEHOLDER.to_string()),
        ingredients: text_or_placeholder(info.ingredients.as_deref()),
        avg_daily_dosage_mg: metric(info.avg_daily_dosage_mg),
        side_effect_score: metric(info.side_effect_score),
        toxicity_index: metric(info.toxicity_index),
        interaction_count: count(info.interaction_count),
        graph_degree_centrality: metric(info.graph_degree_centrality),
        graph_clustering_coeff: metric(info.graph_clustering_coeff),
    })
}

fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(METRIC_PLACEHOLDER)
        .to_string()
}

fn metric(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| METRIC_PLACEHOLDER.to_string())
}

fn count(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| METRIC_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::extraction_client::parse_extraction_response;
    use serde_json::json;

    fn candidate(name: &str, confidence: f64, position: i64) -> Candidate {
        Candidate {
            name: name.to_string(),
            confidence,
            position,
        }
    }

    fn empty_response() -> ExtractionResponse {
        parse_extraction_response(br#"{"success": true}"#).unwrap()
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(confidence_band(70.0), ConfidenceBand::Good);
        assert_eq!(confidence_band(69.0), ConfidenceBand::Caution);
        assert_eq!(confidence_band(50.0), ConfidenceBand::Caution);
        assert_eq!(confidence_band(49.0), ConfidenceBand::Poor);
        assert_eq!(confidence_band(100.0), ConfidenceBand::Good);
        assert_eq!(confidence_band(0.0), ConfidenceBand::Poor);
    }

    #[test]
    fn confidence_is_clamped_for_display() {
        let mut response = empty_response();
        response.best_match = Some(candidate("Aspirin", 120.0, 1));

        let view = build_results_view(&response);
        assert_eq!(view.best_match.bar_width_pct, 100.0);
        assert_eq!(view.best_match.confidence_label, "100%");

        response.best_match = Some(candidate("Aspirin", -5.0, 1));
        let view = build_results_view(&response);
        assert_eq!(view.best_match.bar_width_pct, 0.0);
    }

    #[test]
    fn missing_best_match_renders_the_placeholder() {
        let view = build_results_view(&empty_response());
        assert_eq!(view.best_match.name, NO_MATCH_PLACEHOLDER);
        assert_eq!(view.best_match.bar_width_pct, 0.0);
        assert_eq!(view.best_match.confidence_label, "0%");
        assert_eq!(view.best_match.band, ConfidenceBand::Poor);
    }

    #[test]
    fn secondary_candidates_are_positions_two_through_five() {
        let mut response = empty_response();
        response.all_candidates = (1..=6)
            .map(|i| candidate(&format!("Med{i}"), 90.0 - i as f64, i))
            .collect();

        let view = build_results_view(&response);
        assert_eq!(view.other_candidates.len(), 4);
        assert_eq!(view.other_candidates[0].name, "Med2");
        assert_eq!(view.other_candidates[3].name, "Med5");
        assert!(view.candidates_note.is_none());
    }

    #[test]
    fn fewer_than_two_candidates_shows_the_note() {
        let mut response = empty_response();
        let view = build_results_view(&response);
        assert!(view.other_candidates.is_empty());
        assert_eq!(view.candidates_note.as_deref(), Some(NO_CANDIDATES_NOTE));

        response.all_candidates = vec![candidate("Aspirin", 82.0, 1)];
        let view = build_results_view(&response);
        assert!(view.other_candidates.is_empty());
        assert_eq!(view.candidates_note.as_deref(), Some(NO_CANDIDATES_NOTE));
    }

    #[test]
    fn detected_text_rows_are_one_indexed() {
        let mut response = empty_response();
        response.all_text = vec![
            TextItem {
                text: "ASPIRIN".to_string(),
                confidence: 91.0,
            },
            TextItem {
                text: "325MG".to_string(),
                confidence: 83.5,
            },
        ];

        let view = build_results_view(&response);
        assert_eq!(view.detected_text.len(), 2);
        assert_eq!(view.detected_text[0].index, 1);
        assert_eq!(view.detected_text[1].index, 2);
        assert_eq!(view.detected_text[1].confidence_label, "83.5%");
        assert!(view.text_note.is_none());
    }

    #[test]
    fn empty_text_list_shows_the_note() {
        let view = build_results_view(&empty_response());
        assert!(view.detected_text.is_empty());
        assert_eq!(view.text_note.as_deref(), Some(NO_TEXT_NOTE));
    }

    #[test]
    fn safety_card_is_hidden_unless_found() {
        let body = json!({"success": true, "safety": {"found": false}});
        let response = parse_extraction_response(body.to_string().as_bytes()).unwrap();
        assert!(build_results_view(&response).safety.is_none());

        let response = empty_response();
        assert!(build_results_view(&response).safety.is_none());
    }

    #[test]
    fn safety_fields_fall_back_to_the_placeholder() {
        let body = json!({
            "success": true,
            "safety": {"found": true, "medicine_name": "Aspirin", "label": "otc"}
        });
        let response = parse_extraction_response(body.to_string().as_bytes()).unwrap();

        let safety = build_results_view(&response).safety.unwrap();
        assert_eq!(safety.medicine_name, "Aspirin");
        assert_eq!(safety.label, "OTC");
        assert_eq!(safety.ingredients, METRIC_PLACEHOLDER);
        assert_eq!(safety.avg_daily_dosage_mg, METRIC_PLACEHOLDER);
        assert_eq!(safety.graph_clustering_coeff, METRIC_PLACEHOLDER);
    }

    #[test]
    fn full_aspirin_envelope_renders_every_panel() {
        let body = json!({
            "success": true,
            "best_match": {"name": "Aspirin", "confidence": 82.0, "position": 1},
            "all_candidates": [
                {"name": "Aspirin", "confidence": 82.0, "position": 1},
                {"name": "Aspirtab", "confidence": 61.0, "position": 2},
                {"name": "Asprimox", "confidence": 55.0, "position": 3},
                {"name": "Ascriptin", "confidence": 48.0, "position": 4},
                {"name": "Aspergum", "confidence": 41.0, "position": 5}
            ],
            "all_text": [
                {"text": "ASPIRIN", "confidence": 91.0},
                {"text": "325MG TABLETS", "confidence": 84.0}
            ],
            "safety": {
                "found": true,
                "medicine_name": "Aspirin",
                "label": "otc",
                "ingredients": "acetylsalicylic acid",
                "avg_daily_dosage_mg": 325.0,
                "side_effect_score": 2.0,
                "toxicity_index": 0.1,
                "interaction_count": 3,
                "graph_degree_centrality": 0.4,
                "graph_clustering_coeff": 0.2
            }
        });
        let response = parse_extraction_response(body.to_string().as_bytes()).unwrap();

        let view = build_results_view(&response);
        assert_eq!(view.best_match.name, "Aspirin");
        assert_eq!(view.best_match.bar_width_pct, 82.0);
        assert_eq!(view.best_match.band, ConfidenceBand::Good);
        assert_eq!(view.other_candidates.len(), 4);
        assert_eq!(view.detected_text.len(), 2);

        let safety = view.safety.unwrap();
        assert_eq!(safety.avg_daily_dosage_mg, "325");
        assert_eq!(safety.side_effect_score, "2");
        assert_eq!(safety.toxicity_index, "0.1");
        assert_eq!(safety.interaction_count, "3");
        assert_eq!(safety.graph_degree_centrality, "0.4");
        assert_eq!(safety.graph_clustering_coeff, "0.2");
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut response = empty_response();
        response.best_match = Some(candidate("Aspirin", 82.0, 1));
        assert_eq!(build_results_view(&response), build_results_view(&response));
    }
}
