use super::*;
use crate::input::rankings::{ReferenceRankingSet, parse_reference_rankings};
use crate::input::{ScoredInput, parse_scored_results};
use crate::pipeline::{EvalConfig, evaluate};
use serde_json::json;

#[test]
fn test_text_sections() {
    let scored = parse_scored_results(
        concat!(
            "{\"Subject_1\": [{\"overall_score\": 80}, {\"overall_score\": 80}, {\"overall_score\": 90}]}\n",
            "{\"Subject_2\": []}\n",
        ),
        "Subject",
    );
    let rankings = parse_reference_rankings(
        &json!({"ranklist_1": [[2, 3, 1]], "ranklist_2": [[1, 2, 3]]}),
        "ranklist_",
    );
    let report = evaluate(&scored, &rankings, &EvalConfig::default());
    let text = render_report_text(&report);

    assert!(text.starts_with("Rank Alignment Report\n"));
    assert!(text.contains("Subjects read: 2, evaluated: 1, skipped: 1"));
    assert!(text.contains("Reference sources: ranklist_1, ranklist_2"));
    assert!(text.contains("1. Performance"));
    assert!(text.contains("  Subject_1: model order 3 > 1 > 2"));
    assert!(text.contains("    ranklist_1: 1.000"));
    assert!(text.contains("  ranklist_1 vs ranklist_2: -0.333"));
    assert!(text.contains("Skipped subjects\n  Subject_2: subject has no scored items"));
}

#[test]
fn test_text_no_data() {
    let report = evaluate(
        &ScoredInput::default(),
        &ReferenceRankingSet::default(),
        &EvalConfig::default(),
    );
    let text = render_report_text(&report);
    assert!(text.contains("Reference sources: none"));
    assert!(text.contains("No data: no subject could be evaluated."));
    assert!(!text.contains("1. Performance"));
}
