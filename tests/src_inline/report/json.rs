use super::*;
use crate::input::ScoredInput;
use crate::input::parse_scored_results;
use crate::input::rankings::{ReferenceRankingSet, parse_reference_rankings};
use crate::pipeline::{EvalConfig, evaluate};
use serde_json::{Value, json};

#[test]
fn test_json_structure() {
    let scored = parse_scored_results(
        "{\"Subject_1\": [{\"overall_score\": 3}, {\"overall_score\": 1}]}\n",
        "Subject",
    );
    let rankings = parse_reference_rankings(&json!({"ranklist_1": [[2, 1]]}), "ranklist_");
    let report = evaluate(&scored, &rankings, &EvalConfig::default());
    let rendered = render_report_json(&report).unwrap();
    assert!(rendered.ends_with('\n'));

    let v: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(v["settings"]["major_lookup"], "case-insensitive");
    assert_eq!(v["settings"]["source_prefix"], "ranklist_");
    assert_eq!(v["subjects"][0]["ranking"], json!([1, 2]));
    assert_eq!(v["subjects"][0]["alignments"]["ranklist_1"], json!(-1.0));
    assert!(v["subjects"][0].get("undefined").is_none());
    assert_eq!(v["summary"]["per_subject"][0]["subject"], "Subject_1");
    assert_eq!(v["summary"]["per_subject"][0]["n_defined"], 1);
    assert_eq!(v["summary"]["global"]["mean"], json!(-1.0));
    assert!(v["summary"]["inter_source"]["sources"].is_null());
}

#[test]
fn test_json_empty_report() {
    let report = evaluate(
        &ScoredInput::default(),
        &ReferenceRankingSet::default(),
        &EvalConfig::default(),
    );
    let v: Value = serde_json::from_str(&render_report_json(&report).unwrap()).unwrap();
    assert_eq!(v["n_subjects_read"], 0);
    assert_eq!(v["summary"]["global"]["mean"], json!(0.0));
    assert_eq!(v["subjects"], json!([]));
}
