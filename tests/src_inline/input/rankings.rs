use super::*;
use serde_json::json;

#[test]
fn test_prefix_filter_and_order() {
    let doc = json!({
        "ranklist_2": [[1, 2, 3]],
        "notes": "free text",
        "ranklist_1": [[3, 2, 1], [2, 1, 3]]
    });
    let set = parse_reference_rankings(&doc, "ranklist_");
    let ids: Vec<&str> = set.source_ids().collect();
    assert_eq!(ids, vec!["ranklist_1", "ranklist_2"]);
    assert_eq!(set.row("ranklist_1", 1), Some(&Some(vec![2, 1, 3])));
    assert_eq!(set.row("ranklist_2", 1), None);
}

#[test]
fn test_malformed_rows_keep_alignment() {
    let doc = json!({"ranklist_1": [[1, "x"], [1.0, 2.0], [-1, 2], "bad", [2, 1]]});
    let set = parse_reference_rankings(&doc, "ranklist_");
    let rows = &set.sources["ranklist_1"];
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], None);
    assert_eq!(rows[1], Some(vec![1, 2]));
    assert_eq!(rows[2], None);
    assert_eq!(rows[3], None);
    assert_eq!(rows[4], Some(vec![2, 1]));
}

#[test]
fn test_non_list_source_skipped() {
    let doc = json!({"ranklist_1": {"a": 1}, "ranklist_2": [[1]]});
    let set = parse_reference_rankings(&doc, "ranklist_");
    assert_eq!(set.sources.len(), 1);
    assert!(set.sources.contains_key("ranklist_2"));
}

#[test]
fn test_non_object_document() {
    assert!(parse_reference_rankings(&json!([1, 2]), "ranklist_").is_empty());
}
