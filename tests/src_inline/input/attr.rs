use super::*;
use serde_json::json;

#[test]
fn test_attr_shapes() {
    assert!(attr_from_json(&json!(null)).is_absent());
    assert!(attr_from_json(&json!([])).is_absent());
    assert!(attr_from_json(&json!("")).is_absent());
    assert!(attr_from_json(&json!(["", "  "])).is_absent());
    assert!(attr_from_json(&json!({"a": 1})).is_absent());

    assert_eq!(attr_from_json(&json!("Master's")).first(), Some("Master's"));
    assert_eq!(
        attr_from_json(&json!(["PhD", "Master's"])).first(),
        Some("PhD")
    );
    assert_eq!(attr_from_json(&json!(["", "Bachelor's"])).first(), Some("Bachelor's"));
    assert_eq!(attr_from_json(&json!(5)).first(), Some("5"));
    assert_eq!(attr_from_json(&json!([[1], "Statistics"])).first(), Some("Statistics"));
}

#[test]
fn test_attr_deserialize() {
    #[derive(serde::Deserialize)]
    struct Holder {
        #[serde(default)]
        level: Attr,
    }
    let h: Holder = serde_json::from_str(r#"{"level": ["Bachelor's"]}"#).unwrap();
    assert_eq!(h.level.first(), Some("Bachelor's"));
    let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
    assert!(h.level.is_absent());
    let h: Holder = serde_json::from_str(r#"{"level": null}"#).unwrap();
    assert!(h.level.is_absent());
}

#[test]
fn test_attr_or_fallback() {
    let level = Attr::absent().or(Attr::single("Master's"));
    assert_eq!(level.first(), Some("Master's"));
    let level = Attr::single("PhD").or(Attr::single("Master's"));
    assert_eq!(level.first(), Some("PhD"));
}
