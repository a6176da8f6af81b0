use super::*;
use serde_json::json;

fn item(score: Value, level: Value, major: Value, req_level: Value, req_major: Value) -> Value {
    json!({
        "overall_score": score,
        "resume": {"qualifications": {"EDUCATION": {"level": level, "major": major}}},
        "job_description": {"EDUCATION": {"required_level": req_level, "required_major": req_major}}
    })
}

#[test]
fn test_subject_items_positional_and_sole_key() {
    let line = json!({"Subject_1": [{"overall_score": 1}]});
    assert_eq!(subject_items(&line, "Subject_1").unwrap().len(), 1);

    let line = json!({"Resume_1": [{"overall_score": 1}, {"overall_score": 2}]});
    assert_eq!(subject_items(&line, "Subject_1").unwrap().len(), 2);

    let line = json!({"A": [], "B": []});
    assert_eq!(
        subject_items(&line, "Subject_1").unwrap_err(),
        SubjectError::MissingRecord
    );

    let line = json!([1, 2]);
    assert!(matches!(
        subject_items(&line, "Subject_1"),
        Err(SubjectError::MalformedLine(_))
    ));
}

#[test]
fn test_parse_subject_education() {
    let items = vec![
        item(
            json!(80),
            json!(["Master's"]),
            json!("Computer Science"),
            json!(["Bachelor's"]),
            json!([]),
        ),
        item(json!("75.5"), json!(null), json!([]), json!(null), json!(["Statistics"])),
    ];
    let data = parse_subject(&items).unwrap();
    assert_eq!(data.scores, vec![80.0, 75.5]);
    assert_eq!(data.education[0].level.candidate.first(), Some("Master's"));
    assert_eq!(data.education[0].level.required.first(), Some("Bachelor's"));
    assert_eq!(data.education[0].major.candidate.first(), Some("Computer Science"));
    assert!(data.education[0].major.required.is_absent());
    assert!(data.education[1].level.candidate.is_absent());
    assert_eq!(data.education[1].major.required.first(), Some("Statistics"));
}

#[test]
fn test_required_level_falls_back_to_required_degree() {
    let record = json!({
        "overall_score": 50,
        "job_description": {"EDUCATION": {"required_level": [], "required_degree": ["Master's"]}}
    });
    let data = parse_subject(&[record]).unwrap();
    assert_eq!(data.education[0].level.required.first(), Some("Master's"));
}

#[test]
fn test_missing_sections_are_absent_not_errors() {
    let data = parse_subject(&[json!({"overall_score": 10, "resume": "garbled"})]).unwrap();
    assert_eq!(data.education[0], EducationProfile::default());
}

#[test]
fn test_score_errors() {
    assert_eq!(parse_subject(&[]).unwrap_err(), SubjectError::EmptySubject);
    assert_eq!(
        parse_subject(&[json!({"overall_score": 1}), json!({})]).unwrap_err(),
        SubjectError::MissingScore { item: 1 }
    );
    assert_eq!(
        parse_subject(&[json!({"overall_score": "high"})]).unwrap_err(),
        SubjectError::MissingScore { item: 0 }
    );
    assert_eq!(
        parse_subject(&[json!({"overall_score": "NaN"})]).unwrap_err(),
        SubjectError::NonFiniteScore { item: 0 }
    );
}
