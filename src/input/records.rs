use serde_json::Value;

use crate::input::SubjectError;
use crate::input::attr::attr_from_json;
use crate::model::education::{Attr, AxisPair, EducationProfile};
use crate::model::scores::ScoreVector;

const CANDIDATE_EDUCATION: &str = "/resume/qualifications/EDUCATION";
const JOB_EDUCATION: &str = "/job_description/EDUCATION";

/// One subject's scored line, reduced to what the evaluation consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectData {
    pub scores: ScoreVector,
    pub education: Vec<EducationProfile>,
}

/// Picks the subject's item list out of a parsed line. The positional key
/// wins; a line holding exactly one key is accepted under that key.
pub fn subject_items<'a>(line: &'a Value, positional_key: &str) -> Result<&'a [Value], SubjectError> {
    let obj = line
        .as_object()
        .ok_or_else(|| SubjectError::MalformedLine("line is not a JSON object".to_string()))?;
    let items = match obj.get(positional_key) {
        Some(v) => v,
        None if obj.len() == 1 => {
            let (key, v) = obj.iter().next().ok_or(SubjectError::MissingRecord)?;
            tracing::debug!(positional_key, found = %key, "positional key absent; using sole key");
            v
        }
        None => return Err(SubjectError::MissingRecord),
    };
    items
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| SubjectError::MalformedLine("subject value is not a list".to_string()))
}

pub fn parse_subject(items: &[Value]) -> Result<SubjectData, SubjectError> {
    if items.is_empty() {
        return Err(SubjectError::EmptySubject);
    }
    let mut scores = Vec::with_capacity(items.len());
    let mut education = Vec::with_capacity(items.len());
    for (item, record) in items.iter().enumerate() {
        scores.push(parse_score(record, item)?);
        education.push(parse_education(record));
    }
    Ok(SubjectData { scores, education })
}

/// Accepts a JSON number or a numeric string.
fn parse_score(record: &Value, item: usize) -> Result<f64, SubjectError> {
    let raw = record
        .get("overall_score")
        .ok_or(SubjectError::MissingScore { item })?;
    let score = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or(SubjectError::MissingScore { item })?;
    if !score.is_finite() {
        return Err(SubjectError::NonFiniteScore { item });
    }
    Ok(score)
}

fn parse_education(record: &Value) -> EducationProfile {
    let field = |base: &str, name: &str| -> Attr {
        record
            .pointer(&format!("{base}/{name}"))
            .map(attr_from_json)
            .unwrap_or_else(Attr::absent)
    };

    let required_level =
        field(JOB_EDUCATION, "required_level").or(field(JOB_EDUCATION, "required_degree"));

    EducationProfile {
        level: AxisPair::new(field(CANDIDATE_EDUCATION, "level"), required_level),
        major: AxisPair::new(
            field(CANDIDATE_EDUCATION, "major"),
            field(JOB_EDUCATION, "required_major"),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/records.rs"]
mod tests;
