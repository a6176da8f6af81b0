use crate::report::EvaluationReport;

/// Pretty-printed structured report. Undefined tau values serialise as
/// `null`; their reasons sit under each subject's `undefined` map.
pub fn render_report_json(report: &EvaluationReport) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
