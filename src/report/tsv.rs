use crate::report::{EvaluationReport, format_f64_6};

/// One row per (subject, source) pair; undefined values are `NA` with the
/// reason in the last column.
pub fn render_alignment_tsv(report: &EvaluationReport) -> String {
    let mut out = String::from("subject\tsource\ttau\treason\n");
    for s in &report.subjects {
        for (source, tau) in &s.alignments {
            let (value, reason) = match tau.value() {
                Some(v) => (format_f64_6(v), String::new()),
                None => (
                    "NA".to_string(),
                    tau.reason().map(|r| r.as_str().to_string()).unwrap_or_default(),
                ),
            };
            out.push_str(&format!("{}\t{}\t{}\t{}\n", s.subject, source, value, reason));
        }
    }
    out
}
