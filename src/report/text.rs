use crate::pipeline::stage3_rank::ranked_items;
use crate::report::{EvaluationReport, format_f64_3, format_tau};

pub fn render_report_text(report: &EvaluationReport) -> String {
    let mut out = String::new();

    out.push_str("Rank Alignment Report\n");
    out.push_str("=====================\n\n");
    out.push_str(&format!(
        "{} {}\n",
        report.tool.name, report.tool.version
    ));
    out.push_str(&format!(
        "Subjects read: {}, evaluated: {}, skipped: {}\n",
        report.n_subjects_read,
        report.n_subjects_evaluated,
        report.skipped.len()
    ));
    out.push_str(&format!(
        "Reference sources: {}\n\n",
        if report.sources.is_empty() {
            "none".to_string()
        } else {
            report.sources.join(", ")
        }
    ));

    if !report.has_data() {
        out.push_str("No data: no subject could be evaluated.\n");
        push_skipped(&mut out, report);
        return out;
    }

    out.push_str("1. Performance\n");
    let g = &report.summary.global;
    out.push_str(&format!(
        "Overall mean Kendall's tau: {}\n",
        format_f64_3(g.mean)
    ));
    out.push_str(&format!(
        "Overall standard deviation of tau: {}\n",
        format_f64_3(g.std_dev)
    ));
    out.push_str(&format!(
        "Defined pairs: {}, undefined pairs: {}\n\n",
        g.n_defined, g.n_undefined
    ));

    out.push_str("2. Per-subject mean tau\n");
    for s in &report.summary.per_subject {
        out.push_str(&format!(
            "  {}: {}{}\n",
            s.subject,
            format_f64_3(s.stat.mean),
            undefined_note(s.stat.n_defined, s.stat.n_undefined)
        ));
    }
    out.push('\n');

    out.push_str("3. Per-source mean tau\n");
    for (source, stat) in &report.summary.per_source {
        out.push_str(&format!(
            "  {}: {}{}\n",
            source,
            format_f64_3(stat.mean),
            undefined_note(stat.n_defined, stat.n_undefined)
        ));
    }
    out.push('\n');

    out.push_str("4. Inter-source agreement\n");
    let agreement = &report.summary.inter_source;
    match &agreement.sources {
        Some((a, b)) => out.push_str(&format!(
            "  {} vs {}: {}{}\n",
            a,
            b,
            format_f64_3(agreement.stat.mean),
            undefined_note(agreement.stat.n_defined, agreement.stat.n_undefined)
        )),
        None => out.push_str("  not available (fewer than two sources)\n"),
    }
    out.push('\n');

    out.push_str("5. Subject detail\n");
    for s in &report.subjects {
        let order = ranked_items(&s.ranking)
            .into_iter()
            .map(|i| (i + 1).to_string())
            .collect::<Vec<_>>()
            .join(" > ");
        out.push_str(&format!("  {}: model order {}\n", s.subject, order));
        for (source, tau) in &s.alignments {
            out.push_str(&format!("    {}: {}", source, format_tau(*tau)));
            if let Some(reason) = s.undefined.get(source) {
                out.push_str(&format!(" ({})", reason.as_str()));
            }
            out.push('\n');
        }
    }

    push_skipped(&mut out, report);
    out
}

fn undefined_note(n_defined: usize, n_undefined: usize) -> String {
    if n_undefined == 0 {
        String::new()
    } else {
        format!(" ({} defined, {} undefined)", n_defined, n_undefined)
    }
}

fn push_skipped(out: &mut String, report: &EvaluationReport) {
    if report.skipped.is_empty() {
        return;
    }
    out.push_str("\nSkipped subjects\n");
    for s in &report.skipped {
        out.push_str(&format!("  {}: {}\n", s.subject, s.reason));
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
