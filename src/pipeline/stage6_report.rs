use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::EvaluationReport;
use crate::report::json::render_report_json;
use crate::report::text::render_report_text;
use crate::report::tsv::render_alignment_tsv;

pub const SUMMARY_JSON: &str = "summary.json";
pub const REPORT_TXT: &str = "report.txt";
pub const ALIGNMENT_TSV: &str = "alignment.tsv";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialise report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub summary_json: PathBuf,
    pub report_txt: PathBuf,
    pub alignment_tsv: PathBuf,
}

pub fn write_reports(report: &EvaluationReport, out_dir: &Path) -> Result<WrittenReports, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let written = WrittenReports {
        summary_json: out_dir.join(SUMMARY_JSON),
        report_txt: out_dir.join(REPORT_TXT),
        alignment_tsv: out_dir.join(ALIGNMENT_TSV),
    };

    write_text(&written.summary_json, &render_report_json(report)?)?;
    write_text(&written.report_txt, &render_report_text(report))?;
    write_text(&written.alignment_tsv, &render_alignment_tsv(report))?;
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
