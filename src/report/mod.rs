use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::majors::MajorGroupLookup;
use crate::model::scores::{AdjustedScoreVector, RankVector, ScoreVector};
use crate::model::tau::{Tau, UndefinedReason};
use crate::pipeline::stage5_aggregate::SummaryStats;

pub mod json;
pub mod text;
pub mod tsv;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

impl ToolMeta {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Settings that shaped the run, echoed into the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSettings {
    pub subject_prefix: String,
    pub source_prefix: String,
    pub max_subjects: Option<usize>,
    pub major_lookup: MajorGroupLookup,
    pub similarity_weight: f64,
    pub tier_step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectEvaluation {
    pub subject: String,
    pub raw_scores: ScoreVector,
    pub adjusted_scores: AdjustedScoreVector,
    pub ranking: RankVector,
    pub alignments: BTreeMap<String, Tau>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub undefined: BTreeMap<String, UndefinedReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSubject {
    pub subject: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub tool: ToolMeta,
    pub settings: RunSettings,
    pub n_subjects_read: usize,
    pub n_subjects_evaluated: usize,
    pub sources: Vec<String>,
    pub subjects: Vec<SubjectEvaluation>,
    pub skipped: Vec<SkippedSubject>,
    pub summary: SummaryStats,
}

impl EvaluationReport {
    pub fn has_data(&self) -> bool {
        !self.subjects.is_empty()
    }
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Tau as text; undefined renders as `NA`.
pub fn format_tau(tau: Tau) -> String {
    match tau {
        Tau::Defined(v) => format_f64_3(v),
        Tau::Undefined(_) => "NA".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
