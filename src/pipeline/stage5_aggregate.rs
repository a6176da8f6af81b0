use std::collections::BTreeMap;

use serde::Serialize;

use crate::input::rankings::ReferenceRankingSet;
use crate::input::subject_id;
use crate::model::tau::{Tau, UndefinedReason};
use crate::pipeline::stage4_align::kendall_tau_b;

/// Mean over the defined values of a tau collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MeanStat {
    pub mean: f64,
    pub n_defined: usize,
    pub n_undefined: usize,
}

impl MeanStat {
    pub fn from_taus<I: IntoIterator<Item = Tau>>(taus: I) -> Self {
        let mut defined = Vec::new();
        let mut n_undefined = 0usize;
        for tau in taus {
            match tau.value() {
                Some(v) => defined.push(v),
                None => n_undefined += 1,
            }
        }
        Self {
            mean: mean(&defined),
            n_defined: defined.len(),
            n_undefined,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAlignment {
    pub subject: String,
    pub alignments: BTreeMap<String, Tau>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectMean {
    pub subject: String,
    #[serde(flatten)]
    pub stat: MeanStat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgreementRow {
    pub subject: String,
    pub tau: Tau,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UndefinedReason>,
}

/// Tau between two reference sources' own rankings, per subject row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterSourceAgreement {
    pub sources: Option<(String, String)>,
    pub rows: Vec<AgreementRow>,
    #[serde(flatten)]
    pub stat: MeanStat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GlobalStat {
    pub mean: f64,
    pub std_dev: f64,
    pub n_defined: usize,
    pub n_undefined: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub per_subject: Vec<SubjectMean>,
    pub per_source: BTreeMap<String, MeanStat>,
    pub inter_source: InterSourceAgreement,
    pub global: GlobalStat,
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1); 0.0 below two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Folds per-pair alignment values into subject, source, and global
/// summaries. Undefined values are counted but never averaged in.
pub fn aggregate(
    alignments: &[SubjectAlignment],
    source_ids: &[String],
    inter_source: InterSourceAgreement,
) -> SummaryStats {
    let per_subject = alignments
        .iter()
        .map(|s| SubjectMean {
            subject: s.subject.clone(),
            stat: MeanStat::from_taus(s.alignments.values().copied()),
        })
        .collect();

    let per_source = source_ids
        .iter()
        .map(|source| {
            let stat = MeanStat::from_taus(
                alignments
                    .iter()
                    .filter_map(|s| s.alignments.get(source).copied()),
            );
            (source.clone(), stat)
        })
        .collect();

    let all: Vec<Tau> = alignments
        .iter()
        .flat_map(|s| s.alignments.values().copied())
        .collect();
    let defined: Vec<f64> = all.iter().filter_map(|t| t.value()).collect();
    let global = GlobalStat {
        mean: mean(&defined),
        std_dev: sample_std_dev(&defined),
        n_defined: defined.len(),
        n_undefined: all.len() - defined.len(),
    };

    SummaryStats {
        per_subject,
        per_source,
        inter_source,
        global,
    }
}

/// Resolves which two sources are compared for inter-source agreement.
///
/// An explicit request is honoured only when both sources exist. Otherwise
/// `<prefix>1` and `<prefix>2` are used when present, falling back to the
/// first two sources in key order.
pub fn select_agreement_pair(
    set: &ReferenceRankingSet,
    requested: Option<(&str, &str)>,
    source_prefix: &str,
) -> Option<(String, String)> {
    if let Some((a, b)) = requested {
        if set.sources.contains_key(a) && set.sources.contains_key(b) && a != b {
            return Some((a.to_string(), b.to_string()));
        }
        tracing::warn!(a, b, "requested agreement sources not both present; agreement skipped");
        return None;
    }

    let first = format!("{source_prefix}1");
    let second = format!("{source_prefix}2");
    if set.sources.contains_key(&first) && set.sources.contains_key(&second) {
        return Some((first, second));
    }
    let mut ids = set.source_ids();
    match (ids.next(), ids.next()) {
        (Some(a), Some(b)) => Some((a.to_string(), b.to_string())),
        _ => None,
    }
}

/// Computes per-row tau between the two chosen sources over the first
/// `limit` rows both of them carry.
pub fn inter_source_agreement(
    set: &ReferenceRankingSet,
    pair: Option<(String, String)>,
    limit: Option<usize>,
    subject_prefix: &str,
) -> InterSourceAgreement {
    let Some((a, b)) = pair else {
        return InterSourceAgreement::default();
    };
    let (Some(rows_a), Some(rows_b)) = (set.sources.get(&a), set.sources.get(&b)) else {
        return InterSourceAgreement::default();
    };

    let n = rows_a.len().min(rows_b.len()).min(limit.unwrap_or(usize::MAX));
    let rows: Vec<AgreementRow> = (0..n)
        .map(|i| {
            let tau = match (&rows_a[i], &rows_b[i]) {
                (Some(ra), Some(rb)) => kendall_tau_b(ra, rb),
                _ => Tau::Undefined(UndefinedReason::MalformedReference),
            };
            AgreementRow {
                subject: subject_id(subject_prefix, i),
                tau,
                reason: tau.reason(),
            }
        })
        .collect();
    let stat = MeanStat::from_taus(rows.iter().map(|r| r.tau));

    InterSourceAgreement {
        sources: Some((a, b)),
        rows,
        stat,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_aggregate.rs"]
mod tests;
