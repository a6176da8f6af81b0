use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::input::rankings::ReferenceRankingSet;
use crate::input::{ScoredInput, SubjectError, SubjectInput};
use crate::model::profile::AdjustmentProfile;
use crate::model::tau::{Tau, UndefinedReason};
use crate::report::{EvaluationReport, RunSettings, SkippedSubject, SubjectEvaluation, ToolMeta};

pub mod stage1_similarity;
pub mod stage2_adjust;
pub mod stage3_rank;
pub mod stage4_align;
pub mod stage5_aggregate;
pub mod stage6_report;

use stage2_adjust::adjust_scores;
use stage3_rank::to_ranking;
use stage4_align::kendall_tau_b;
use stage5_aggregate::{
    SubjectAlignment, aggregate, inter_source_agreement, select_agreement_pair,
};

#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub profile: AdjustmentProfile,
    pub max_subjects: Option<usize>,
    pub subject_prefix: String,
    pub source_prefix: String,
    pub agreement: Option<(String, String)>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            profile: AdjustmentProfile::default_v1(),
            max_subjects: None,
            subject_prefix: "Subject".to_string(),
            source_prefix: "ranklist_".to_string(),
            agreement: None,
        }
    }
}

/// Runs adjust → rank → align for every subject, then aggregates.
///
/// Subjects are independent; a subject that fails is listed under `skipped`
/// and left out of every aggregate. Output order follows subject position.
pub fn evaluate(
    scored: &ScoredInput,
    rankings: &ReferenceRankingSet,
    config: &EvalConfig,
) -> EvaluationReport {
    if scored.is_empty() {
        tracing::warn!("no subjects to evaluate");
    }
    if rankings.is_empty() {
        tracing::warn!("no reference sources; every alignment will be empty");
    }
    let limit = config.max_subjects.unwrap_or(usize::MAX);
    let source_ids: Vec<String> = rankings.source_ids().map(str::to_string).collect();

    let mut subjects = Vec::new();
    let mut skipped = Vec::new();
    let mut n_read = 0usize;

    for input in scored.subjects.iter().take(limit) {
        n_read += 1;
        match evaluate_subject_guarded(input, rankings, &source_ids, &config.profile) {
            Ok(eval) => subjects.push(eval),
            Err(err) => {
                tracing::warn!(subject = %input.id, error = %err, "subject excluded from aggregation");
                skipped.push(SkippedSubject {
                    subject: input.id.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let alignments: Vec<SubjectAlignment> = subjects
        .iter()
        .map(|s| SubjectAlignment {
            subject: s.subject.clone(),
            alignments: s.alignments.clone(),
        })
        .collect();

    let requested = config
        .agreement
        .as_ref()
        .map(|(a, b)| (a.as_str(), b.as_str()));
    let pair = select_agreement_pair(rankings, requested, &config.source_prefix);
    let agreement =
        inter_source_agreement(rankings, pair, config.max_subjects, &config.subject_prefix);
    let summary = aggregate(&alignments, &source_ids, agreement);

    tracing::info!(
        read = n_read,
        evaluated = subjects.len(),
        skipped = skipped.len(),
        sources = source_ids.len(),
        mean_tau = summary.global.mean,
        "evaluation complete"
    );

    EvaluationReport {
        tool: ToolMeta::current(),
        settings: RunSettings {
            subject_prefix: config.subject_prefix.clone(),
            source_prefix: config.source_prefix.clone(),
            max_subjects: config.max_subjects,
            major_lookup: config.profile.major_lookup,
            similarity_weight: config.profile.similarity_weight,
            tier_step: config.profile.tier_step,
        },
        n_subjects_read: n_read,
        n_subjects_evaluated: subjects.len(),
        sources: source_ids,
        subjects,
        skipped,
        summary,
    }
}

/// A panic inside one subject is turned into a per-subject error.
fn evaluate_subject_guarded(
    input: &SubjectInput,
    rankings: &ReferenceRankingSet,
    source_ids: &[String],
    profile: &AdjustmentProfile,
) -> Result<SubjectEvaluation, SubjectError> {
    catch_unwind(AssertUnwindSafe(|| {
        evaluate_subject(input, rankings, source_ids, profile)
    }))
    .unwrap_or_else(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(SubjectError::Internal(msg))
    })
}

pub fn evaluate_subject(
    input: &SubjectInput,
    rankings: &ReferenceRankingSet,
    source_ids: &[String],
    profile: &AdjustmentProfile,
) -> Result<SubjectEvaluation, SubjectError> {
    let data = input.data.as_ref().map_err(Clone::clone)?;
    if data.scores.is_empty() {
        return Err(SubjectError::EmptySubject);
    }
    if data.education.len() != data.scores.len() {
        return Err(SubjectError::ProfileMismatch {
            scores: data.scores.len(),
            profiles: data.education.len(),
        });
    }

    let adjusted = adjust_scores(&data.scores, &data.education, profile);
    let ranking = to_ranking(&adjusted);

    let mut alignments = BTreeMap::new();
    let mut undefined = BTreeMap::new();
    for source in source_ids {
        let tau = match rankings.row(source, input.position) {
            Some(Some(reference)) => kendall_tau_b(&ranking, reference),
            Some(None) => Tau::Undefined(UndefinedReason::MalformedReference),
            None => Tau::Undefined(UndefinedReason::MissingReference),
        };
        if let Some(reason) = tau.reason() {
            tracing::debug!(subject = %input.id, source = %source, reason = reason.as_str(), "undefined alignment");
            undefined.insert(source.clone(), reason);
        }
        alignments.insert(source.clone(), tau);
    }

    Ok(SubjectEvaluation {
        subject: input.id.clone(),
        raw_scores: data.scores.clone(),
        adjusted_scores: adjusted,
        ranking,
        alignments,
        undefined,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
