use crate::model::degree::DegreeLevel;
use crate::model::education::{Attr, EducationProfile};
use crate::model::majors::{MajorGroupLookup, is_related};

pub const SIM_NONE: f64 = 0.0;
pub const SIM_PARTIAL: f64 = 0.5;
pub const SIM_FULL: f64 = 1.0;

/// Degree-level similarity in {0, 0.5, 1}.
///
/// No requirement scores 1; a requirement with no candidate level scores 0.
/// Meeting the requirement or exceeding it by one tier scores 1; exceeding it
/// by two or more tiers scores 0.5 (over-qualification).
pub fn degree_sim(candidate: &Attr, required: &Attr) -> f64 {
    let Some(required) = required.first() else {
        return SIM_FULL;
    };
    let Some(candidate) = candidate.first() else {
        return SIM_NONE;
    };

    let cand_level = DegreeLevel::parse(candidate).ordinal();
    let req_level = DegreeLevel::parse(required).ordinal();
    match cand_level - req_level {
        d if d < 0 => SIM_NONE,
        0 | 1 => SIM_FULL,
        _ => SIM_PARTIAL,
    }
}

/// Major-field similarity in {0, 0.5, 1}. Group membership is looked up under
/// the job's major.
pub fn major_sim(candidate: &Attr, required: &Attr, lookup: MajorGroupLookup) -> f64 {
    let Some(required) = required.first() else {
        return SIM_FULL;
    };
    let Some(candidate) = candidate.first() else {
        return SIM_NONE;
    };

    let candidate = candidate.to_lowercase();
    let required = required.to_lowercase();
    if candidate == required {
        SIM_FULL
    } else if is_related(&candidate, &required, lookup) {
        SIM_PARTIAL
    } else {
        SIM_NONE
    }
}

/// Level plus major similarity, range [0, 2].
pub fn combined_similarity(profile: &EducationProfile, lookup: MajorGroupLookup) -> f64 {
    degree_sim(&profile.level.candidate, &profile.level.required)
        + major_sim(&profile.major.candidate, &profile.major.required, lookup)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_similarity.rs"]
mod tests;
