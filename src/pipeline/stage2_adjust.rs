use crate::model::education::EducationProfile;
use crate::model::profile::AdjustmentProfile;
use crate::model::scores::AdjustedScoreVector;
use crate::pipeline::stage1_similarity::combined_similarity;

/// Items sharing one raw score, in ascending item index.
#[derive(Debug, Clone, PartialEq)]
pub struct TieGroup {
    pub score: f64,
    pub members: Vec<usize>,
}

/// Groups item indices by identical raw score. Groups come out in ascending
/// score order, so the cap of group `i` is the score of group `i + 1`.
pub fn group_ties(scores: &[f64]) -> Vec<TieGroup> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]).then(a.cmp(&b)));

    let mut groups: Vec<TieGroup> = Vec::new();
    for idx in order {
        let score = scores[idx];
        match groups.last_mut() {
            Some(last) if last.score == score => last.members.push(idx),
            _ => groups.push(TieGroup {
                score,
                members: vec![idx],
            }),
        }
    }
    groups
}

/// Breaks ties among equal raw scores using education similarity.
///
/// Singleton scores pass through untouched. Inside a tie group members are
/// ordered by descending combined similarity (index ascending on equal
/// similarity) and the member at position `rank` receives
/// `similarity * similarity_weight + (k - rank - 1) * tier_step`.
/// Adjusted values stay in `[score, cap)` where `cap` is the next distinct
/// raw score.
pub fn adjust_scores(
    scores: &[f64],
    education: &[EducationProfile],
    profile: &AdjustmentProfile,
) -> AdjustedScoreVector {
    let mut adjusted = scores.to_vec();
    let groups = group_ties(scores);

    for (i, group) in groups.iter().enumerate() {
        if group.members.len() < 2 {
            continue;
        }
        let cap = groups.get(i + 1).map(|g| g.score);
        for (idx, value) in resolve_tie_group(group, cap, education, profile) {
            adjusted[idx] = value;
        }
    }
    adjusted
}

fn resolve_tie_group(
    group: &TieGroup,
    cap: Option<f64>,
    education: &[EducationProfile],
    profile: &AdjustmentProfile,
) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = group
        .members
        .iter()
        .map(|&idx| {
            let sim = education
                .get(idx)
                .map(|p| combined_similarity(p, profile.major_lookup))
                .unwrap_or(0.0);
            (idx, sim)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let k = ranked.len();
    let bonuses: Vec<f64> = ranked
        .iter()
        .enumerate()
        .map(|(rank, &(_, sim))| {
            sim * profile.similarity_weight + (k - rank - 1) as f64 * profile.tier_step
        })
        .collect();

    let scale = cap
        .map(|cap| bonus_scale(group.score, cap, bonuses[0], profile.tier_step))
        .unwrap_or(1.0);
    if scale < 1.0 {
        tracing::debug!(
            score = group.score,
            members = k,
            scale,
            "tie group bonuses compressed below next score tier"
        );
    }

    ranked
        .iter()
        .zip(&bonuses)
        .map(|(&(idx, _), &bonus)| (idx, group.score + bonus * scale))
        .collect()
}

/// Factor applied to every bonus of a group so the largest one lands no
/// higher than `cap - step`, or halfway to `cap` when the gap is narrower than
/// `step`. Uniform scaling keeps the bonuses strictly decreasing.
fn bonus_scale(score: f64, cap: f64, max_bonus: f64, step: f64) -> f64 {
    if max_bonus <= 0.0 {
        return 1.0;
    }
    let gap = cap - score;
    let headroom = if gap > step { gap - step } else { gap / 2.0 };
    if max_bonus <= headroom {
        1.0
    } else {
        headroom / max_bonus
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_adjust.rs"]
mod tests;
