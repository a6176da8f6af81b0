use crate::model::scores::RankVector;

/// Converts adjusted scores into 1-based rank positions per item.
///
/// Highest score ranks 1; equal scores fall back to ascending item index, so
/// the output is a permutation of `1..=N` for any input. NaN sorts above every
/// number under `total_cmp` and therefore takes the leading ranks.
pub fn to_ranking(adjusted: &[f64]) -> RankVector {
    let mut order: Vec<usize> = (0..adjusted.len()).collect();
    order.sort_by(|&a, &b| adjusted[b].total_cmp(&adjusted[a]).then(a.cmp(&b)));

    let mut ranks = vec![0u32; adjusted.len()];
    for (position, idx) in order.into_iter().enumerate() {
        ranks[idx] = position as u32 + 1;
    }
    ranks
}

/// Item indices in ranked order, best first. Inverse of [`to_ranking`].
pub fn ranked_items(ranks: &[u32]) -> Vec<usize> {
    let mut items: Vec<usize> = (0..ranks.len()).collect();
    items.sort_by_key(|&i| (ranks[i], i));
    items
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_rank.rs"]
mod tests;
