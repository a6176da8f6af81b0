/// Raw relevance scores of one subject against N reference items.
pub type ScoreVector = Vec<f64>;

/// Same shape as [`ScoreVector`], perturbed only inside tie groups.
pub type AdjustedScoreVector = Vec<f64>;

/// 1-based rank position per reference item; a permutation of `1..=N`
/// when produced by the rank extractor.
pub type RankVector = Vec<u32>;
